//! Portal and department role identifiers.
//!
//! Both role sets are closed: anything outside them parses to an error and is
//! treated as "no role" by the resolvers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Role slugs as stored in the profile `user_type` column.
pub mod slugs {
    pub const STUDENT: &str = "student";
    pub const TEACHER: &str = "teacher";
    pub const FACULTY: &str = "faculty";
    pub const ADMIN: &str = "admin";
    pub const SUPER_ADMIN: &str = "super_admin";
    pub const PARENT: &str = "parent";
    pub const ALUMNI: &str = "alumni";
}

/// Department membership role slugs.
pub mod department_slugs {
    pub const HOD: &str = "hod";
    pub const ADMIN: &str = "admin";
    pub const MEMBER: &str = "member";
}

/// Error returned when a role string is outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

/// Primary account type of a portal user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Teacher,
    /// Legacy spelling of [`Role::Teacher`].
    Faculty,
    Admin,
    SuperAdmin,
    Parent,
    Alumni,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::Student,
        Role::Teacher,
        Role::Faculty,
        Role::Admin,
        Role::SuperAdmin,
        Role::Parent,
        Role::Alumni,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Student => slugs::STUDENT,
            Role::Teacher => slugs::TEACHER,
            Role::Faculty => slugs::FACULTY,
            Role::Admin => slugs::ADMIN,
            Role::SuperAdmin => slugs::SUPER_ADMIN,
            Role::Parent => slugs::PARENT,
            Role::Alumni => slugs::ALUMNI,
        }
    }

    /// Collapses display synonyms onto the role they stand for.
    pub const fn normalized(self) -> Role {
        match self {
            Role::Faculty => Role::Teacher,
            other => other,
        }
    }

    /// Parses an optional role identifier, mapping unknown values to `None`.
    pub fn parse_optional(role: Option<&str>) -> Option<Role> {
        role.and_then(|r| r.parse().ok())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            slugs::STUDENT => Ok(Role::Student),
            slugs::TEACHER => Ok(Role::Teacher),
            slugs::FACULTY => Ok(Role::Faculty),
            slugs::ADMIN => Ok(Role::Admin),
            slugs::SUPER_ADMIN => Ok(Role::SuperAdmin),
            slugs::PARENT => Ok(Role::Parent),
            slugs::ALUMNI => Ok(Role::Alumni),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalizes a raw role identifier for matching (`faculty` → `teacher`).
///
/// Unknown identifiers are returned unchanged.
pub fn normalize_role_str(role: &str) -> &str {
    match role {
        slugs::FACULTY => slugs::TEACHER,
        other => other,
    }
}

/// Role a user holds inside a single department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentRole {
    /// Head of department
    Hod,
    Admin,
    Member,
}

impl DepartmentRole {
    pub const ALL: [DepartmentRole; 3] = [
        DepartmentRole::Hod,
        DepartmentRole::Admin,
        DepartmentRole::Member,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            DepartmentRole::Hod => department_slugs::HOD,
            DepartmentRole::Admin => department_slugs::ADMIN,
            DepartmentRole::Member => department_slugs::MEMBER,
        }
    }

    pub const fn is_manager(self) -> bool {
        matches!(self, DepartmentRole::Hod | DepartmentRole::Admin)
    }
}

impl FromStr for DepartmentRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            department_slugs::HOD => Ok(DepartmentRole::Hod),
            department_slugs::ADMIN => Ok(DepartmentRole::Admin),
            department_slugs::MEMBER => Ok(DepartmentRole::Member),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for DepartmentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
