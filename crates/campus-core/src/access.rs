//! Lookup-backed resolvers with default-deny recovery.
//!
//! The policy tables in [`capabilities`](crate::capabilities) and
//! [`department`](crate::department) are pure. This module puts them behind
//! the two external lookups the portal depends on:
//!
//! - [`ProfileLookup`]: user id → profile `user_type`
//! - [`MembershipLookup`]: (department id, user id) → active membership roles
//!
//! Every failure path (missing identity, missing row, ambiguous rows,
//! transport errors) ends in the all-false set. The `try_*` functions expose
//! the classified [`AccessError`]; the `resolve_*` functions swallow it after
//! logging and counting it.

use async_trait::async_trait;
use metrics::counter;
use serde::Serialize;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::capabilities::{CapabilitySet, capabilities_for};
use crate::department::{DepartmentCapabilitySet, department_capabilities_for_role};
use crate::roles::{DepartmentRole, Role};

/// Transport or backend failure reported by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct LookupError(String);

impl LookupError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("no profile found for user {0}")]
    ProfileNotFound(Uuid),

    #[error("no active membership for user {user_id} in department {department_id}")]
    MembershipNotFound { department_id: Uuid, user_id: Uuid },

    #[error("lookup failed: {0}")]
    LookupFailed(#[from] LookupError),
}

impl AccessError {
    /// Short label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AccessError::ProfileNotFound(_) => "profile_not_found",
            AccessError::MembershipNotFound { .. } => "membership_not_found",
            AccessError::LookupFailed(_) => "lookup_failed",
        }
    }
}

#[async_trait]
pub trait ProfileLookup: Send + Sync {
    /// Returns the profile's `user_type`, or `None` when there is no profile
    /// row or the row carries no type.
    async fn user_type(&self, user_id: Uuid) -> Result<Option<String>, LookupError>;
}

#[async_trait]
pub trait MembershipLookup: Send + Sync {
    /// Returns the role of every active membership row for the pair.
    ///
    /// Exactly one row is expected; callers treat anything else as not found.
    async fn active_roles(
        &self,
        department_id: Uuid,
        user_id: Uuid,
    ) -> Result<Vec<String>, LookupError>;
}

/// Capabilities resolved for one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAccess {
    /// Raw role identifier from the profile, if one was found.
    pub role: Option<String>,
    pub capabilities: CapabilitySet,
}

impl UserAccess {
    pub fn denied() -> Self {
        Self {
            role: None,
            capabilities: CapabilitySet::NONE,
        }
    }
}

/// Capabilities resolved for one identity inside one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentAccess {
    /// Department the result was computed for.
    pub department_id: Option<Uuid>,
    pub role: Option<DepartmentRole>,
    pub capabilities: DepartmentCapabilitySet,
}

impl DepartmentAccess {
    pub fn denied(department_id: Option<Uuid>) -> Self {
        Self {
            department_id,
            role: None,
            capabilities: DepartmentCapabilitySet::NONE,
        }
    }
}

fn record(kind: &'static str, outcome: &'static str) {
    counter!("capability_resolutions_total", "kind" => kind, "outcome" => outcome).increment(1);
}

/// Fetches the raw role identifier for a user.
#[instrument(skip(lookup))]
pub async fn try_resolve_user_role<L>(lookup: &L, user_id: Uuid) -> Result<String, AccessError>
where
    L: ProfileLookup + ?Sized,
{
    lookup
        .user_type(user_id)
        .await?
        .ok_or(AccessError::ProfileNotFound(user_id))
}

/// Resolves a user's portal capabilities, falling back to default-deny.
///
/// `None` stands for "no identity" and resolves without touching the lookup.
#[instrument(skip(lookup))]
pub async fn resolve_user_access<L>(lookup: &L, user_id: Option<Uuid>) -> UserAccess
where
    L: ProfileLookup + ?Sized,
{
    let Some(user_id) = user_id else {
        record("profile", "no_identity");
        return UserAccess::denied();
    };

    match try_resolve_user_role(lookup, user_id).await {
        Ok(role) => {
            if Role::parse_optional(Some(&role)).is_none() {
                debug!(user_id = %user_id, role = %role, "Unrecognized role, denying all capabilities");
            }
            record("profile", "resolved");
            UserAccess {
                capabilities: capabilities_for(Some(&role)),
                role: Some(role),
            }
        }
        Err(err) => {
            warn!(user_id = %user_id, error = %err, kind = err.kind(), "Capability resolution fell back to default-deny");
            record("profile", err.kind());
            UserAccess::denied()
        }
    }
}

/// Fetches the single active department role for a user.
#[instrument(skip(lookup))]
pub async fn try_resolve_department_role<L>(
    lookup: &L,
    department_id: Uuid,
    user_id: Uuid,
) -> Result<DepartmentRole, AccessError>
where
    L: MembershipLookup + ?Sized,
{
    let not_found = || AccessError::MembershipNotFound {
        department_id,
        user_id,
    };

    let rows = lookup.active_roles(department_id, user_id).await?;
    match rows.as_slice() {
        [role] => role.parse().map_err(|_| not_found()),
        _ => Err(not_found()),
    }
}

/// Resolves department capabilities, falling back to default-deny.
///
/// When either id is absent the lookup is not called.
#[instrument(skip(lookup))]
pub async fn resolve_department_access<L>(
    lookup: &L,
    department_id: Option<Uuid>,
    user_id: Option<Uuid>,
) -> DepartmentAccess
where
    L: MembershipLookup + ?Sized,
{
    let (Some(dept), Some(user)) = (department_id, user_id) else {
        record("department", "no_identity");
        return DepartmentAccess::denied(department_id);
    };

    match try_resolve_department_role(lookup, dept, user).await {
        Ok(role) => {
            record("department", "resolved");
            DepartmentAccess {
                department_id,
                role: Some(role),
                capabilities: department_capabilities_for_role(role),
            }
        }
        Err(err) => {
            warn!(department_id = %dept, user_id = %user, error = %err, kind = err.kind(), "Department resolution fell back to default-deny");
            record("department", err.kind());
            DepartmentAccess::denied(department_id)
        }
    }
}
