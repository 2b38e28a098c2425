//! Portal capability responses.

use campus_core::CapabilitySet;
use campus_core::capabilities::capabilities_for;
use campus_core::roles::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Capabilities of the authenticated caller.
///
/// `role` is `None` when no profile could be resolved; `capabilities` is then
/// all false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PermissionsResponse {
    pub user_id: Uuid,
    pub role: Option<String>,
    pub capabilities: CapabilitySet,
}

/// A single row of the role policy table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RoleCapabilitiesResponse {
    pub role: String,
    /// Whether `role` belongs to the closed role set
    pub recognized: bool,
    /// Role used for matching (`faculty` is reported as `teacher`)
    pub normalized_role: Option<Role>,
    pub capabilities: CapabilitySet,
    /// Names of the granted flags, in table order
    pub granted: Vec<String>,
}

impl RoleCapabilitiesResponse {
    pub fn for_role(role: &str) -> Self {
        let parsed = Role::parse_optional(Some(role));
        let capabilities = capabilities_for(Some(role));

        Self {
            role: role.to_string(),
            recognized: parsed.is_some(),
            normalized_role: parsed.map(Role::normalized),
            granted: capabilities
                .granted()
                .into_iter()
                .map(str::to_string)
                .collect(),
            capabilities,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_row_reports_teacher() {
        let row = RoleCapabilitiesResponse::for_role("faculty");
        assert!(row.recognized);
        assert_eq!(row.normalized_role, Some(Role::Teacher));
        assert!(row.granted.contains(&"mark_attendance".to_string()));
    }

    #[test]
    fn test_unknown_row() {
        let row = RoleCapabilitiesResponse::for_role("dean");
        assert!(!row.recognized);
        assert_eq!(row.normalized_role, None);
        assert!(row.granted.is_empty());
        assert!(row.capabilities.is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let row = RoleCapabilitiesResponse::for_role("parent");
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["normalized_role"], "parent");
        assert_eq!(json["capabilities"]["make_child_payments"], true);
        assert_eq!(json["capabilities"]["make_payments"], false);
    }
}
