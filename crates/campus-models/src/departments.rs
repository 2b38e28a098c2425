use campus_core::{DepartmentCapabilitySet, DepartmentRole};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Capabilities of the caller inside one department.
///
/// `department_id` echoes the department the result was computed for, so a
/// client that has already switched departments can drop a late response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DepartmentPermissionsResponse {
    pub department_id: Uuid,
    pub user_id: Uuid,
    pub role: Option<DepartmentRole>,
    pub capabilities: DepartmentCapabilitySet,
}
