use campus_core::access::resolve_department_access;
use campus_models::DepartmentPermissionsResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::state::Directory;

pub struct DepartmentService;

impl DepartmentService {
    /// Resolves the caller's capabilities inside one department.
    ///
    /// The response always echoes `department_id`, including default-deny
    /// answers, so clients can discard results for a department they have
    /// already left.
    #[instrument(skip(directory))]
    pub async fn permissions_for(
        directory: &dyn Directory,
        department_id: Uuid,
        user_id: Uuid,
    ) -> DepartmentPermissionsResponse {
        let access =
            resolve_department_access(directory, Some(department_id), Some(user_id)).await;

        DepartmentPermissionsResponse {
            department_id,
            user_id,
            role: access.role,
            capabilities: access.capabilities,
        }
    }
}
