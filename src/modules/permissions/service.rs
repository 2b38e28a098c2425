use campus_core::access::resolve_user_access;
use campus_models::{PermissionsResponse, RoleCapabilitiesResponse};
use tracing::instrument;
use uuid::Uuid;

use crate::state::Directory;

pub struct PermissionService;

impl PermissionService {
    /// Resolves the caller's portal capabilities from their stored role.
    ///
    /// Never fails: an unreadable profile yields the all-false set.
    #[instrument(skip(directory))]
    pub async fn permissions_for(directory: &dyn Directory, user_id: Uuid) -> PermissionsResponse {
        let access = resolve_user_access(directory, Some(user_id)).await;

        PermissionsResponse {
            user_id,
            role: access.role,
            capabilities: access.capabilities,
        }
    }

    pub fn role_capabilities(role: &str) -> RoleCapabilitiesResponse {
        RoleCapabilitiesResponse::for_role(role)
    }
}
