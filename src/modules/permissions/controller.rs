use axum::{Json, extract::Path, extract::State};
use campus_core::AppError;
use campus_models::{PermissionsResponse, RoleCapabilitiesResponse};
use tracing::instrument;

use crate::middleware::auth::Session;
use crate::state::AppState;

use super::service::PermissionService;

#[utoipa::path(
    get,
    path = "/api/permissions/me",
    responses(
        (status = 200, description = "Capabilities of the caller; all false when no role could be resolved", body = PermissionsResponse),
        (status = 401, description = "Missing or invalid bearer token", body = campus_models::ErrorResponse)
    ),
    tag = "Permissions",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(user_id = %session.user_id))]
pub async fn get_my_permissions(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<PermissionsResponse>, AppError> {
    let permissions =
        PermissionService::permissions_for(state.directory.as_ref(), session.user_id).await;
    Ok(Json(permissions))
}

#[utoipa::path(
    get,
    path = "/api/permissions/roles/{role}",
    params(
        ("role" = String, Path, description = "Role identifier, e.g. `student` or `faculty`")
    ),
    responses(
        (status = 200, description = "Policy table row for the role; unknown roles grant nothing", body = RoleCapabilitiesResponse),
        (status = 401, description = "Missing or invalid bearer token", body = campus_models::ErrorResponse)
    ),
    tag = "Permissions",
    security(("bearer_auth" = []))
)]
pub async fn get_role_capabilities(
    _session: Session,
    Path(role): Path<String>,
) -> Result<Json<RoleCapabilitiesResponse>, AppError> {
    Ok(Json(PermissionService::role_capabilities(&role)))
}
