use axum::{Json, extract::Path, extract::State, extract::rejection::PathRejection};
use campus_core::AppError;
use campus_models::DepartmentPermissionsResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::Session;
use crate::state::AppState;

use super::service::DepartmentService;

#[utoipa::path(
    get,
    path = "/api/departments/{department_id}/permissions/me",
    params(
        ("department_id" = Uuid, Path, description = "Department ID")
    ),
    responses(
        (status = 200, description = "Capabilities of the caller in the department; all false without an active membership", body = DepartmentPermissionsResponse),
        (status = 400, description = "Malformed department ID", body = campus_models::ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = campus_models::ErrorResponse)
    ),
    tag = "Departments",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(user_id = %session.user_id))]
pub async fn get_my_department_permissions(
    State(state): State<AppState>,
    session: Session,
    department_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<DepartmentPermissionsResponse>, AppError> {
    let Path(department_id) = department_id
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid department id: {}", e)))?;

    let permissions = DepartmentService::permissions_for(
        state.directory.as_ref(),
        department_id,
        session.user_id,
    )
    .await;
    Ok(Json(permissions))
}
