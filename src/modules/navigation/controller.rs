use axum::{Json, extract::State};
use campus_core::AppError;
use campus_models::NavigationResponse;
use tracing::instrument;

use crate::middleware::auth::Session;
use crate::state::AppState;

use super::service::NavigationService;

#[utoipa::path(
    get,
    path = "/api/navigation",
    responses(
        (status = 200, description = "Menu entries visible to the caller, in display order", body = NavigationResponse),
        (status = 401, description = "Missing or invalid bearer token", body = campus_models::ErrorResponse)
    ),
    tag = "Navigation",
    security(("bearer_auth" = []))
)]
#[instrument(skip_all, fields(user_id = %session.user_id))]
pub async fn get_navigation(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<NavigationResponse>, AppError> {
    let menu = NavigationService::menu_for(state.directory.as_ref(), session.user_id).await;
    Ok(Json(menu))
}
