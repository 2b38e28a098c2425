use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::get_my_department_permissions;

pub fn init_departments_router() -> Router<AppState> {
    Router::new().route(
        "/{department_id}/permissions/me",
        get(get_my_department_permissions),
    )
}
