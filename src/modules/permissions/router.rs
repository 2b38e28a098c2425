use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_my_permissions, get_role_capabilities};

pub fn init_permissions_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(get_my_permissions))
        .route("/roles/{role}", get(get_role_capabilities))
}
