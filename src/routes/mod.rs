use axum::{routing::get, Router};

use crate::config::AppState;
use crate::handlers::{create_user, delete_user, get_user, health_check, list_users, update_user};

/// Create API router
pub fn create_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/health", get(health_check));

    let user_routes = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).put(update_user).delete(delete_user));

    Router::new()
        .merge(health_routes)
        .merge(user_routes)
        .with_state(state)
}
