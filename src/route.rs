use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{handler::*, AppState};

pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Any origin, method and header; wildcard origins rule out credentials
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_checker_handler))
        .route("/todos/", post(create_todo))
        // GET takes an owner id, PATCH and DELETE a todo id
        .route(
            "/todos/:id",
            get(get_todos).patch(update_todo).delete(delete_todo),
        )
        .route("/users/", get(get_users).post(create_user))
        .route("/users/:user_id/", patch(update_user_password))
        .route("/users/:user_id", delete(delete_user))
        .route("/login/", post(login))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
