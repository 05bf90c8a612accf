/// API route modules
pub mod extract;
pub mod health;
pub mod messages;
pub mod users;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Build the `/api` router
///
/// Trace and CORS layers are added by the caller.
pub fn router(app_state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/", get(users::list_users))
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route(
            "/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        );

    let message_routes = Router::new()
        .route(
            "/",
            get(messages::list_messages).post(messages::create_message),
        )
        .route(
            "/:id",
            get(messages::get_message).delete(messages::delete_message),
        );

    let api_routes = Router::new()
        .route("/health", get(health::health))
        .nest("/user", user_routes)
        .nest("/message", message_routes);

    Router::new()
        .nest("/api", api_routes)
        .with_state(app_state)
}
