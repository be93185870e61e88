use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{handlers, middleware::add_security_headers, AppState};

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::show_registration_form).post(handlers::submit_registration_form),
        )
        .route("/health", get(handlers::health_handler))
        .layer(middleware::from_fn(add_security_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
