use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;

use crate::routes::ltp;
use crate::state::AppState;

pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    Router::<AppState>::new()
        .nest("/api/v1/ltp", ltp::router())
        .layer(TimeoutLayer::new(request_timeout))
        .with_state(state)
}
