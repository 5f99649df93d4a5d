mod root;
mod shifts;

use crate::state::AppStateV2;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    Router,
};
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub async fn app(state: AppStateV2) -> Router {
    Router::new()
        .merge(root::new())
        .nest("/shifts", shifts::new())
        .fallback(root::handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            // see https://docs.rs/tower-http/latest/tower_http/cors/index.html
            // for more details
            CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_origin(Any)
                .allow_headers([CONTENT_TYPE]),
        )
        .with_state(state)
}
