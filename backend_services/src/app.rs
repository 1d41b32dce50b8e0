use axum::{
    extract::{DefaultBodyLimit, FromRef},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::Key;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use triage_core::TextGenerator;

use crate::{
    config::Config,
    handlers::{analyze_submission, clear_history, index},
    services::session_service::signing_key,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<dyn TextGenerator>,
    pub key: Key,
}

impl AppState {
    pub fn new(config: Config, generator: Arc<dyn TextGenerator>) -> Self {
        let key = signing_key(&config.session_secret);
        Self {
            config: Arc::new(config),
            generator,
            key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index).post(analyze_submission))
        .route("/clear", get(clear_history))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}
