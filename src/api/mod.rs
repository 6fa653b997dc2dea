use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::{inference::TextGenerator, prompts::PromptProfile};

pub mod handlers;
pub mod types;

use handlers::{generate_sermon_prep, health, not_found};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
    pub profile: PromptProfile,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>, profile: PromptProfile) -> Self {
        Self { generator, profile }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/generate-sermon-prep", post(generate_sermon_prep))
        .route("/api/health", get(health))
        .fallback(not_found)
}
