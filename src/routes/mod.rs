// Route definitions

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::cache::LoadState;
use crate::supabase_api;
use crate::AppState;

mod api;
mod pages;

pub fn create_router(app_state: AppState) -> Router {
    // JSON API routes; handlers expect AppState via the State extractor.
    let api_router = Router::new()
        .route("/anunturi", get(api::get_listings))
        .with_state(app_state.clone());

    Router::new()
        .route("/", get(pages::root))
        .route("/listings", get(pages::listings_page))
        .nest("/api", api_router)
        .with_state(app_state)
}

// Serves the cached listing set, loading on demand when the cache is still
// idle or when the caller explicitly asked for a fresh load (the retry
// affordance). A load that is already in flight is left alone and its
// Loading state is returned as-is.
pub(crate) async fn ensure_listings(app_state: &AppState, force_reload: bool) -> LoadState {
    let current = app_state.cache.state().await;
    let needs_load = match &current {
        LoadState::Idle => true,
        LoadState::Loading => false,
        LoadState::Loaded(_) | LoadState::Failed(_) => force_reload,
    };
    if !needs_load {
        return current;
    }

    let client = Arc::clone(&app_state.http_client);
    let settings = Arc::clone(&app_state.settings);
    app_state
        .cache
        .load_with(move || async move { supabase_api::fetch_listings(&client, &settings).await })
        .await
}
