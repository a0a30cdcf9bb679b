// Handlers for backend API endpoints

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};
use serde::Serialize;

use crate::{
    browse::BrowseQuery,
    cache::{LoadFailure, LoadState},
    error::AppResult,
    filter,
    models::Listing,
    pagination::PageState,
    AppState,
};

// --- Response Wrappers ---

#[derive(Serialize)]
struct ListingsResponse {
    success: bool,
    total: usize,
    filtered: usize,
    page: usize,
    total_pages: usize,
    listings: Vec<Listing>,
    error: Option<String>,
    error_kind: Option<&'static str>,
}

impl ListingsResponse {
    fn failure(kind: &'static str, message: String) -> Self {
        ListingsResponse {
            success: false,
            total: 0,
            filtered: 0,
            page: 1,
            total_pages: 0,
            listings: Vec::new(),
            error: Some(message),
            error_kind: Some(kind),
        }
    }
}

// --- API Handlers ---

// Same filtered/sorted/paginated view the page renders, as JSON.
pub async fn get_listings(
    State(app_state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(
        page = query.page(),
        q = %query.q,
        "[HANDLER] /api/anunturi - request received"
    );

    let state = super::ensure_listings(&app_state, query.wants_reload()).await;

    let all = match &state {
        LoadState::Loaded(listings) => listings.clone(),
        LoadState::Loading => {
            return Ok(Json(ListingsResponse::failure(
                "loading",
                "O încărcare este deja în curs".to_string(),
            )));
        }
        LoadState::Failed(LoadFailure::Connectivity(msg)) => {
            return Ok(Json(ListingsResponse::failure("connectivity", msg.clone())));
        }
        LoadState::Failed(LoadFailure::Other(msg)) => {
            return Ok(Json(ListingsResponse::failure("other", msg.clone())));
        }
        LoadState::Idle => {
            return Ok(Json(ListingsResponse::failure(
                "other",
                "Anunțurile nu au fost încărcate".to_string(),
            )));
        }
    };

    let mut filtered = filter::filter_listings(&all, query.q.trim(), query.criteria());
    if let Some(order) = query.sort_order() {
        filter::sort_listings(&mut filtered, order);
    }

    let page = PageState::new(query.page(), filtered.len());
    let window: Vec<Listing> = page.slice(&filtered).iter().map(|l| (*l).clone()).collect();

    Ok(Json(ListingsResponse {
        success: true,
        total: all.len(),
        filtered: filtered.len(),
        page: page.current,
        total_pages: page.total_pages(),
        listings: window,
        error: None,
        error_kind: None,
    }))
}
