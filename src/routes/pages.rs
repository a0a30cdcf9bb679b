// Handler for the server-rendered browse page.

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect},
};

use crate::{
    browse::BrowseQuery,
    cache::{LoadFailure, LoadState},
    catalog,
    error::{AppError, AppResult},
    filter::{self, FilterCriteria, SortOrder, SORT_ORDERS},
    models::Listing,
    pagination::PageState,
    AppState,
};

// Static localized message for non-network failures.
const GENERIC_LOAD_ERROR: &str = "Nu s-au putut încărca anunțurile";

pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

#[derive(Template)]
#[template(path = "listings.html")]
struct ListingsTemplate {
    query: BrowseQuery,
    filter_keys: &'static [&'static str],
    listings: Vec<Listing>,
    total_count: usize,
    filtered_count: usize,
    start_display: usize,
    end_display: usize,
    total_pages: usize,
    page_links: Vec<PageLink>,
    prev_href: Option<String>,
    next_href: Option<String>,
    clear_href: String,
    loading: bool,
    network_error: Option<String>,
    error: Option<String>,
    categories: &'static [(&'static str, &'static str)],
    brands: &'static [&'static str],
    fuels: &'static [&'static str],
    transmissions: &'static [&'static str],
    conditions: &'static [&'static str],
    cities: &'static [&'static str],
    sort_orders: &'static [SortOrder],
}

pub async fn root() -> Redirect {
    Redirect::to("/listings")
}

pub async fn listings_page(
    State(app_state): State<AppState>,
    Query(query): Query<BrowseQuery>,
) -> AppResult<impl IntoResponse> {
    tracing::info!(
        page = query.page(),
        q = %query.q,
        reload = query.wants_reload(),
        "[HANDLER] /listings - request received"
    );

    let state = super::ensure_listings(&app_state, query.wants_reload()).await;

    let empty = Arc::new(Vec::new());
    let (all, loading, network_error, error) = match &state {
        LoadState::Loaded(listings) => (Arc::clone(listings), false, None, None),
        LoadState::Loading => (empty, true, None, None),
        LoadState::Failed(LoadFailure::Connectivity(msg)) => {
            (empty, false, Some(msg.clone()), None)
        }
        LoadState::Failed(LoadFailure::Other(_)) => {
            (empty, false, None, Some(GENERIC_LOAD_ERROR.to_string()))
        }
        // ensure_listings never leaves the cache idle.
        LoadState::Idle => (empty, false, None, Some(GENERIC_LOAD_ERROR.to_string())),
    };

    let mut filtered = filter::filter_listings(&all, query.q.trim(), query.criteria());
    if let Some(order) = query.sort_order() {
        filter::sort_listings(&mut filtered, order);
    }

    let page = PageState::new(query.page(), filtered.len());
    let (start_display, end_display) = page.display_range();
    let window: Vec<Listing> = page.slice(&filtered).iter().map(|l| (*l).clone()).collect();

    let total_pages = page.total_pages();
    let page_links: Vec<PageLink> = (1..=total_pages)
        .map(|number| PageLink {
            number,
            href: query.page_href(number),
            current: number == page.current,
        })
        .collect();
    let prev_href = if page.has_prev() {
        Some(query.page_href(page.current - 1))
    } else {
        None
    };
    let next_href = if page.has_next() {
        Some(query.page_href(page.current + 1))
    } else {
        None
    };

    let template = ListingsTemplate {
        query,
        filter_keys: FilterCriteria::KEYS,
        listings: window,
        total_count: all.len(),
        filtered_count: filtered.len(),
        start_display,
        end_display,
        total_pages,
        page_links,
        prev_href,
        next_href,
        // Clearing drops every filter, the search text, the page number and
        // the category navigation parameter in one go.
        clear_href: BrowseQuery::cleared().href(),
        loading,
        network_error,
        error,
        categories: catalog::CATEGORIES,
        brands: catalog::BRANDS,
        fuels: catalog::FUEL_TYPES,
        transmissions: catalog::TRANSMISSIONS,
        conditions: catalog::CONDITIONS,
        cities: catalog::CITIES,
        sort_orders: SORT_ORDERS,
    };

    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(e) => {
            tracing::error!("Failed to render listings template: {}", e);
            Err(AppError::InternalServerError(anyhow::Error::new(e)))
        }
    }
}
