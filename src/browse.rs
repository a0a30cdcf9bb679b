// The whole browse-page view state as carried in the URL query string:
// search text, filter criteria, sort selection, page number and the
// presentation flags. Transitions reproduce the page behavior: changing a
// filter or the search resets pagination, clearing drops everything.

use serde::Deserialize;

use crate::filter::{FilterCriteria, SortOrder};

pub const LISTINGS_PATH: &str = "/listings";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub q: String,
    #[serde(flatten)]
    pub filters: FilterCriteria,
    #[serde(rename = "sortare", default)]
    pub sort: String,
    #[serde(rename = "pagina", default)]
    pub page: String,
    #[serde(rename = "reincarca", default)]
    pub reload: String,
    // Sidebar visibility is a presentation flag, not filter state.
    #[serde(rename = "filtre", default)]
    pub panel: String,
}

impl BrowseQuery {
    pub fn criteria(&self) -> &FilterCriteria {
        &self.filters
    }

    // 1-indexed; anything unparseable falls back to page 1.
    pub fn page(&self) -> usize {
        self.page.trim().parse().unwrap_or(1).max(1)
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        SortOrder::from_param(&self.sort)
    }

    pub fn wants_reload(&self) -> bool {
        self.reload == "1"
    }

    pub fn panel_hidden(&self) -> bool {
        self.panel == "0"
    }

    pub fn is_unconstrained(&self) -> bool {
        self.q.is_empty() && self.filters.is_empty()
    }

    // --- transitions ---

    pub fn with_search(&self, q: &str) -> Self {
        let mut next = self.reset_page();
        next.q = q.to_string();
        next
    }

    pub fn with_filter(&self, key: &str, value: &str) -> Self {
        let mut next = self.reset_page();
        next.filters.set(key, value);
        next
    }

    pub fn with_sort(&self, order: Option<SortOrder>) -> Self {
        let mut next = self.reset_page();
        next.sort = order.map(|o| o.as_param().to_string()).unwrap_or_default();
        next
    }

    pub fn with_page(&self, page: usize) -> Self {
        let mut next = self.clone();
        next.page = if page > 1 {
            page.to_string()
        } else {
            String::new()
        };
        next.reload.clear();
        next
    }

    // Everything empty, including the category pre-population parameter.
    pub fn cleared() -> Self {
        BrowseQuery::default()
    }

    fn reset_page(&self) -> Self {
        let mut next = self.clone();
        next.page.clear();
        next.reload.clear();
        next
    }

    // --- template helpers ---

    pub fn selected(&self, key: &str, value: &str) -> bool {
        self.filters.get(key) == value
    }

    pub fn sort_selected(&self, order: &SortOrder) -> bool {
        self.sort == order.as_param()
    }

    pub fn page_href(&self, page: usize) -> String {
        self.with_page(page).href()
    }

    pub fn toggle_panel_href(&self) -> String {
        let mut next = self.clone();
        next.panel = if self.panel_hidden() {
            String::new()
        } else {
            "0".to_string()
        };
        next.reload.clear();
        next.href()
    }

    pub fn reload_href(&self) -> String {
        let mut next = self.clone();
        next.reload = "1".to_string();
        next.href()
    }

    pub fn href(&self) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            LISTINGS_PATH.to_string()
        } else {
            format!("{LISTINGS_PATH}?{qs}")
        }
    }

    // Stable parameter order, empty values omitted.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        if !self.q.is_empty() {
            pairs.push(("q", &self.q));
        }
        for key in FilterCriteria::KEYS {
            let value = self.filters.get(key);
            if !value.is_empty() {
                pairs.push((key, value));
            }
        }
        if !self.sort.is_empty() {
            pairs.push(("sortare", &self.sort));
        }
        if self.panel_hidden() {
            pairs.push(("filtre", &self.panel));
        }
        if !self.page.is_empty() && self.page() > 1 {
            pairs.push(("pagina", &self.page));
        }
        if self.wants_reload() {
            pairs.push(("reincarca", &self.reload));
        }

        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
