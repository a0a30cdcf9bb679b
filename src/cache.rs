// In-memory listing set with its load lifecycle:
// Idle -> Loading -> { Loaded, Failed }, retry re-enters Loading.
// Each load attempt gets a generation token; a completion carrying a stale
// token is discarded, so a superseded in-flight fetch can never overwrite
// the state a newer attempt produced.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Listing;
use crate::supabase_api::FetchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    // Network-level failure: surfaced with the dedicated retry affordance.
    Connectivity(String),
    // Anything else, including malformed responses.
    Other(String),
}

impl From<&FetchError> for LoadFailure {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::Connectivity(_) => LoadFailure::Connectivity(err.to_string()),
            FetchError::Backend(_) | FetchError::Malformed(_) => {
                LoadFailure::Other(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded(Arc<Vec<Listing>>),
    Failed(LoadFailure),
}

#[derive(Debug)]
struct Inner {
    state: LoadState,
    generation: u64,
}

#[derive(Debug)]
pub struct ListingsCache {
    inner: RwLock<Inner>,
}

impl ListingsCache {
    pub fn new() -> Self {
        ListingsCache {
            inner: RwLock::new(Inner {
                state: LoadState::Idle,
                generation: 0,
            }),
        }
    }

    pub async fn state(&self) -> LoadState {
        self.inner.read().await.state.clone()
    }

    // Starts a new load attempt and returns its token.
    pub async fn begin(&self) -> u64 {
        let mut inner = self.inner.write().await;
        inner.generation += 1;
        inner.state = LoadState::Loading;
        tracing::debug!(generation = inner.generation, "listings load started");
        inner.generation
    }

    // Commits the outcome of an attempt. Returns false when the attempt was
    // superseded by a newer one, in which case nothing is overwritten.
    pub async fn complete(
        &self,
        token: u64,
        result: Result<Vec<Listing>, FetchError>,
    ) -> bool {
        let mut inner = self.inner.write().await;
        if token != inner.generation {
            tracing::warn!(
                token,
                current = inner.generation,
                "discarding result of superseded listings load"
            );
            return false;
        }
        inner.state = match result {
            Ok(listings) => {
                tracing::info!(count = listings.len(), "listings loaded");
                LoadState::Loaded(Arc::new(listings))
            }
            Err(ref err) => {
                tracing::error!(error = %err, "listings load failed");
                LoadState::Failed(LoadFailure::from(err))
            }
        };
        true
    }

    // Runs one full load attempt and returns the resulting state. The fetch
    // itself runs outside the lock.
    pub async fn load_with<F, Fut>(&self, fetch: F) -> LoadState
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Listing>, FetchError>>,
    {
        let token = self.begin().await;
        let result = fetch().await;
        self.complete(token, result).await;
        self.state().await
    }
}

impl Default for ListingsCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Availability, Listing, SellerType, PLACEHOLDER_IMAGE};
    use chrono::{TimeZone, Utc};

    fn listing(id: &str) -> Listing {
        Listing {
            id: id.to_string(),
            title: "Honda CB500F".to_string(),
            price: 5000,
            year: 2019,
            mileage: 20000,
            location: "Brașov".to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            seller: "Ion".to_string(),
            seller_id: "usr-2".to_string(),
            seller_type: SellerType::Individual,
            category: "naked".to_string(),
            brand: "Honda".to_string(),
            model: "CB500F".to_string(),
            engine: 471,
            fuel: "Benzină".to_string(),
            transmission: "Manuală".to_string(),
            condition: "Bună".to_string(),
            featured: false,
            views_count: 0,
            favorites_count: 0,
            created_at: Utc.with_ymd_and_hms(2025, 4, 1, 12, 0, 0).unwrap(),
            status: "active".to_string(),
            availability: Availability::InStock,
        }
    }

    #[tokio::test]
    async fn starts_idle_and_loads() {
        let cache = ListingsCache::new();
        assert!(matches!(cache.state().await, LoadState::Idle));

        let state = cache.load_with(|| async { Ok(vec![listing("a")]) }).await;
        match state {
            LoadState::Loaded(listings) => assert_eq!(listings.len(), 1),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_load_records_the_failure_kind() {
        let cache = ListingsCache::new();
        let state = cache
            .load_with(|| async {
                Err(FetchError::Backend("500 Internal Server Error".to_string()))
            })
            .await;
        match state {
            LoadState::Failed(LoadFailure::Other(msg)) => {
                assert!(msg.contains("500"));
            }
            other => panic!("expected Failed(Other), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn retry_after_failure_replaces_the_state() {
        let cache = ListingsCache::new();
        cache
            .load_with(|| async { Err(FetchError::Backend("boom".to_string())) })
            .await;
        let state = cache
            .load_with(|| async { Ok(vec![listing("a"), listing("b")]) })
            .await;
        match state {
            LoadState::Loaded(listings) => assert_eq!(listings.len(), 2),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn superseded_attempt_cannot_overwrite_newer_result() {
        let cache = ListingsCache::new();

        let stale = cache.begin().await;
        let fresh = cache.begin().await;
        assert!(fresh > stale);

        // The newer attempt resolves first.
        assert!(cache.complete(fresh, Ok(vec![listing("new")])).await);

        // The older attempt resolves late and must be discarded.
        assert!(
            !cache
                .complete(stale, Ok(vec![listing("old"), listing("older")]))
                .await
        );

        match cache.state().await {
            LoadState::Loaded(listings) => {
                assert_eq!(listings.len(), 1);
                assert_eq!(listings[0].id, "new");
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn reload_replaces_the_whole_set() {
        let cache = ListingsCache::new();
        cache
            .load_with(|| async { Ok(vec![listing("a"), listing("b")]) })
            .await;
        let state = cache.load_with(|| async { Ok(vec![listing("c")]) }).await;
        match state {
            LoadState::Loaded(listings) => {
                assert_eq!(listings.len(), 1);
                assert_eq!(listings[0].id, "c");
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }
}
