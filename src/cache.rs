//! In-memory caching using moka
//!
//! Memoizes computed listing pages. The catalog is immutable for the life of
//! the process, so a cached page is always equal to a freshly computed one.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::search::{visible_results, FilterSpec, ListingsPageResponse, SortKey};

/// Application cache holding computed result pages
#[derive(Clone)]
pub struct AppCache {
    /// Listing pages (query key -> page)
    pub listing_pages: Cache<String, Arc<ListingsPageResponse>>,
}

impl AppCache {
    /// Create a cache whose entries live for `ttl`
    pub fn new(ttl: Duration) -> Self {
        Self {
            // Filter combinations are few; 500 pages covers them comfortably
            listing_pages: Cache::builder()
                .max_capacity(500)
                .time_to_live(ttl)
                .time_to_idle(ttl / 2)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            listing_pages_size: self.listing_pages.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.listing_pages.invalidate_all();
        info!("All caches invalidated");
    }

    /// Generate cache key for a listings page
    pub fn listing_page_key(
        filters: &FilterSpec,
        sort: SortKey,
        page: usize,
        page_size: usize,
    ) -> String {
        format!("listings:{}:{}:{}:{}", filters.cache_key(), sort, page, page_size)
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(10 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub listing_pages_size: u64,
}

/// Start background cache warmer
///
/// Warms the cache on startup and refreshes every `every`.
pub async fn start_cache_warmer(
    cache: AppCache,
    catalog: Arc<Catalog>,
    page_size: usize,
    every: Duration,
) {
    let mut interval = interval(every);
    loop {
        // First tick completes immediately
        interval.tick().await;
        warm_cache(&cache, &catalog, page_size).await;
    }
}

/// Warm the cache with the landing page of results
pub async fn warm_cache(cache: &AppCache, catalog: &Catalog, page_size: usize) {
    info!("Starting cache warm-up...");

    for sort in [SortKey::Default, SortKey::PriceAsc, SortKey::RatingDesc] {
        let filters = FilterSpec::default();
        let results = visible_results(catalog.listings(), &filters, sort, 1, page_size);
        let page = ListingsPageResponse::new(&results, sort, 1, page_size, 0);

        let key = AppCache::listing_page_key(&filters, sort, 1, page_size);
        debug!(key = %key, "Warming listings page");
        cache.listing_pages.insert(key, Arc::new(page)).await;
    }

    cache.listing_pages.run_pending_tasks().await;
    info!("Cache warm-up complete. Stats: {:?}", cache.stats());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_page_key() {
        let key = AppCache::listing_page_key(&FilterSpec::default(), SortKey::PriceDesc, 2, 4);
        assert_eq!(key, "listings::price_desc:2:4");
    }

    #[tokio::test]
    async fn test_warm_cache_fills_first_pages() {
        let cache = AppCache::default();
        let catalog = Catalog::seed().unwrap();
        warm_cache(&cache, &catalog, 4).await;

        assert_eq!(cache.stats().listing_pages_size, 3);
        let key = AppCache::listing_page_key(&FilterSpec::default(), SortKey::Default, 1, 4);
        let page = cache.listing_pages.get(&key).await.unwrap();
        assert_eq!(page.listings.len(), 4);
        assert!(page.has_more);

        cache.invalidate_all();
        assert!(cache.listing_pages.get(&key).await.is_none());
    }
}
