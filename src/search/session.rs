//! Results page state across user interactions.

use crate::catalog::Listing;

use super::filters::FilterSpec;
use super::pipeline::{page_count, visible_results, VisibleResults};
use super::sort::SortKey;

/// Filters, sort and how many pages have been revealed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    filters: FilterSpec,
    sort: SortKey,
    visible_pages: usize,
    page_size: usize,
}

impl SearchSession {
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: FilterSpec::default(),
            sort: SortKey::Default,
            visible_pages: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn filters(&self) -> &FilterSpec {
        &self.filters
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn visible_pages(&self) -> usize {
        self.visible_pages
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    /// Apply new filters and go back to the first page
    pub fn set_filters(&mut self, filters: FilterSpec) {
        self.filters = filters;
        self.visible_pages = 1;
    }

    pub fn reset_filters(&mut self) {
        self.set_filters(FilterSpec::default());
    }

    /// Change the sort key. Re-selecting the current key keeps the page count.
    pub fn set_sort(&mut self, sort: SortKey) {
        if self.sort != sort {
            self.sort = sort;
            self.visible_pages = 1;
        }
    }

    /// Reveal one more page if `total_matches` leaves anything hidden.
    ///
    /// Returns whether the page count grew.
    pub fn load_more(&mut self, total_matches: usize) -> bool {
        if self.visible_pages < page_count(total_matches, self.page_size) {
            self.visible_pages += 1;
            true
        } else {
            false
        }
    }

    pub fn results<'a>(&self, listings: &'a [Listing]) -> VisibleResults<'a> {
        visible_results(
            listings,
            &self.filters,
            self.sort,
            self.visible_pages,
            self.page_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, PropertyType};

    #[test]
    fn test_load_more_stops_at_last_page() {
        let catalog = Catalog::seed().unwrap();
        let mut session = SearchSession::new(4);

        let total = session.results(catalog.listings()).total_matches();
        assert!(session.load_more(total));
        assert_eq!(session.visible_pages(), 2);
        assert!(!session.load_more(total));
        assert_eq!(session.visible_pages(), 2);

        let results = session.results(catalog.listings());
        assert_eq!(results.len(), 8);
        assert!(!results.has_more());
    }

    #[test]
    fn test_filters_reset_page() {
        let catalog = Catalog::seed().unwrap();
        let mut session = SearchSession::new(2);
        session.load_more(catalog.len());
        session.load_more(catalog.len());
        assert_eq!(session.visible_pages(), 3);

        session.set_filters(FilterSpec {
            property_type: Some(PropertyType::Casa),
            ..FilterSpec::default()
        });
        assert_eq!(session.visible_pages(), 1);
        assert_eq!(session.active_filter_count(), 1);
        assert_eq!(session.results(catalog.listings()).len(), 2);

        session.load_more(3);
        session.reset_filters();
        assert_eq!(session.visible_pages(), 1);
        assert_eq!(session.active_filter_count(), 0);
    }

    #[test]
    fn test_sort_resets_page_only_on_change() {
        let mut session = SearchSession::new(4);
        session.load_more(8);

        session.set_sort(SortKey::Default);
        assert_eq!(session.visible_pages(), 2);

        session.set_sort(SortKey::RatingDesc);
        assert_eq!(session.visible_pages(), 1);
        assert_eq!(session.sort(), SortKey::RatingDesc);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        assert_eq!(SearchSession::new(0).page_size(), 1);
    }
}
