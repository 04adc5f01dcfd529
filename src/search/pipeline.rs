//! Filter, sort and reveal a prefix of the catalog.

use std::iter::Copied;
use std::slice;

use crate::catalog::Listing;

use super::filters::{filter_listings, FilterSpec};
use super::sort::SortKey;
use super::summary::ResultsSummary;

/// Visible prefix of the sorted matches.
///
/// Iteration borrows the sorted matches, so `iter()` can be called any
/// number of times and always yields the same listings.
#[derive(Debug, Clone)]
pub struct VisibleResults<'a> {
    sorted: Vec<&'a Listing>,
    visible: usize,
}

impl<'a> VisibleResults<'a> {
    pub fn iter(&self) -> Copied<slice::Iter<'_, &'a Listing>> {
        self.sorted[..self.visible].iter().copied()
    }

    pub fn as_slice(&self) -> &[&'a Listing] {
        &self.sorted[..self.visible]
    }

    /// Listings on screen
    pub fn len(&self) -> usize {
        self.visible
    }

    pub fn is_empty(&self) -> bool {
        self.visible == 0
    }

    /// Listings matching the filters, visible or not
    pub fn total_matches(&self) -> usize {
        self.sorted.len()
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.sorted.len()
    }

    pub fn summary(&self) -> ResultsSummary {
        ResultsSummary::new(self.visible, self.sorted.len())
    }
}

impl<'r, 'a> IntoIterator for &'r VisibleResults<'a> {
    type Item = &'a Listing;
    type IntoIter = Copied<slice::Iter<'r, &'a Listing>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Number of pages needed to show `total` results
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Run the results pipeline.
///
/// `page` below 1 is treated as 1 and `page_size` 0 as 1. The first
/// `page * page_size` sorted matches are visible.
pub fn visible_results<'a>(
    listings: &'a [Listing],
    filters: &FilterSpec,
    sort: SortKey,
    page: usize,
    page_size: usize,
) -> VisibleResults<'a> {
    let page = page.max(1);
    let page_size = page_size.max(1);

    let mut sorted = filter_listings(listings, filters);
    sort.apply(&mut sorted);

    let visible = page.saturating_mul(page_size).min(sorted.len());
    VisibleResults { sorted, visible }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, PropertyType};
    use proptest::prelude::*;

    fn ids<'a>(results: &VisibleResults<'a>) -> Vec<&'a str> {
        results.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_first_page_is_capped() {
        let catalog = Catalog::seed().unwrap();
        let results = visible_results(catalog.listings(), &FilterSpec::default(), SortKey::Default, 1, 4);

        assert_eq!(results.len(), 4);
        assert_eq!(results.total_matches(), 8);
        assert!(results.has_more());
        assert_eq!(results.summary(), ResultsSummary::Partial { shown: 4, total: 8 });
    }

    #[test]
    fn test_last_page_shows_everything() {
        let catalog = Catalog::seed().unwrap();
        let results = visible_results(catalog.listings(), &FilterSpec::default(), SortKey::Default, 2, 4);

        assert_eq!(results.len(), 8);
        assert!(!results.has_more());

        let beyond = visible_results(catalog.listings(), &FilterSpec::default(), SortKey::Default, 9, 4);
        assert_eq!(beyond.len(), 8);
    }

    #[test]
    fn test_degenerate_paging_is_clamped() {
        let catalog = Catalog::seed().unwrap();
        let results = visible_results(catalog.listings(), &FilterSpec::default(), SortKey::Default, 0, 0);
        assert_eq!(results.len(), 1);
        assert!(results.has_more());
    }

    #[test]
    fn test_iter_is_restartable() {
        let catalog = Catalog::seed().unwrap();
        let results = visible_results(catalog.listings(), &FilterSpec::default(), SortKey::PriceAsc, 1, 3);

        let first = ids(&results);
        let second: Vec<&str> = (&results).into_iter().map(|l| l.id.as_str()).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_filtered_and_sorted() {
        let catalog = Catalog::seed().unwrap();
        let filters = FilterSpec {
            property_type: Some(PropertyType::Casa),
            ..FilterSpec::default()
        };
        let results = visible_results(catalog.listings(), &filters, SortKey::PriceDesc, 1, 4);

        assert_eq!(results.summary(), ResultsSummary::All { total: 3 });
        let prices: Vec<_> = results.iter().map(|l| l.price_per_night).collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_empty_results_are_valid() {
        let catalog = Catalog::seed().unwrap();
        let filters = FilterSpec {
            property_type: Some(PropertyType::Cabana),
            pet_friendly: Some(true),
            ..FilterSpec::default()
        };
        let results = visible_results(catalog.listings(), &filters, SortKey::Default, 1, 4);

        assert!(results.is_empty());
        assert!(!results.has_more());
        assert_eq!(results.summary(), ResultsSummary::Empty);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(8, 4), 2);
        assert_eq!(page_count(9, 4), 3);
        assert_eq!(page_count(0, 4), 1);
        assert_eq!(page_count(5, 0), 5);
    }

    proptest! {
        #[test]
        fn prop_next_page_extends_previous(
            page in 1usize..5,
            page_size in 1usize..6,
            sort_index in 0usize..4,
        ) {
            let catalog = Catalog::seed().unwrap();
            let sort = [SortKey::Default, SortKey::PriceAsc, SortKey::PriceDesc, SortKey::RatingDesc][sort_index];
            let filters = FilterSpec::default();

            let current = visible_results(catalog.listings(), &filters, sort, page, page_size);
            let next = visible_results(catalog.listings(), &filters, sort, page + 1, page_size);

            let current_ids = ids(&current);
            let next_ids = ids(&next);
            prop_assert!(current_ids.len() <= page * page_size);
            prop_assert!(next_ids.len() >= current_ids.len());
            prop_assert_eq!(&next_ids[..current_ids.len()], current_ids.as_slice());
        }
    }
}
