use log::debug;

use crate::expense::{ExpenseRecord, ExpenseStore};

/// Case-insensitive substring match of `filter` against `name`.
///
/// Both sides are lowercased; no trimming and no locale-aware collation.
/// An empty filter matches every name.
pub fn matches(name: &str, filter: &str) -> bool {
    name.to_lowercase().contains(&filter.to_lowercase())
}

/// Current filter text and the view derived from it.
///
/// Nothing is cached: the visible records and the total are recomputed from
/// the store on every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterView {
    filter: String,
}

impl FilterView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.filter = text.into();
        debug!("Filter set to {:?}", self.filter);
    }

    /// Records whose name contains the filter, in store order
    pub fn visible_records<'a>(
        &'a self,
        store: &'a ExpenseStore,
    ) -> impl Iterator<Item = &'a ExpenseRecord> + 'a {
        store
            .records()
            .iter()
            .filter(move |record| matches(&record.name, &self.filter))
    }

    /// Sum of the visible amounts; positive 0 when nothing is visible
    pub fn total(&self, store: &ExpenseStore) -> f64 {
        self.visible_records(store)
            .fold(0.0, |acc, record| acc + record.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn household() -> ExpenseStore {
        ExpenseStore::from_records(vec![
            ExpenseRecord::new("1", "Rent", 1000.0),
            ExpenseRecord::new("2", "Internet", 50.0),
            ExpenseRecord::new("3", "Electricity", 80.0),
            ExpenseRecord::new("4", "Netflix", 15.0),
        ])
    }

    fn visible_ids(view: &FilterView, store: &ExpenseStore) -> Vec<String> {
        view.visible_records(store).map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        assert!(matches("Internet", "NET"));
        assert!(matches("Internet", "inter"));
        assert!(matches("anything", ""));
        assert!(!matches("Rent", "water"));
    }

    #[test]
    fn test_matches_does_not_trim() {
        assert!(!matches("Rent", " rent"));
        assert!(matches("Phone plan", "e p"));
    }

    #[test]
    fn test_empty_filter_shows_everything_in_order() {
        let store = household();
        let view = FilterView::new();

        assert_eq!(visible_ids(&view, &store), vec!["1", "2", "3", "4"]);
        assert_eq!(view.total(&store), 1145.0);
    }

    #[test]
    fn test_filter_preserves_store_order() {
        let store = household();
        let mut view = FilterView::new();
        view.set_filter("NET");

        assert_eq!(visible_ids(&view, &store), vec!["2", "4"]);
        assert_eq!(view.total(&store), 65.0);
    }

    #[test]
    fn test_visible_records_is_restartable() {
        let store = household();
        let mut view = FilterView::new();
        view.set_filter("e");

        let first = visible_ids(&view, &store);
        let second = visible_ids(&view, &store);
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_of_empty_view_is_zero() {
        let store = household();
        let mut view = FilterView::new();
        view.set_filter("mortgage");

        assert_eq!(view.visible_records(&store).count(), 0);
        assert_eq!(view.total(&store), 0.0);
        assert_eq!(FilterView::new().total(&ExpenseStore::new()), 0.0);
    }

    #[test]
    fn test_total_of_empty_view_is_positive_zero() {
        let empty = FilterView::new().total(&ExpenseStore::new());
        assert!(!empty.is_sign_negative());

        let store = household();
        let mut view = FilterView::new();
        view.set_filter("mortgage");
        assert!(!view.total(&store).is_sign_negative());
    }

    #[test]
    fn test_view_follows_store_changes() {
        let mut store = household();
        let mut view = FilterView::new();
        view.set_filter("net");
        assert_eq!(view.total(&store), 65.0);

        store.remove_by_id("4");
        assert_eq!(visible_ids(&view, &store), vec!["2"]);
        assert_eq!(view.total(&store), 50.0);
    }
}
