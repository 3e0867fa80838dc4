//! Catalog search.

use crate::domain::Item;

/// Items matching a search term, borrowed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults<'a> {
    pub matches: Vec<&'a Item>,
    /// Size of the unfiltered catalog.
    pub total: usize,
}

impl SearchResults<'_> {
    /// Number of matching items.
    #[must_use]
    pub fn shown(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Filter `items` by `term`, keeping catalog order.
///
/// A blank term matches everything. Otherwise an item matches when its name
/// contains the term case-insensitively or its price string contains the
/// term verbatim.
#[must_use]
pub fn filter_items<'a>(items: &'a [Item], term: &str) -> SearchResults<'a> {
    let matches = if term.trim().is_empty() {
        items.iter().collect()
    } else {
        let needle = term.to_lowercase();
        items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle) || item.price.contains(term))
            .collect()
    };
    SearchResults {
        matches,
        total: items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Item> {
        vec![
            Item::new(1, "Queen Bed", "300", "img/bed.jpg"),
            Item::new(2, "Floor Lamp", "80", "img/lamp.jpg"),
            Item::new(3, "Bedside Table", "130", "img/table.jpg"),
        ]
    }

    fn ids(results: &SearchResults<'_>) -> Vec<i64> {
        results.matches.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_blank_term_returns_everything() {
        let items = catalog();
        for term in ["", "   ", "\t"] {
            let results = filter_items(&items, term);
            assert_eq!(ids(&results), vec![1, 2, 3]);
            assert_eq!(results.shown(), results.total);
        }
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let items = catalog();
        let results = filter_items(&items, "BED");
        assert_eq!(ids(&results), vec![1, 3]);
        assert_eq!(results.total, 3);
    }

    #[test]
    fn test_price_match() {
        let items = catalog();
        assert_eq!(ids(&filter_items(&items, "30")), vec![1, 3]);
        assert_eq!(ids(&filter_items(&items, "80")), vec![2]);
    }

    #[test]
    fn test_no_match() {
        let items = catalog();
        let results = filter_items(&items, "sofa");
        assert!(results.is_empty());
        assert_eq!(results.total, 3);
    }
}
