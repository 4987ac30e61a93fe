/// Trait for records that can be matched against a free-text search term
///
/// Implementations decide which fields take part in the search (typically
/// code/number plus display name) and must match case-insensitively.
pub trait Searchable {
    /// Checks whether the record matches the search term
    fn matches_search(&self, term: &str) -> bool;
}

/// Predicate injected into a list view alongside the search term
pub type FilterPredicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Case-insensitive containment test shared by `Searchable` implementations
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Filters records by search term and an optional predicate (both must hold)
///
/// A blank search term matches everything, mirroring the list views this
/// engine replaces: clearing the search box restores the full collection.
pub fn filter_records<'a, T: Searchable>(
    items: &'a [T],
    term: &str,
    predicate: Option<&FilterPredicate<T>>,
) -> Vec<&'a T> {
    let term = term.trim();
    items
        .iter()
        .filter(|item| term.is_empty() || item.matches_search(term))
        .filter(|item| predicate.map_or(true, |p| p(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Record {
        name: &'static str,
        active: bool,
    }

    impl Searchable for Record {
        fn matches_search(&self, term: &str) -> bool {
            contains_ignore_case(self.name, term)
        }
    }

    fn records() -> Vec<Record> {
        vec![
            Record { name: "Steel bolt", active: true },
            Record { name: "Brass nut", active: false },
            Record { name: "Steel washer", active: true },
        ]
    }

    #[test]
    fn blank_term_matches_everything() {
        let records = records();
        assert_eq!(filter_records(&records, "  ", None).len(), 3);
    }

    #[test]
    fn search_is_case_insensitive() {
        let records = records();
        let hits = filter_records(&records, "steel", None);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn predicate_and_search_are_both_applied() {
        let records = records();
        let predicate: FilterPredicate<Record> = Box::new(|r| r.active);
        let hits = filter_records(&records, "brass", Some(&predicate));
        assert!(hits.is_empty());
    }
}
