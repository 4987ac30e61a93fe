use serde::{Deserialize, Serialize};
use validator::Validate;

/// List query parameters shared by every list view.
///
/// `page` is 1-based and deliberately not validated here: out-of-range pages
/// are clamped by the paginator, not rejected. `items_per_page` must be at
/// least 1, otherwise the page count would be unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ListQuery {
    /// Free-text search term applied before pagination
    #[validate(length(max = 100))]
    pub search: Option<String>,

    /// Status filter key; unknown keys resolve to the default presentation
    #[validate(length(max = 50))]
    pub status: Option<String>,

    /// 1-based page number
    pub page: u32,

    #[validate(range(min = 1))]
    pub items_per_page: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            page: 1,
            items_per_page: 10,
        }
    }
}

impl ListQuery {
    pub fn new(page: u32, items_per_page: u32) -> Self {
        Self {
            page,
            items_per_page,
            ..Self::default()
        }
    }

    /// Search term with surrounding whitespace removed, `None` when empty
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_is_valid() {
        let query = ListQuery::default();
        assert!(query.validate().is_ok());
        assert_eq!(query.page, 1);
        assert_eq!(query.items_per_page, 10);
    }

    #[test]
    fn zero_items_per_page_is_rejected() {
        let query = ListQuery::new(1, 0);
        assert!(query.validate().is_err());
    }

    #[test]
    fn search_term_trims_and_drops_empty() {
        let mut query = ListQuery::default();
        query.search = Some("  widget  ".to_string());
        assert_eq!(query.search_term(), Some("widget"));

        query.search = Some("   ".to_string());
        assert_eq!(query.search_term(), None);
    }

    #[test]
    fn query_round_trips_through_json() {
        let query = ListQuery {
            search: Some("bolt".to_string()),
            status: Some("Active".to_string()),
            page: 3,
            items_per_page: 25,
        };
        let json = serde_json::to_string(&query).unwrap();
        let back: ListQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(back, query);
    }
}
