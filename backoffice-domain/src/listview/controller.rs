use backoffice_api::ApiResult;

use crate::listview::filter::{filter_records, FilterPredicate, Searchable};
use crate::repository::pagination::{Page, Paginator};

/// Generic list-view controller: one instance per rendered list
///
/// Replaces the per-screen search/filter/pagination wiring of the original
/// views with a single container parameterized over the record type. The
/// controller owns the full collection, a search term, an injected filter
/// predicate, and the paginator; every derived value is recomputed from
/// those inputs on access.
///
/// Aggregates must be computed from `filtered()`, never from the paginated
/// slice, so summary cards show global figures rather than per-page ones.
///
/// # Example
/// ```ignore
/// let mut view = ListView::new(items, 10)?;
/// view.set_search("steel");
/// let page = view.page();
/// let stock_value = sum_by(&view.filtered(), |i| i.stock_value());
/// ```
pub struct ListView<T> {
    items: Vec<T>,
    search: String,
    predicate: Option<FilterPredicate<T>>,
    paginator: Paginator,
}

impl<T: Searchable + Clone> ListView<T> {
    /// Create a list view over a collection, starting on page 1
    ///
    /// # Returns
    /// * `Ok(ListView)` - The view
    /// * `Err(ApiError::InvalidArgument)` - If `items_per_page` is 0
    pub fn new(items: Vec<T>, items_per_page: usize) -> ApiResult<Self> {
        Ok(Self {
            items,
            search: String::new(),
            predicate: None,
            paginator: Paginator::new(items_per_page)?,
        })
    }

    /// Replace the underlying collection, re-clamping the current page
    ///
    /// Keeps search, filter, and page size; the page is clamped against the
    /// new filtered size so a shrunken collection cannot strand the view on
    /// a page past the end.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let total = self.filtered_count();
        self.paginator.set_page(self.paginator.current_page(), total);
    }

    /// Set the search term and reset to page 1
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        let total = self.filtered_count();
        self.paginator.set_page(1, total);
    }

    /// Inject or clear the filter predicate and reset to page 1
    pub fn set_filter(&mut self, predicate: Option<FilterPredicate<T>>) {
        self.predicate = predicate;
        let total = self.filtered_count();
        self.paginator.set_page(1, total);
    }

    /// Move to a page, silently clamped to the valid range
    pub fn set_page(&mut self, page: usize) {
        let total = self.filtered_count();
        self.paginator.set_page(page, total);
    }

    /// Change the page size and reset to page 1
    ///
    /// # Returns
    /// * `Ok(())` - Page size changed
    /// * `Err(ApiError::InvalidArgument)` - If `items_per_page` is 0; the
    ///   previous page size stays in force
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> ApiResult<()> {
        self.paginator.set_items_per_page(items_per_page)
    }

    /// The current page of the filtered collection
    pub fn page(&mut self) -> Page<T> {
        let filtered: Vec<T> = self.filtered();
        self.paginator.paginate(&filtered)
    }

    /// The full filtered collection, the input for aggregates
    pub fn filtered(&self) -> Vec<T> {
        filter_records(&self.items, &self.search, self.predicate.as_ref())
            .into_iter()
            .cloned()
            .collect()
    }

    /// Number of records after filtering, before pagination
    pub fn filtered_count(&self) -> usize {
        filter_records(&self.items, &self.search, self.predicate.as_ref()).len()
    }

    /// Number of records before filtering
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    pub fn items_per_page(&self) -> usize {
        self.paginator.items_per_page()
    }

    pub fn search(&self) -> &str {
        &self.search
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listview::filter::contains_ignore_case;

    #[derive(Debug, Clone, PartialEq)]
    struct Ticket {
        number: u32,
        subject: String,
        open: bool,
    }

    impl Searchable for Ticket {
        fn matches_search(&self, term: &str) -> bool {
            contains_ignore_case(&self.subject, term)
        }
    }

    fn tickets(n: u32) -> Vec<Ticket> {
        (1..=n)
            .map(|number| Ticket {
                number,
                subject: format!("Ticket {number}"),
                open: number % 2 == 0,
            })
            .collect()
    }

    #[test]
    fn pages_cover_the_filtered_collection_in_order() {
        let mut view = ListView::new(tickets(23), 10).unwrap();

        let mut seen = Vec::new();
        loop {
            let page = view.page();
            seen.extend(page.items.iter().map(|t| t.number));
            if page.is_last_page() {
                break;
            }
            view.set_page(page.page + 1);
        }

        assert_eq!(seen, (1..=23).collect::<Vec<u32>>());
    }

    #[test]
    fn search_resets_to_page_one() {
        let mut view = ListView::new(tickets(50), 10).unwrap();
        view.set_page(4);
        assert_eq!(view.current_page(), 4);

        view.set_search("ticket 1");
        assert_eq!(view.current_page(), 1);
        // "Ticket 1", "Ticket 10".."Ticket 19", "Ticket 100" absent at n=50
        assert_eq!(view.filtered_count(), 11);
    }

    #[test]
    fn predicate_change_resets_to_page_one() {
        let mut view = ListView::new(tickets(40), 10).unwrap();
        view.set_page(3);

        view.set_filter(Some(Box::new(|t: &Ticket| t.open)));
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.filtered_count(), 20);

        view.set_filter(None);
        assert_eq!(view.filtered_count(), 40);
    }

    #[test]
    fn shrinking_items_reclamps_the_page() {
        let mut view = ListView::new(tickets(25), 10).unwrap();
        view.set_page(3);
        assert_eq!(view.current_page(), 3);

        view.set_items(tickets(5));
        let page = view.page();
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn page_size_change_resets_and_zero_is_rejected() {
        let mut view = ListView::new(tickets(30), 10).unwrap();
        view.set_page(2);

        view.set_items_per_page(15).unwrap();
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.items_per_page(), 15);

        assert!(view.set_items_per_page(0).is_err());
        assert_eq!(view.items_per_page(), 15);
    }

    #[test]
    fn filtered_is_global_not_per_page() {
        let mut view = ListView::new(tickets(23), 10).unwrap();
        view.set_page(2);

        let page = view.page();
        assert_eq!(page.items.len(), 10);
        // Summary input stays the full filtered set regardless of the page
        assert_eq!(view.filtered().len(), 23);
    }
}
