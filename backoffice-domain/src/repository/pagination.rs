use backoffice_api::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// Pagination request parameters for page-number pagination
///
/// Pages are 1-based. A request never fails for an out-of-range page: the
/// page is clamped against the collection when the slice is produced. The
/// only checked failure is `items_per_page == 0`.
///
/// # Example
/// ```
/// use backoffice_domain::repository::pagination::PageRequest;
///
/// let first = PageRequest::new(1, 20).unwrap();
/// let second = PageRequest::new(2, 20).unwrap();
/// assert_eq!(second.offset(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number
    pub page: usize,
    /// Maximum number of items per page, always >= 1
    pub items_per_page: usize,
}

impl PageRequest {
    /// Create a new page request
    ///
    /// # Arguments
    /// * `page` - 1-based page number; 0 is treated as 1
    /// * `items_per_page` - Page size, must be at least 1
    ///
    /// # Returns
    /// * `Ok(PageRequest)` - The request
    /// * `Err(ApiError::InvalidArgument)` - If `items_per_page` is 0
    pub fn new(page: usize, items_per_page: usize) -> ApiResult<Self> {
        if items_per_page == 0 {
            return Err(ApiError::InvalidArgument(
                "items_per_page must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            page: page.max(1),
            items_per_page,
        })
    }

    /// Request for the first page with the given page size
    pub fn first(items_per_page: usize) -> ApiResult<Self> {
        Self::new(1, items_per_page)
    }

    /// Number of items preceding this page
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.items_per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            items_per_page: 10,
        }
    }
}

/// One page of an ordered collection plus page-count bookkeeping
///
/// # Example
/// ```
/// use backoffice_domain::repository::pagination::{Page, PageRequest};
///
/// let items: Vec<u32> = (1..=23).collect();
/// let page = Page::from_slice(&items, PageRequest::new(2, 10).unwrap());
///
/// assert_eq!(page.items, (11..=20).collect::<Vec<u32>>());
/// assert_eq!(page.total_items, 23);
/// assert_eq!(page.total_pages, 3);
/// assert!(page.has_more());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page, a contiguous slice of the full collection
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total_items: usize,
    /// Total number of pages, at least 1 even for an empty collection
    pub total_pages: usize,
    /// 1-based number of this page after clamping
    pub page: usize,
    /// Page size the slice was produced with
    pub items_per_page: usize,
}

impl<T: Clone> Page<T> {
    /// Produce the requested page of `items`
    ///
    /// The requested page number is clamped to `[1, total_pages]`, so a
    /// request beyond the end of a shrunken collection yields the last
    /// valid page instead of an empty one.
    pub fn from_slice(items: &[T], request: PageRequest) -> Self {
        let total_items = items.len();
        let total_pages = Self::page_count(total_items, request.items_per_page);
        let page = request.page.clamp(1, total_pages);

        let start = (page - 1) * request.items_per_page;
        let end = (start + request.items_per_page).min(total_items);
        let slice = if start < total_items {
            items[start..end].to_vec()
        } else {
            Vec::new()
        };

        Self {
            items: slice,
            total_items,
            total_pages,
            page,
            items_per_page: request.items_per_page,
        }
    }

    fn page_count(total_items: usize, items_per_page: usize) -> usize {
        total_items.div_ceil(items_per_page).max(1)
    }
}

impl<T> Page<T> {
    /// Check if there are more pages after this one
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }

    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.page == 1
    }

    /// Check if this is the last page
    pub fn is_last_page(&self) -> bool {
        !self.has_more()
    }
}

/// Page-number and page-size state owned by one list view
///
/// The paginator re-derives its page against every collection it paginates:
/// if an external filter shrank the collection while the view sat on a deep
/// page, the page is clamped back to the last valid one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page: usize,
    items_per_page: usize,
}

impl Paginator {
    /// Create a paginator starting on page 1
    ///
    /// # Returns
    /// * `Ok(Paginator)` - The paginator
    /// * `Err(ApiError::InvalidArgument)` - If `items_per_page` is 0
    pub fn new(items_per_page: usize) -> ApiResult<Self> {
        let request = PageRequest::first(items_per_page)?;
        Ok(Self {
            page: request.page,
            items_per_page: request.items_per_page,
        })
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Move to a page, clamped against the given collection size
    ///
    /// Out-of-range pages are not an error; the request silently clamps to
    /// `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize, total_items: usize) {
        let total_pages = total_items.div_ceil(self.items_per_page).max(1);
        self.page = page.clamp(1, total_pages);
    }

    /// Change the page size and reset to page 1
    ///
    /// # Returns
    /// * `Ok(())` - Page size changed, current page reset to 1
    /// * `Err(ApiError::InvalidArgument)` - If `items_per_page` is 0; the
    ///   previous page size stays in force
    pub fn set_items_per_page(&mut self, items_per_page: usize) -> ApiResult<()> {
        if items_per_page == 0 {
            return Err(ApiError::InvalidArgument(
                "items_per_page must be at least 1".to_string(),
            ));
        }
        self.items_per_page = items_per_page;
        self.page = 1;
        Ok(())
    }

    /// Produce the current page of `items`, re-clamping the stored page
    pub fn paginate<T: Clone>(&mut self, items: &[T]) -> Page<T> {
        let request = PageRequest {
            page: self.page,
            items_per_page: self.items_per_page,
        };
        let page = Page::from_slice(items, request);
        self.page = page.page;
        page
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page: 1,
            items_per_page: 10,
        }
    }
}
