//! Client-side filtering and pagination of lists the backend already returned.

/// Records that can be matched against a free-text search box.
pub trait Searchable {
    /// Text fields the search box looks at.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match. `needle` must already be lower-cased.
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

pub const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    search: Option<String>,
    page: u32,
    page_size: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListQuery {
    /// A query for the first page. A zero page size is treated as 1.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            search: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Set the search text. Blank text clears the filter and resets to page 1.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into().trim().to_lowercase();
        self.search = (!search.is_empty()).then_some(search);
        self.page = 1;
        self
    }

    /// Set the 1-based page. Out-of-range pages are clamped when paginating.
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page actually returned after clamping.
    pub page: u32,
    pub page_size: u32,
    pub total_items: usize,
    /// Always at least 1, even when nothing matched.
    pub total_pages: u32,
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Filter by the query's search text, then slice out the requested page.
#[must_use]
pub fn paginate<T: Searchable + Clone>(items: &[T], query: &ListQuery) -> Page<T> {
    paginate_by(items, query, |_| true)
}

/// Like [`paginate`], with an extra predicate applied before searching.
#[must_use]
pub fn paginate_by<T, F>(items: &[T], query: &ListQuery, keep: F) -> Page<T>
where
    T: Searchable + Clone,
    F: Fn(&T) -> bool,
{
    let needle = query.search().unwrap_or_default();
    let matched: Vec<&T> = items
        .iter()
        .filter(|item| keep(item) && item.matches(needle))
        .collect();

    let page_size = query.page_size() as usize;
    let total_items = matched.len();
    let total_pages = u32::try_from(total_items.div_ceil(page_size))
        .unwrap_or(u32::MAX)
        .max(1);
    let page = query.page().min(total_pages);
    let start = (page as usize - 1) * page_size;

    let items = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        items,
        page,
        page_size: query.page_size(),
        total_items,
        total_pages,
    }
}
