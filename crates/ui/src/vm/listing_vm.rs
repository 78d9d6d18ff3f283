use campus_core::model::Page;

/// Pager state shared by every paginated list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerVm {
    pub page: u32,
    pub total_pages: u32,
    pub total_items: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PagerVm {
    #[must_use]
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    #[must_use]
    pub fn results_label(&self) -> String {
        match self.total_items {
            0 => "No results".to_string(),
            1 => "1 result".to_string(),
            count => format!("{count} results"),
        }
    }
}

impl<T> From<&Page<T>> for PagerVm {
    fn from(page: &Page<T>) -> Self {
        Self {
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, total_pages: u32, total_items: usize) -> Page<()> {
        Page {
            items: Vec::new(),
            page,
            page_size: 10,
            total_items,
            total_pages,
        }
    }

    #[test]
    fn labels_reflect_the_page() {
        let pager = PagerVm::from(&page(2, 3, 25));
        assert_eq!(pager.label(), "Page 2 of 3");
        assert_eq!(pager.results_label(), "25 results");
        assert!(pager.has_previous);
        assert!(pager.has_next);
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let pager = PagerVm::from(&page(1, 1, 0));
        assert_eq!(pager.label(), "Page 1 of 1");
        assert_eq!(pager.results_label(), "No results");
        assert!(!pager.has_previous);
        assert!(!pager.has_next);
    }
}
