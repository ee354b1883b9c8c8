//! Client-side page projection over the locally held list.

/// Rows shown per page unless the user picks another size.
pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Zero-based pagination state for the category table.
///
/// The backend returns the whole collection in one response, so pages are
/// carved out of the local list and page changes never trigger I/O. A page
/// index past the end of the list projects an empty window rather than
/// failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

impl Pagination {
    /// Start on the first page with the given page size. Sizes below one
    /// row are clamped to one.
    pub fn new(per_page: usize) -> Self {
        Self {
            page: 0,
            per_page: per_page.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Change the page size and jump back to the first page, so the new
    /// window always starts inside the list.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        self.page = 0;
    }

    /// Number of pages needed for `total` entries.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.per_page)
    }

    /// The currently visible window of `items`, clipped to the list bounds.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.page.saturating_mul(self.per_page).min(items.len());
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }

    /// Footer label with one-based bounds, `"0-0 de 0"` for an empty list.
    /// A page past the end collapses the range onto the last entry.
    pub fn label(&self, total: usize) -> String {
        if total == 0 {
            return "0-0 de 0".to_string();
        }
        let to = self.page.saturating_add(1).saturating_mul(self.per_page).min(total);
        let from = self.page.saturating_mul(self.per_page).saturating_add(1).min(to);
        format!("{from}-{to} de {total}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_size_is_five() {
        let pagination = Pagination::default();
        assert_eq!(pagination.page(), 0);
        assert_eq!(pagination.per_page(), 5);
    }

    #[test]
    fn slice_clips_the_last_page() {
        let items: Vec<i32> = (1..=13).collect();
        let mut pagination = Pagination::new(5);

        pagination.set_page(2);
        assert_eq!(pagination.slice(&items), &[11, 12, 13]);

        pagination.set_page(5);
        assert!(pagination.slice(&items).is_empty());
    }

    #[test]
    fn pages_partition_the_list() {
        let items: Vec<i32> = (1..=13).collect();
        for per_page in 1..=7 {
            let mut pagination = Pagination::new(per_page);
            let mut seen = Vec::new();
            for page in 0..pagination.page_count(items.len()) {
                pagination.set_page(page);
                let window = pagination.slice(&items);
                assert!(!window.is_empty());
                assert!(window.len() <= per_page);
                seen.extend_from_slice(window);
            }
            assert_eq!(seen, items);
        }
    }

    #[test]
    fn changing_page_size_resets_to_first_page() {
        let mut pagination = Pagination::new(5);
        pagination.set_page(2);
        pagination.set_per_page(10);
        assert_eq!(pagination.page(), 0);
        assert_eq!(pagination.per_page(), 10);
    }

    #[test]
    fn page_size_is_clamped_to_one() {
        let mut pagination = Pagination::new(0);
        assert_eq!(pagination.per_page(), 1);
        pagination.set_per_page(0);
        assert_eq!(pagination.per_page(), 1);
    }

    #[test]
    fn label_uses_one_based_bounds() {
        let mut pagination = Pagination::new(5);
        assert_eq!(pagination.label(13), "1-5 de 13");
        pagination.set_page(2);
        assert_eq!(pagination.label(13), "11-13 de 13");
        assert_eq!(pagination.label(0), "0-0 de 0");
    }

    #[test]
    fn label_clamps_pages_past_the_end() {
        let mut pagination = Pagination::new(5);
        pagination.set_page(5);
        assert_eq!(pagination.label(13), "13-13 de 13");
        pagination.set_page(usize::MAX);
        assert_eq!(pagination.label(13), "13-13 de 13");
    }
}
