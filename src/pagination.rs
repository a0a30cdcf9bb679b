// Window arithmetic over the filtered sequence. Pages are 1-indexed and the
// current page is clamped whenever the filtered count shrinks below it.

pub const ITEMS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current: usize,
    pub per_page: usize,
    pub total_items: usize,
}

impl PageState {
    // Clamps the requested page into [1, total_pages].
    pub fn new(requested: usize, total_items: usize) -> Self {
        let per_page = ITEMS_PER_PAGE;
        let total_pages = Self::page_count(total_items, per_page);
        let current = requested.max(1).min(total_pages.max(1));
        PageState {
            current,
            per_page,
            total_items,
        }
    }

    fn page_count(total_items: usize, per_page: usize) -> usize {
        total_items.div_ceil(per_page)
    }

    pub fn total_pages(&self) -> usize {
        Self::page_count(self.total_items, self.per_page)
    }

    // Half-open slice bounds [(P-1)*per_page, (P-1)*per_page + per_page),
    // capped at the end of the sequence.
    pub fn window(&self) -> (usize, usize) {
        let start = (self.current - 1) * self.per_page;
        let start = start.min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        (start, end)
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let (start, end) = self.window();
        &items[start..end]
    }

    // 1-based bounds for the "showing X-Y of Z" line; (0, 0) when empty.
    pub fn display_range(&self) -> (usize, usize) {
        if self.total_items == 0 {
            return (0, 0);
        }
        let (start, end) = self.window();
        (start + 1, end)
    }

    pub fn has_prev(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total_pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_items_make_three_pages() {
        let items: Vec<usize> = (0..25).collect();

        let first = PageState::new(1, items.len());
        assert_eq!(first.total_pages(), 3);
        assert_eq!(first.slice(&items), &(0..10).collect::<Vec<_>>()[..]);

        let last = PageState::new(3, items.len());
        assert_eq!(last.slice(&items), &[20, 21, 22, 23, 24]);
        assert_eq!(last.display_range(), (21, 25));
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn requested_page_is_clamped_to_total_pages() {
        let state = PageState::new(7, 25);
        assert_eq!(state.current, 3);

        // Shrinking the set below the old window lands on the last valid page.
        let shrunk = PageState::new(3, 12);
        assert_eq!(shrunk.current, 2);
    }

    #[test]
    fn empty_result_set_stays_on_page_one() {
        let state = PageState::new(4, 0);
        assert_eq!(state.current, 1);
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.window(), (0, 0));
        assert_eq!(state.display_range(), (0, 0));
        assert!(!state.has_prev());
        assert!(!state.has_next());

        let empty: Vec<usize> = Vec::new();
        assert!(state.slice(&empty).is_empty());
    }

    #[test]
    fn page_zero_is_normalized_to_one() {
        let state = PageState::new(0, 5);
        assert_eq!(state.current, 1);
        assert_eq!(state.window(), (0, 5));
    }

    #[test]
    fn exact_multiple_has_no_partial_page() {
        let state = PageState::new(2, 20);
        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.window(), (10, 20));
        assert!(!state.has_next());
    }
}
