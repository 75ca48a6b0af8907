//! Fixed-size pagination over the visible rows.

use std::ops::Range;

/// Rows per page. Not user adjustable.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pager {
    page: usize,
}

impl Pager {
    /// Zero-based current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages for `total` visible rows; an empty grid still has one.
    pub fn page_count(total: usize) -> usize {
        total.div_ceil(PAGE_SIZE).max(1)
    }

    /// Positions (into the visible rows) shown on the current page.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = (self.page * PAGE_SIZE).min(total);
        let end = (start + PAGE_SIZE).min(total);
        start..end
    }

    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.min(Self::page_count(total) - 1);
    }

    pub fn first(&mut self) {
        self.page = 0;
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    pub fn next(&mut self, total: usize) {
        self.page = (self.page + 1).min(Self::page_count(total) - 1);
    }

    pub fn last(&mut self, total: usize) {
        self.page = Self::page_count(total) - 1;
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page + 1 < Self::page_count(total)
    }

    /// Jumps to the page holding the row at `position` in the visible rows.
    pub fn show_position(&mut self, position: usize) {
        self.page = position / PAGE_SIZE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_one_empty_page() {
        let pager = Pager::default();
        assert_eq!(Pager::page_count(0), 1);
        assert_eq!(pager.range(0), 0..0);
        assert!(!pager.has_next(0));
    }

    #[test]
    fn last_page_is_partial() {
        let mut pager = Pager::default();
        pager.last(46);

        assert_eq!(Pager::page_count(46), 5);
        assert_eq!(pager.page(), 4);
        assert_eq!(pager.range(46), 40..46);
    }

    #[test]
    fn next_and_previous_stay_in_bounds() {
        let mut pager = Pager::default();
        pager.previous();
        assert_eq!(pager.page(), 0);

        pager.next(20);
        pager.next(20);
        assert_eq!(pager.page(), 1);
        assert!(pager.has_previous());
        assert!(!pager.has_next(20));
    }

    #[test]
    fn clamp_after_rows_disappear() {
        let mut pager = Pager::default();
        pager.last(31);
        assert_eq!(pager.page(), 3);

        pager.clamp(30);
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.range(30), 20..30);
    }

    #[test]
    fn show_position_selects_containing_page() {
        let mut pager = Pager::default();
        pager.show_position(23);
        assert_eq!(pager.page(), 2);
        pager.show_position(9);
        assert_eq!(pager.page(), 0);
    }
}
