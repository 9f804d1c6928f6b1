//! Scroll viewport abstraction.
//!
//! The grid does not scroll anything itself. It reads a normalized vertical
//! scroll fraction to decide when to load more rows, reports how many rows
//! are materialized, and asks the viewport to bring the selected row into
//! view. Hosts implement [`ScrollViewport`] over their native scroll area;
//! [`RowViewport`] is a row-based implementation used by default.

/// The scrollable area hosting the grid's rows.
pub trait ScrollViewport {
    /// Vertical scroll position in `0.0..=1.0`; `1.0` means the lower bound
    /// of the content is visible.
    fn vertical_fraction(&self) -> f64;

    /// The number of materialized rows changed.
    fn set_content_rows(&mut self, rows: usize);

    /// Scroll the minimum amount needed to show the row at `index`.
    fn ensure_row_visible(&mut self, index: usize);
}

/// Default number of rows a [`RowViewport`] shows at once.
pub const DEFAULT_PAGE_ROWS: usize = 10;

/// A viewport that scrolls in whole rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViewport {
    content_rows: usize,
    page_rows: usize,
    first_row: usize,
}

impl RowViewport {
    /// Create a viewport showing `page_rows` rows at once.
    pub fn new(page_rows: usize) -> Self {
        Self {
            content_rows: 0,
            page_rows,
            first_row: 0,
        }
    }

    /// Index of the topmost visible row.
    pub fn first_row(&self) -> usize {
        self.first_row
    }

    /// Number of rows shown at once.
    pub fn page_rows(&self) -> usize {
        self.page_rows
    }

    /// Number of rows in the content.
    pub fn content_rows(&self) -> usize {
        self.content_rows
    }

    /// Change the page height, e.g. after a resize.
    pub fn set_page_rows(&mut self, page_rows: usize) {
        self.page_rows = page_rows;
        self.set_first_row(self.first_row);
    }

    /// The largest valid `first_row`.
    pub fn max_first_row(&self) -> usize {
        self.content_rows.saturating_sub(self.page_rows)
    }

    /// Scroll so `row` is the topmost visible row (clamped).
    pub fn set_first_row(&mut self, row: usize) {
        self.first_row = row.min(self.max_first_row());
    }

    /// Scroll by a number of rows.
    pub fn scroll_by(&mut self, rows: isize) {
        let target = self.first_row.saturating_add_signed(rows);
        self.set_first_row(target);
    }

    /// Scroll to the top.
    pub fn scroll_to_top(&mut self) {
        self.set_first_row(0);
    }

    /// Scroll to the bottom.
    pub fn scroll_to_bottom(&mut self) {
        self.set_first_row(self.max_first_row());
    }
}

impl Default for RowViewport {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_ROWS)
    }
}

impl ScrollViewport for RowViewport {
    fn vertical_fraction(&self) -> f64 {
        let max = self.max_first_row();
        if max == 0 {
            // All content fits, so the lower bound is on screen.
            1.0
        } else {
            self.first_row as f64 / max as f64
        }
    }

    fn set_content_rows(&mut self, rows: usize) {
        self.content_rows = rows;
        self.set_first_row(self.first_row);
    }

    fn ensure_row_visible(&mut self, index: usize) {
        if index < self.first_row {
            self.set_first_row(index);
        } else if self.page_rows > 0 && index >= self.first_row + self.page_rows {
            self.set_first_row(index + 1 - self.page_rows);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_tracks_scroll_position() {
        let mut viewport = RowViewport::new(10);
        viewport.set_content_rows(30);
        assert_eq!(viewport.vertical_fraction(), 0.0);
        viewport.set_first_row(10);
        assert_eq!(viewport.vertical_fraction(), 0.5);
        viewport.scroll_to_bottom();
        assert_eq!(viewport.vertical_fraction(), 1.0);
    }

    #[test]
    fn test_content_that_fits_is_at_bottom() {
        let mut viewport = RowViewport::new(10);
        viewport.set_content_rows(4);
        assert_eq!(viewport.vertical_fraction(), 1.0);
    }

    #[test]
    fn test_ensure_row_visible_scrolls_minimally() {
        let mut viewport = RowViewport::new(5);
        viewport.set_content_rows(20);
        viewport.ensure_row_visible(7);
        assert_eq!(viewport.first_row(), 3);
        viewport.ensure_row_visible(5);
        assert_eq!(viewport.first_row(), 3);
        viewport.ensure_row_visible(1);
        assert_eq!(viewport.first_row(), 1);
    }

    #[test]
    fn test_shrinking_content_clamps() {
        let mut viewport = RowViewport::new(5);
        viewport.set_content_rows(20);
        viewport.scroll_to_bottom();
        viewport.set_content_rows(8);
        assert_eq!(viewport.first_row(), 3);
        viewport.scroll_by(-10);
        assert_eq!(viewport.first_row(), 0);
    }
}
