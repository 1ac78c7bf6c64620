//! Dropdown selection state over a ranked match list.
//!
//! The engine recomputes matches from scratch on every trigger; the host
//! owns selection state between triggers and keeps it here. One `MatchList`
//! per dropdown, refilled from each new `MatchResult`.

use crate::keyword::Keyword;
use crate::ranker::MatchResult;

/// Paginated cursor over ranked matches.
#[derive(Debug, Clone)]
pub struct MatchList {
    matches: Vec<Keyword>,
    page_size: usize,
    page: usize,
    cursor: usize,
}

impl MatchList {
    /// Create an empty list with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(5)
    }

    /// Create an empty list with the given page size (minimum 1).
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            matches: Vec::new(),
            page_size: page_size.max(1),
            page: 0,
            cursor: 0,
        }
    }

    /// Refill from a freshly resolved result, resetting page and cursor.
    pub fn set_from_result(&mut self, result: &MatchResult) {
        self.matches = result.matches.clone();
        self.page = 0;
        self.cursor = 0;
    }

    pub fn clear(&mut self) {
        self.matches.clear();
        self.page = 0;
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn num_pages(&self) -> usize {
        self.matches.len().div_ceil(self.page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The matches visible on the current page.
    pub fn page_matches(&self) -> &[Keyword] {
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(self.matches.len());
        &self.matches[start..end]
    }

    /// The keyword under the cursor, if any.
    pub fn selected(&self) -> Option<&Keyword> {
        self.page_matches().get(self.cursor)
    }

    /// Global index of the selection across all pages.
    pub fn selected_index(&self) -> Option<usize> {
        let index = self.page * self.page_size + self.cursor;
        (index < self.matches.len()).then_some(index)
    }

    /// Move the cursor up within the page. Returns true if it moved.
    pub fn cursor_up(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor down within the page. Returns true if it moved.
    pub fn cursor_down(&mut self) -> bool {
        if self.cursor + 1 < self.page_matches().len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Flip to the previous page, clamping the cursor. Returns true if the
    /// page changed.
    pub fn page_up(&mut self) -> bool {
        if self.page == 0 {
            return false;
        }
        self.page -= 1;
        self.clamp_cursor();
        true
    }

    /// Flip to the next page, clamping the cursor. Returns true if the page
    /// changed.
    pub fn page_down(&mut self) -> bool {
        if self.page + 1 >= self.num_pages() {
            return false;
        }
        self.page += 1;
        self.clamp_cursor();
        true
    }

    /// Select by index within the current page (dropdown click / number
    /// key). Returns the selected keyword when the index is valid.
    pub fn select_by_index(&mut self, page_index: usize) -> Option<&Keyword> {
        if page_index < self.page_matches().len() {
            self.cursor = page_index;
            self.selected()
        } else {
            None
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.page_matches().len();
        if len > 0 && self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

impl Default for MatchList {
    fn default() -> Self {
        Self::new()
    }
}
