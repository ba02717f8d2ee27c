pub const DEFAULT_INITIAL_PAGE_SIZE: usize = 6;
pub const DEFAULT_PAGE_INCREMENT: usize = 1;

/// Tracks how many results the grid currently reveals.
///
/// The count starts at `initial_page_size`, grows by `page_increment` while
/// the viewer sits near the bottom of the page, and snaps back to the initial
/// size whenever the query or category changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementalReveal {
    revealed: usize,
    initial_page_size: usize,
    page_increment: usize,
}

impl IncrementalReveal {
    pub fn new(initial_page_size: usize, page_increment: usize) -> Self {
        Self {
            revealed: initial_page_size,
            initial_page_size,
            page_increment,
        }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Reveals one more page if the viewer is near the bottom and `total`
    /// candidates are not all revealed yet. Never grows past `total`.
    pub fn grow(&mut self, total: usize, near_bottom: bool) -> bool {
        if !near_bottom || self.revealed >= total {
            return false;
        }
        let next = self.revealed.saturating_add(self.page_increment).min(total);
        let grew = next != self.revealed;
        self.revealed = next;
        grew
    }

    pub fn reset(&mut self) {
        self.revealed = self.initial_page_size;
    }
}

impl Default for IncrementalReveal {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_PAGE_SIZE, DEFAULT_PAGE_INCREMENT)
    }
}
