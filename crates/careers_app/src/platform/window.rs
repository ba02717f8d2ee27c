use std::cell::Cell;

use careers_core::{AppViewModel, DocumentGeometry, ElementHeights, ScrollOffset};

/// The page the grid lives in, as far as scrolling is concerned.
pub trait HostWindow {
    /// Reads the current document geometry.
    fn geometry(&self) -> DocumentGeometry;

    /// Called after every render so the window can lay out the new content.
    fn layout(&self, _view: &AppViewModel) {}
}

/// Layout parameters for [`SimulatedWindow`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLayout {
    pub viewport_height: f64,
    pub card_height: f64,
    /// Height of everything on the page that is not a card row.
    pub chrome_height: f64,
    pub columns: usize,
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self {
            viewport_height: 800.0,
            card_height: 180.0,
            chrome_height: 400.0,
            columns: 1,
        }
    }
}

/// Headless window: cards stack in rows of fixed height under a fixed chrome
/// block, and the scroll position is set explicitly.
#[derive(Debug)]
pub struct SimulatedWindow {
    layout: WindowLayout,
    scroll_y: Cell<f64>,
    rows: Cell<usize>,
}

impl SimulatedWindow {
    pub fn new(layout: WindowLayout) -> Self {
        Self {
            layout,
            scroll_y: Cell::new(0.0),
            rows: Cell::new(0),
        }
    }

    pub fn document_height(&self) -> f64 {
        self.layout.chrome_height + self.rows.get() as f64 * self.layout.card_height
    }

    /// Scrolls to `y`, clamped to the scrollable range.
    pub fn scroll_to(&self, y: f64) {
        let max = (self.document_height() - self.layout.viewport_height).max(0.0);
        self.scroll_y.set(y.clamp(0.0, max));
    }

    pub fn scroll_to_bottom(&self) {
        self.scroll_to(f64::MAX);
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }
}

impl HostWindow for SimulatedWindow {
    fn geometry(&self) -> DocumentGeometry {
        let document = self.document_height().max(self.layout.viewport_height);
        DocumentGeometry {
            page_offset: Some(ScrollOffset::new(0.0, self.scroll_y.get())),
            body_scroll: None,
            root_scroll: None,
            body: ElementHeights::uniform(document),
            root: ElementHeights {
                scroll_height: document,
                offset_height: document,
                client_height: self.layout.viewport_height,
            },
            viewport_height: self.layout.viewport_height,
        }
    }

    fn layout(&self, view: &AppViewModel) {
        let columns = self.layout.columns.max(1);
        self.rows.set(view.cards.len().div_ceil(columns));
        // Content may have shrunk under the current position.
        self.scroll_to(self.scroll_y.get());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careers_core::{document_height, is_near_bottom, CardView, ListingId};

    fn view_with_cards(count: usize) -> AppViewModel {
        AppViewModel {
            cards: (0..count)
                .map(|i| CardView {
                    id: ListingId(i as u64),
                    title: String::new(),
                    summary: String::new(),
                    url: String::new(),
                    card_width: "100%".to_string(),
                    last: i + 1 == count,
                })
                .collect(),
            ..AppViewModel::default()
        }
    }

    #[test]
    fn layout_tracks_rendered_rows() {
        let window = SimulatedWindow::new(WindowLayout {
            columns: 2,
            ..WindowLayout::default()
        });
        window.layout(&view_with_cards(5));
        assert_eq!(document_height(&window.geometry()), 400.0 + 3.0 * 180.0);
    }

    #[test]
    fn bottom_of_short_page_is_near_bottom() {
        let window = SimulatedWindow::new(WindowLayout::default());
        window.layout(&view_with_cards(6));
        assert!(!is_near_bottom(&window.geometry(), 0.0));
        window.scroll_to_bottom();
        assert_eq!(window.scroll_y(), 400.0 + 6.0 * 180.0 - 800.0);
        assert!(is_near_bottom(&window.geometry(), 1.0));
    }

    #[test]
    fn shrinking_content_clamps_scroll_position() {
        let window = SimulatedWindow::new(WindowLayout::default());
        window.layout(&view_with_cards(10));
        window.scroll_to_bottom();
        window.layout(&view_with_cards(1));
        assert_eq!(window.scroll_y(), 0.0);
    }
}
