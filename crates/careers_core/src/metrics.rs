//! Scroll geometry readouts.
//!
//! The host window hands over a [`DocumentGeometry`] snapshot; everything here
//! is a pure function of that snapshot.

/// A scroll position as reported by one of the document's position sources.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    pub const ZERO: ScrollOffset = ScrollOffset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Height readouts of one element (body or root element).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ElementHeights {
    pub scroll_height: f64,
    pub offset_height: f64,
    pub client_height: f64,
}

impl ElementHeights {
    pub fn uniform(height: f64) -> Self {
        Self {
            scroll_height: height,
            offset_height: height,
            client_height: height,
        }
    }

    fn max(&self) -> f64 {
        self.scroll_height
            .max(self.offset_height)
            .max(self.client_height)
    }
}

/// Snapshot of the document state the grid reasons about.
///
/// Each scroll source is optional because hosts expose different subsets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DocumentGeometry {
    /// Standards page offset (`pageXOffset`/`pageYOffset`).
    pub page_offset: Option<ScrollOffset>,
    pub body_scroll: Option<ScrollOffset>,
    pub root_scroll: Option<ScrollOffset>,
    pub body: ElementHeights,
    pub root: ElementHeights,
    pub viewport_height: f64,
}

/// Current scroll offset, trying the page offset, then the body, then the
/// root element. Body and root only count when they report a non-zero offset.
pub fn scroll_offset(geometry: &DocumentGeometry) -> ScrollOffset {
    if let Some(offset) = geometry.page_offset {
        return offset;
    }
    [geometry.body_scroll, geometry.root_scroll]
        .into_iter()
        .flatten()
        .find(|offset| !offset.is_zero())
        .unwrap_or(ScrollOffset::ZERO)
}

/// Full document height: the largest of the six body/root measurements.
pub fn document_height(geometry: &DocumentGeometry) -> f64 {
    geometry.body.max().max(geometry.root.max())
}

/// True when fewer than `tolerance` pixels remain below the viewport.
///
/// Exact equality is *not* near the bottom.
pub fn is_near_bottom(geometry: &DocumentGeometry, tolerance: f64) -> bool {
    let offset = scroll_offset(geometry);
    document_height(geometry) < offset.y + geometry.viewport_height + tolerance
}
