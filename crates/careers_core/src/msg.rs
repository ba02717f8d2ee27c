use crate::{DocumentGeometry, ListingDraft};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Host page data decoded; listings arrive in page order without ids.
    Mounted {
        listings: Vec<ListingDraft>,
        categories: Vec<String>,
    },
    /// The view is being torn down.
    Unmounted,
    /// Free-text search box edited.
    QueryChanged(String),
    /// Category picked in the filter list (empty string = all).
    CategorySelected(String),
    /// Mobile drawer handle clicked.
    DrawerToggled(bool),
    /// Frame-aligned scroll signal, with the geometry read at dispatch time.
    Scrolled(DocumentGeometry),
    /// Render tick.
    Tick,
    NoOp,
}
