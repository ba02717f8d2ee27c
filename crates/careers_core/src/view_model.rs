use crate::ListingId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub filters: FilterListView,
    pub cards: Vec<CardView>,
    /// True when `cards` holds only the "no results" placeholder.
    pub showing_placeholder: bool,
    pub query: String,
    pub revealed: usize,
    pub total: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterListView {
    pub selected_label: String,
    pub entries: Vec<FilterEntryView>,
    pub backdrop: bool,
    pub drawer_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEntryView {
    pub label: String,
    /// Category sent back through `on_change`; empty for the "all" entry.
    pub value: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ListingId,
    pub title: String,
    pub summary: String,
    pub url: String,
    pub card_width: String,
    pub last: bool,
}
