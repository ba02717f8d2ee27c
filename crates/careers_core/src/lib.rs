//! Careers core: pure state machine for the filterable, infinitely scrolling
//! listing grid, plus the scroll helpers it depends on.
mod config;
mod effect;
mod filter;
mod listing;
mod metrics;
mod msg;
mod reveal;
mod selector;
mod signal;
mod state;
mod update;
mod view_model;

pub use config::{GridConfig, DEFAULT_ALL_TEXT, DEFAULT_EMPTY_MESSAGE, DEFAULT_INFINITE_DISTANCE};
pub use effect::Effect;
pub use filter::{filter_results, matching_indices, FieldAccessor, FilterCriteria, ResultCache};
pub use listing::{assign_ids, Listing, ListingDraft, ListingField, ListingId};
pub use metrics::{
    document_height, is_near_bottom, scroll_offset, DocumentGeometry, ElementHeights,
    ScrollOffset,
};
pub use msg::Msg;
pub use reveal::{IncrementalReveal, DEFAULT_INITIAL_PAGE_SIZE, DEFAULT_PAGE_INCREMENT};
pub use selector::{selected_label, FilterSelector};
pub use signal::{FrameRequest, ScrollSignal, SubscriptionId};
pub use state::AppState;
pub use update::update;
pub use view_model::{AppViewModel, CardView, FilterEntryView, FilterListView};
