use crate::filter::{FilterCriteria, ResultCache};
use crate::listing::{assign_ids, Listing, ListingDraft};
use crate::metrics::{is_near_bottom, DocumentGeometry};
use crate::reveal::IncrementalReveal;
use crate::selector::FilterSelector;
use crate::view_model::{AppViewModel, CardView, FilterEntryView, FilterListView};
use crate::{GridConfig, Msg};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    config: GridConfig,
    listings: Vec<Listing>,
    categories: Vec<String>,
    /// Bumped every time the candidate list is replaced.
    generation: u64,
    placeholder: Listing,
    query: String,
    active_category: String,
    reveal: IncrementalReveal,
    selector: FilterSelector,
    results: ResultCache,
    subscribed: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(GridConfig::default())
    }

    pub fn with_config(config: GridConfig) -> Self {
        let mut state = Self {
            reveal: IncrementalReveal::new(config.initial_page_size, config.columns),
            placeholder: Listing::placeholder(config.empty_message.clone()),
            config,
            listings: Vec::new(),
            categories: Vec::new(),
            generation: 0,
            query: String::new(),
            active_category: String::new(),
            selector: FilterSelector::new(Msg::CategorySelected),
            results: ResultCache::new(),
            subscribed: false,
            dirty: false,
        };
        state.refresh_results();
        state.dirty = false;
        state
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn revealed(&self) -> usize {
        self.reveal.revealed()
    }

    pub fn selector(&self) -> &FilterSelector {
        &self.selector
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// How many times the visible results have been recomputed.
    pub fn result_recomputations(&self) -> u64 {
        self.results.recomputations()
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mount(&mut self, drafts: Vec<ListingDraft>, categories: Vec<String>) {
        self.listings = assign_ids(drafts);
        self.categories = categories;
        self.generation += 1;
        self.reveal.reset();
        self.dirty = true;
    }

    pub(crate) fn set_subscribed(&mut self, subscribed: bool) {
        self.subscribed = subscribed;
    }

    /// Returns `true` if the query actually changed (and the reveal was reset).
    pub(crate) fn set_query(&mut self, query: String) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query;
        self.reveal.reset();
        self.dirty = true;
        true
    }

    /// Returns `true` if the category actually changed (and the reveal was reset).
    pub(crate) fn set_category(&mut self, category: String) -> bool {
        if self.active_category == category {
            return false;
        }
        self.active_category = category;
        self.reveal.reset();
        self.selector.observe_active_category(&self.active_category);
        self.dirty = true;
        true
    }

    pub(crate) fn toggle_drawer(&mut self, open: bool) {
        if self.selector.drawer_open() != open {
            self.selector.toggle_drawer(open);
            self.dirty = true;
        }
    }

    /// Grows the reveal count when the geometry says the viewer is near the
    /// bottom and not every candidate is revealed yet.
    pub(crate) fn grow_on_scroll(&mut self, geometry: &DocumentGeometry) -> bool {
        let near_bottom = is_near_bottom(geometry, self.config.infinite_distance);
        let grew = self.reveal.grow(self.listings.len(), near_bottom);
        if grew {
            self.dirty = true;
        }
        grew
    }

    /// Recomputes the visible results if any of their inputs changed.
    pub(crate) fn refresh_results(&mut self) {
        let mut criteria = FilterCriteria::new(&self.query, &self.active_category);
        criteria.query_by = self.config.query_field.map(|field| field.accessor());
        criteria.filter_by = self.config.filter_field.map(|field| field.accessor());
        if self.results.refresh(
            self.generation,
            &self.listings,
            &criteria,
            self.reveal.revealed(),
        ) {
            self.dirty = true;
        }
    }

    pub fn view(&self) -> AppViewModel {
        let visible: Vec<&Listing> = self
            .results
            .indices()
            .iter()
            .filter_map(|&index| self.listings.get(index))
            .collect();
        let showing_placeholder = visible.is_empty();
        let shown = if showing_placeholder {
            vec![&self.placeholder]
        } else {
            visible
        };

        let card_width = self.config.card_width();
        let last_index = shown.len().saturating_sub(1);
        let cards = shown
            .into_iter()
            .enumerate()
            .map(|(position, listing)| CardView {
                id: listing.id,
                title: listing.title.clone(),
                summary: listing.summary.clone(),
                url: listing.url.clone(),
                card_width: card_width.clone(),
                last: position == last_index,
            })
            .collect();

        AppViewModel {
            filters: self.filter_list_view(),
            cards,
            showing_placeholder,
            query: self.query.clone(),
            revealed: self.reveal.revealed(),
            total: self.listings.len(),
            dirty: self.dirty,
        }
    }

    fn filter_list_view(&self) -> FilterListView {
        let all = FilterEntryView {
            label: self.config.all_text.clone(),
            value: String::new(),
            active: self.active_category.is_empty(),
        };
        let entries = std::iter::once(all)
            .chain(self.categories.iter().map(|category| FilterEntryView {
                label: category.clone(),
                value: category.clone(),
                active: *category == self.active_category,
            }))
            .collect();

        FilterListView {
            selected_label: crate::selector::selected_label(
                &self.active_category,
                &self.config.all_text,
            )
            .to_string(),
            entries,
            backdrop: self.config.backdrop,
            drawer_open: self.selector.drawer_open(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
