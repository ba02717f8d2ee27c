use crate::Msg;

/// Category chooser with a mobile drawer.
///
/// The selector never owns the active category. Picking an entry goes
/// through the caller's `on_change` callback, and the parent feeds the new
/// value back via [`FilterSelector::observe_active_category`], which also
/// closes the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelector {
    drawer_open: bool,
    watched_category: String,
    on_change: fn(String) -> Msg,
}

impl FilterSelector {
    pub fn new(on_change: fn(String) -> Msg) -> Self {
        Self {
            drawer_open: false,
            watched_category: String::new(),
            on_change,
        }
    }

    pub fn drawer_open(&self) -> bool {
        self.drawer_open
    }

    /// Hands the chosen category to the caller's callback.
    pub fn on_change(&self, category: impl Into<String>) -> Msg {
        (self.on_change)(category.into())
    }

    /// Watcher for the active category. Closes the drawer whenever the value
    /// differs from the last one observed; returns whether it changed.
    pub fn observe_active_category(&mut self, active: &str) -> bool {
        if self.watched_category == active {
            return false;
        }
        self.watched_category = active.to_string();
        self.drawer_open = false;
        true
    }

    pub fn toggle_drawer(&mut self, open: bool) {
        self.drawer_open = open;
    }
}

/// Label shown on the drawer handle: the active category, or `all_text` when
/// no category is selected.
pub fn selected_label<'a>(active: &'a str, all_text: &'a str) -> &'a str {
    if active.is_empty() {
        all_text
    } else {
        active
    }
}
