use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Visible results are refreshed after every message, so a reset and a growth
/// queued in the same tick take effect in the order they were queued.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted {
            listings,
            categories,
        } => {
            state.mount(listings, categories);
            if state.is_subscribed() {
                // One listener per grid; a re-mount reuses it.
                Vec::new()
            } else {
                state.set_subscribed(true);
                vec![Effect::SubscribeScroll]
            }
        }
        Msg::Unmounted => {
            if state.is_subscribed() {
                state.set_subscribed(false);
                vec![Effect::UnsubscribeScroll]
            } else {
                Vec::new()
            }
        }
        Msg::QueryChanged(query) => {
            state.set_query(query);
            Vec::new()
        }
        Msg::CategorySelected(category) => {
            state.set_category(category);
            Vec::new()
        }
        Msg::DrawerToggled(open) => {
            state.toggle_drawer(open);
            Vec::new()
        }
        Msg::Scrolled(geometry) => {
            // Signals still queued after disposal are stale.
            if state.is_subscribed() {
                state.grow_on_scroll(&geometry);
            }
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    state.refresh_results();
    (state, effects)
}
