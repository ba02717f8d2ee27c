use std::rc::Rc;
use std::sync::mpsc;

use careers_core::{
    update, AppState, AppViewModel, Effect, FrameRequest, GridConfig, Msg, ScrollSignal,
    SubscriptionId,
};
use careers_host::HostData;
use careers_logging::{careers_debug, careers_info, careers_trace, careers_warn};

use super::ui;
use super::window::HostWindow;

/// Owns everything the page shares across the grid: the state, the single
/// scroll signal and the message queue every change goes through.
///
/// Messages are applied strictly in the order they were queued. Rendering is
/// coalesced to at most one markup update per processed batch.
pub struct CareersHost {
    window: Rc<dyn HostWindow>,
    state: AppState,
    signal: ScrollSignal,
    subscription: Option<SubscriptionId>,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
    frame: u64,
    frame_requested: bool,
    markup: Option<String>,
}

impl CareersHost {
    pub fn new(window: Rc<dyn HostWindow>, config: GridConfig) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            window,
            state: AppState::with_config(config),
            signal: ScrollSignal::new(),
            subscription: None,
            msg_tx,
            msg_rx,
            frame: 0,
            frame_requested: false,
            markup: None,
        }
    }

    /// Sender for UI callbacks; anything sent is applied on the next batch.
    pub fn sender(&self) -> mpsc::Sender<Msg> {
        self.msg_tx.clone()
    }

    pub fn mount(&mut self, data: HostData) {
        careers_info!(
            "Mounting grid with {} listings and {} categories",
            data.listings.len(),
            data.categories.len()
        );
        self.send(Msg::Mounted {
            listings: data.listings,
            categories: data.categories,
        });
        self.process_pending_messages();
    }

    /// Tears the view down and disposes the scroll listener.
    pub fn unmount(&mut self) {
        self.send(Msg::Unmounted);
        self.process_pending_messages();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.send(Msg::QueryChanged(query.into()));
    }

    /// A click on a filter entry, routed through the selector's callback.
    pub fn click_category(&mut self, category: impl Into<String>) {
        let msg = self.state.selector().on_change(category);
        self.send(msg);
    }

    pub fn click_drawer_handle(&mut self) {
        let open = !self.state.selector().drawer_open();
        self.send(Msg::DrawerToggled(open));
    }

    /// Native scroll event from the window.
    pub fn native_scroll(&mut self) {
        match self.signal.on_native_scroll() {
            FrameRequest::Schedule => {
                careers_trace!("Scroll: requesting animation frame");
                self.frame_requested = true;
            }
            FrameRequest::Coalesced => {}
        }
    }

    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Animation frame tick: dispatches the pending scroll signal, then applies
    /// every queued message and renders once if anything changed.
    pub fn animation_frame(&mut self) {
        self.frame += 1;
        careers_logging::set_frame(self.frame);
        self.frame_requested = false;

        let notified = self.signal.on_animation_frame();
        if notified > 0 {
            careers_trace!("Scroll signal dispatched to {} listener(s)", notified);
        }
        self.process_pending_messages();
    }

    pub fn process_pending_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        if inbox.is_empty() {
            return;
        }
        for msg in inbox {
            self.dispatch_msg(msg);
        }

        if self.state.consume_dirty() {
            let view = self.state.view();
            self.render(&view);
        }
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Latest rendered markup not yet taken.
    pub fn take_markup(&mut self) -> Option<String> {
        self.markup.take()
    }

    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    fn send(&self, msg: Msg) {
        // The receiver lives in `self`, so the send cannot fail.
        let _ = self.msg_tx.send(msg);
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let revealed_before = self.state.revealed();
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let revealed = self.state.revealed();
        if revealed != revealed_before {
            careers_debug!("Revealed {} -> {}", revealed_before, revealed);
        }
        self.run_effects(effects);
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubscribeScroll => self.subscribe_scroll(),
                Effect::UnsubscribeScroll => self.unsubscribe_scroll(),
            }
        }
    }

    fn subscribe_scroll(&mut self) {
        if self.subscription.is_some() {
            careers_warn!("Scroll listener already installed; ignoring");
            return;
        }
        let msg_tx = self.msg_tx.clone();
        let window = Rc::clone(&self.window);
        let id = self.signal.subscribe(move || {
            let _ = msg_tx.send(Msg::Scrolled(window.geometry()));
        });
        careers_debug!("Installed scroll listener {:?}", id);
        self.subscription = Some(id);
    }

    fn unsubscribe_scroll(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.signal.unsubscribe(id);
            careers_debug!("Disposed scroll listener {:?}", id);
        }
    }

    fn render(&mut self, view: &AppViewModel) {
        self.markup = Some(ui::render::render(view));
        self.window.layout(view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::window::{SimulatedWindow, WindowLayout};
    use careers_core::{ListingDraft, ListingId};
    use pretty_assertions::assert_eq;

    fn host_data(count: usize) -> HostData {
        HostData {
            listings: (0..count)
                .map(|i| ListingDraft {
                    title: format!("Role {i}"),
                    summary: String::new(),
                    url: format!("/jobs/{i}"),
                    categories: Some(if i < 3 { "Design" } else { "Engineering" }.to_string()),
                })
                .collect(),
            categories: vec!["Design".to_string(), "Engineering".to_string()],
        }
    }

    fn mounted_host(count: usize) -> (CareersHost, Rc<SimulatedWindow>) {
        careers_logging::initialize_for_tests();
        let window = Rc::new(SimulatedWindow::new(WindowLayout::default()));
        let mut host = CareersHost::new(window.clone(), GridConfig::default());
        host.mount(host_data(count));
        (host, window)
    }

    fn scroll_to_bottom(host: &mut CareersHost, window: &SimulatedWindow) {
        window.scroll_to_bottom();
        host.native_scroll();
        host.animation_frame();
    }

    #[test]
    fn mount_installs_one_listener_and_renders() {
        let (mut host, _window) = mounted_host(10);
        assert!(host.is_listening());
        assert_eq!(host.signal.listener_count(), 1);
        let markup = host.take_markup().expect("initial render");
        assert_eq!(markup.matches("<li class=\"gsf-career-listing").count(), 6);

        host.mount(host_data(10));
        assert_eq!(host.signal.listener_count(), 1);
    }

    #[test]
    fn scrolling_to_bottom_reveals_one_more() {
        let (mut host, window) = mounted_host(10);
        scroll_to_bottom(&mut host, &window);
        assert_eq!(host.state().revealed(), 7);
        assert_eq!(host.view().cards.len(), 7);
    }

    #[test]
    fn scroll_burst_within_a_frame_grows_once() {
        let (mut host, window) = mounted_host(10);
        window.scroll_to_bottom();
        for _ in 0..10 {
            host.native_scroll();
        }
        assert!(host.frame_requested());
        host.animation_frame();
        assert!(!host.frame_requested());
        assert_eq!(host.state().revealed(), 7);

        // Idle frame: nothing pending, nothing grows.
        host.animation_frame();
        assert_eq!(host.state().revealed(), 7);
    }

    #[test]
    fn keeps_revealing_until_everything_is_shown() {
        let (mut host, window) = mounted_host(10);
        for _ in 0..10 {
            scroll_to_bottom(&mut host, &window);
        }
        assert_eq!(host.state().revealed(), 10);
        assert_eq!(host.view().cards.len(), 10);
    }

    #[test]
    fn category_click_resets_reveal_and_closes_drawer() {
        let (mut host, window) = mounted_host(10);
        scroll_to_bottom(&mut host, &window);
        host.click_drawer_handle();
        host.process_pending_messages();
        assert!(host.view().filters.drawer_open);

        host.click_category("Design");
        host.process_pending_messages();
        let view = host.view();
        assert!(!view.filters.drawer_open);
        assert_eq!(host.state().revealed(), 6);
        assert_eq!(
            view.cards.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![ListingId(0), ListingId(1), ListingId(2)]
        );
    }

    #[test]
    fn query_queued_with_scroll_applies_in_arrival_order() {
        let (mut host, window) = mounted_host(10);
        window.scroll_to_bottom();
        host.native_scroll();
        // The scroll signal is dispatched at the frame, after the query was queued.
        host.set_query("role");
        host.animation_frame();
        assert_eq!(host.state().query(), "role");
        assert_eq!(host.state().revealed(), 7);
    }

    #[test]
    fn messages_from_ui_sender_apply_on_next_frame() {
        let (mut host, _window) = mounted_host(10);
        let ui = host.sender();
        ui.send(Msg::QueryChanged("role 4".to_string())).unwrap();
        ui.send(Msg::DrawerToggled(true)).unwrap();
        assert_eq!(host.state().query(), "");

        host.animation_frame();
        let view = host.view();
        assert_eq!(host.state().query(), "role 4");
        assert!(view.filters.drawer_open);
        assert_eq!(view.cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![ListingId(4)]);
    }

    #[test]
    fn unmatched_category_shows_placeholder() {
        let (mut host, _window) = mounted_host(10);
        host.click_category("Marketing");
        host.process_pending_messages();
        let view = host.view();
        assert!(view.showing_placeholder);
        assert_eq!(view.cards[0].id, ListingId::PLACEHOLDER);
    }

    #[test]
    fn unmount_disposes_listener() {
        let (mut host, window) = mounted_host(10);
        host.unmount();
        assert!(!host.is_listening());
        assert_eq!(host.signal.listener_count(), 0);

        scroll_to_bottom(&mut host, &window);
        assert_eq!(host.state().revealed(), 6);
    }

    #[test]
    fn unchanged_state_does_not_rerender() {
        let (mut host, _window) = mounted_host(10);
        assert!(host.take_markup().is_some());
        host.set_query("");
        host.process_pending_messages();
        assert!(host.take_markup().is_none());
    }
}
