#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Install the grid's listener on the page scroll signal.
    SubscribeScroll,
    /// Dispose the listener installed by `SubscribeScroll`.
    UnsubscribeScroll,
}
