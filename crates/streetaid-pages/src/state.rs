//! Page-load lifecycle.

/// The states a page load moves through.
///
/// `LocationResolving` is skipped when a named location or no location
/// capability applies. `Failed` is terminal and only reachable from the
/// fetch and render stages — a location failure degrades to an
/// un-located fetch instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Loading,
    LocationResolving,
    Fetching,
    Formatting,
    Rendering,
    Done,
    Failed,
}

impl std::fmt::Display for PageState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PageState::Loading => "loading",
            PageState::LocationResolving => "location-resolving",
            PageState::Fetching => "fetching",
            PageState::Formatting => "formatting",
            PageState::Rendering => "rendering",
            PageState::Done => "done",
            PageState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Log and apply a state transition.
pub(crate) fn advance(state: &mut PageState, next: PageState) {
    tracing::debug!(from = %state, to = %next, "page state transition");
    *state = next;
}
