//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin runtime executes them in order. Keeping them as data lets the whole
//! application layer run without a Zellij host.

use crate::api::FetchRequest;

/// Commands the plugin runtime carries out on behalf of the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues a GET through the host's web request facility.
    ///
    /// The request context travels with it so the response can be matched
    /// against the pending generation when it comes back.
    Fetch(FetchRequest),

    /// Renames the plugin pane.
    SetPaneTitle(String),
}
