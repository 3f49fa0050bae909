//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place the stores are mutated. It pattern-matches
//! the event, updates [`AppState`], and returns whether to re-render plus the
//! [`Action`]s for the plugin runtime. After every event the pane title is
//! reconciled with the displayed movie, so no exit path can leave a stale title.
//!
//! # Event Types
//!
//! - **Query**: `Char`, `Backspace`, `ClearQuery`
//! - **Navigation**: `FocusNext`, `FocusSearch`, `FocusResults`, `CursorDown`, `CursorUp`
//! - **Selection**: `Activate`, `Back`
//! - **Rating**: `RatingUp`, `RatingDown`, `SetRating`, `AddToWatched`, `RemoveWatched`
//! - **System**: `FetchCompleted`, `PermissionsResult`, `Teardown`
//!
//! # Example
//!
//! ```rust
//! use popcorn::app::{handle_event, AppState, Event};
//! use popcorn::ui::theme::Theme;
//!
//! let mut state = AppState::new(None, "popcorn", Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::FocusNext)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), popcorn::PopcornError>(())
//! ```

use super::detail::SelectOutcome;
use super::modes::Focus;
use super::{Action, AppState};
use crate::api::{FetchKind, FetchResponse};
use crate::domain::error::Result;

/// Events triggered by user input or host callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character from the query.
    Backspace,
    /// Empties the query.
    ClearQuery,

    /// Cycles focus: search, results, right pane.
    FocusNext,
    /// Focuses the query box.
    FocusSearch,
    /// Focuses the results list.
    FocusResults,
    /// Moves the focused list's cursor down (wraps to top).
    CursorDown,
    /// Moves the focused list's cursor up (wraps to bottom).
    CursorUp,

    /// Toggles the selection of the result under the cursor.
    Activate,
    /// Selects or deselects the result with this id.
    Select(String),
    /// Closes the detail view.
    Back,

    RatingUp,
    RatingDown,
    /// Sets the pending rating directly.
    SetRating(u8),
    /// Saves the displayed movie with the pending rating.
    AddToWatched,
    /// Removes the watched entry under the cursor.
    RemoveWatched,

    /// Collapses or expands the focused list pane.
    TogglePane,
    /// Hides the plugin pane.
    CloseFocus,

    /// A web request issued by this plugin completed.
    FetchCompleted(FetchResponse),

    /// Outcome of the startup permission request.
    PermissionsResult {
        granted: bool,
    },

    /// The plugin is about to be unloaded.
    Teardown,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions are executed in order by the plugin
/// runtime; a pane title change, if any, comes last.
///
/// # Errors
///
/// Returns an error for a rating outside `0..=10`.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if *event == Event::Teardown {
        tracing::debug!("teardown, releasing pane title");
        return Ok((false, state.title.release().into_iter().collect()));
    }

    let (mut should_render, mut actions) = dispatch(state, event)?;

    state.focus = state.focus.normalized(state.has_selection());

    let desired = state.displayed_title().map(str::to_string);
    if let Some(action) = state.title.reconcile(desired.as_deref()) {
        actions.push(action);
        should_render = true;
    }

    Ok((should_render, actions))
}

#[allow(clippy::too_many_lines)]
fn dispatch(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    match event {
        Event::Char(c) => {
            let mut query = state.search.query().to_string();
            query.push(*c);
            Ok((true, update_query(state, query)))
        }
        Event::Backspace => {
            let mut query = state.search.query().to_string();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, update_query(state, query)))
        }
        Event::ClearQuery => {
            if state.search.query().is_empty() {
                return Ok((false, vec![]));
            }
            Ok((true, update_query(state, String::new())))
        }
        Event::FocusNext => {
            state.focus = state.focus.next(state.has_selection());
            Ok((true, vec![]))
        }
        Event::FocusSearch => {
            state.focus = Focus::Search;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.focus = Focus::Results;
            Ok((true, vec![]))
        }
        Event::CursorDown => {
            match state.focus {
                Focus::Search | Focus::Results => state.search.cursor_down(),
                Focus::Watched => state.watched.cursor_down(),
                Focus::Detail => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            match state.focus {
                Focus::Search | Focus::Results => state.search.cursor_up(),
                Focus::Watched => state.watched.cursor_up(),
                Focus::Detail => return Ok((false, vec![])),
            }
            Ok((true, vec![]))
        }
        Event::Activate => {
            let Some(id) = state.search.highlighted().map(|movie| movie.id.clone()) else {
                tracing::debug!("no result under cursor");
                return Ok((false, vec![]));
            };
            Ok(select(state, &id))
        }
        Event::Select(id) => Ok(select(state, id)),
        Event::Back => {
            if !state.has_selection() {
                return Ok((false, vec![]));
            }
            state.detail.back();
            state.focus = Focus::Results;
            Ok((true, vec![]))
        }
        Event::RatingUp => {
            if state.detail.displayed().is_none() {
                return Ok((false, vec![]));
            }
            state.detail.rating_up();
            Ok((true, vec![]))
        }
        Event::RatingDown => {
            if state.detail.displayed().is_none() {
                return Ok((false, vec![]));
            }
            state.detail.rating_down();
            Ok((true, vec![]))
        }
        Event::SetRating(value) => {
            if state.detail.displayed().is_none() {
                return Ok((false, vec![]));
            }
            state.detail.set_rating(*value)?;
            Ok((true, vec![]))
        }
        Event::AddToWatched => {
            let (Some(detail), Some(rating)) = (state.detail.displayed(), state.detail.pending_rating()) else {
                tracing::debug!("add ignored, no loaded detail or no rating chosen");
                return Ok((false, vec![]));
            };
            state.watched.upsert(detail, rating);
            state.detail.back();
            state.focus = Focus::Watched;
            Ok((true, vec![]))
        }
        Event::RemoveWatched => {
            let Some(id) = state.watched.highlighted().map(|entry| entry.id.clone()) else {
                return Ok((false, vec![]));
            };
            Ok((state.watched.remove(&id).is_some(), vec![]))
        }
        Event::TogglePane => Ok((state.panes.toggle(state.focus), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::FetchCompleted(response) => Ok((apply_response(state, response), vec![])),
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::warn!("permissions denied, searches will fail");
            }
            Ok((false, vec![]))
        }
        Event::Teardown => Ok((false, vec![])),
    }
}

/// Starts a new search session for `query` and keeps the selection consistent.
fn update_query(state: &mut AppState, query: String) -> Vec<Action> {
    let request = state.search.set_query(query, state.directory.as_ref());
    if state.search.query().trim().is_empty() {
        state.detail.back();
    }
    request.map(Action::Fetch).into_iter().collect()
}

fn select(state: &mut AppState, id: &str) -> (bool, Vec<Action>) {
    let outcome = state
        .detail
        .toggle(id, &state.search.session().results, state.directory.as_ref());

    match outcome {
        SelectOutcome::Ignored => (false, vec![]),
        SelectOutcome::Cleared => (true, vec![]),
        SelectOutcome::Selected(request) => {
            state.focus = Focus::Detail;
            (true, request.map(Action::Fetch).into_iter().collect())
        }
    }
}

/// Routes a completed request to the store that issued it.
fn apply_response(state: &mut AppState, response: &FetchResponse) -> bool {
    tracing::debug!(
        kind = %response.context.kind,
        generation = response.context.generation.value(),
        status = response.status,
        body_len = response.body.len(),
        "fetch completed"
    );

    match response.context.kind {
        FetchKind::Search => {
            if !state.search.apply(response) {
                return false;
            }
            if !state.search.session().results.is_empty() {
                state.detail.retain_in(&state.search.session().results);
            }
            true
        }
        FetchKind::Detail => {
            if !state.detail.apply(response) {
                return false;
            }
            if let Some(detail) = state.detail.displayed() {
                let previous = state.watched.get(&detail.id).map(|entry| entry.user_rating);
                state.detail.prefill_rating(previous);
            }
            true
        }
    }
}
