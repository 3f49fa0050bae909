//! Focus and pane expansion state.
//!
//! The screen is split into a results pane on the left and a right pane that
//! shows either the selected movie's detail or the watched collection. Focus
//! decides which keybindings apply.
//!
//! # Example
//!
//! ```rust
//! use popcorn::app::modes::Focus;
//!
//! assert_eq!(Focus::Search.next(false), Focus::Results);
//! assert_eq!(Focus::Results.next(true), Focus::Detail);
//! assert_eq!(Focus::Results.next(false), Focus::Watched);
//! ```

/// Region receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Typing into the query box.
    #[default]
    Search,

    /// Navigating the search results.
    ///
    /// Accepts j/k for movement, enter to toggle the selection, c to collapse.
    Results,

    /// Rating and adding the selected movie.
    Detail,

    /// Navigating and pruning the watched collection.
    Watched,
}

impl Focus {
    /// The right-hand pane for the current selection state.
    #[must_use]
    pub const fn right_pane(has_selection: bool) -> Self {
        if has_selection {
            Self::Detail
        } else {
            Self::Watched
        }
    }

    /// Next focus in tab order: search, results, right pane.
    #[must_use]
    pub const fn next(self, has_selection: bool) -> Self {
        match self {
            Self::Search => Self::Results,
            Self::Results => Self::right_pane(has_selection),
            Self::Detail | Self::Watched => Self::Search,
        }
    }

    /// Re-targets a right-pane focus that no longer matches what is shown.
    #[must_use]
    pub const fn normalized(self, has_selection: bool) -> Self {
        match self {
            Self::Detail | Self::Watched => Self::right_pane(has_selection),
            other => other,
        }
    }
}

/// Expanded/collapsed flags for the two list panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneToggles {
    pub results_expanded: bool,
    pub watched_expanded: bool,
}

impl Default for PaneToggles {
    fn default() -> Self {
        Self { results_expanded: true, watched_expanded: true }
    }
}

impl PaneToggles {
    /// Flips the pane owning `focus`. Returns `false` when `focus` has no
    /// collapsible pane.
    pub fn toggle(&mut self, focus: Focus) -> bool {
        match focus {
            Focus::Results => {
                self.results_expanded = !self.results_expanded;
                true
            }
            Focus::Watched => {
                self.watched_expanded = !self.watched_expanded;
                true
            }
            Focus::Search | Focus::Detail => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panes_start_expanded_and_toggle_independently() {
        let mut panes = PaneToggles::default();
        assert!(panes.results_expanded && panes.watched_expanded);

        assert!(panes.toggle(Focus::Results));
        assert!(!panes.results_expanded);
        assert!(panes.watched_expanded);

        assert!(panes.toggle(Focus::Results));
        assert!(panes.results_expanded);
    }

    #[test]
    fn detail_has_no_collapsible_pane() {
        let mut panes = PaneToggles::default();
        assert!(!panes.toggle(Focus::Detail));
        assert_eq!(panes, PaneToggles::default());
    }

    #[test]
    fn right_pane_focus_follows_selection() {
        assert_eq!(Focus::Detail.normalized(false), Focus::Watched);
        assert_eq!(Focus::Watched.normalized(true), Focus::Detail);
        assert_eq!(Focus::Results.normalized(true), Focus::Results);
    }
}
