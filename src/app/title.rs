//! Pane title scope for the displayed movie.
//!
//! The handler reconciles the desired title after every event and releases
//! the scope on teardown, so every path away from a loaded detail restores
//! the default title.

use super::actions::Action;

/// Prefix applied to the displayed movie's title.
pub const TITLE_PREFIX: &str = "Movie: ";

#[derive(Debug, Clone)]
pub struct TitleScope {
    default_title: String,
    applied: String,
}

impl TitleScope {
    #[must_use]
    pub fn new(default_title: impl Into<String>) -> Self {
        let default_title = default_title.into();
        Self { applied: default_title.clone(), default_title }
    }

    #[must_use]
    pub fn applied(&self) -> &str {
        &self.applied
    }

    /// Brings the pane title in line with the displayed movie title.
    ///
    /// `movie_title` is `None` when no detail is loaded. Emits an action only
    /// when the title actually changes.
    pub fn reconcile(&mut self, movie_title: Option<&str>) -> Option<Action> {
        let desired = match movie_title {
            Some(title) if !title.trim().is_empty() => format!("{TITLE_PREFIX}{title}"),
            _ => self.default_title.clone(),
        };
        self.apply(desired)
    }

    /// Restores the default title.
    pub fn release(&mut self) -> Option<Action> {
        self.apply(self.default_title.clone())
    }

    fn apply(&mut self, desired: String) -> Option<Action> {
        if desired == self.applied {
            return None;
        }
        tracing::debug!(from = %self.applied, to = %desired, "pane title changed");
        self.applied.clone_from(&desired);
        Some(Action::SetPaneTitle(desired))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acquire_then_release() {
        let mut scope = TitleScope::new("popcorn");
        assert_eq!(
            scope.reconcile(Some("Inception")),
            Some(Action::SetPaneTitle("Movie: Inception".to_string()))
        );
        assert_eq!(scope.reconcile(Some("Inception")), None);
        assert_eq!(scope.release(), Some(Action::SetPaneTitle("popcorn".to_string())));
        assert_eq!(scope.release(), None);
    }

    #[test]
    fn blank_title_keeps_default() {
        let mut scope = TitleScope::new("popcorn");
        assert_eq!(scope.reconcile(Some("  ")), None);
        assert_eq!(scope.applied(), "popcorn");
    }

    #[test]
    fn switching_movies_retitles_directly() {
        let mut scope = TitleScope::new("popcorn");
        scope.reconcile(Some("Inception"));
        assert_eq!(
            scope.reconcile(Some("Interstellar")),
            Some(Action::SetPaneTitle("Movie: Interstellar".to_string()))
        );
        assert_eq!(scope.reconcile(None), Some(Action::SetPaneTitle("popcorn".to_string())));
    }
}
