//! Selection and the detail record fetched for it.
//!
//! Choosing a new movie clears the previous detail synchronously and issues a
//! lookup with the next detail generation. As with searches, a response only
//! lands when its generation is still the pending one.

use crate::api::{decode_detail, FetchKind, FetchRequest, FetchResponse, Generation, GenerationCounter, MovieDirectory};
use crate::domain::{MovieDetail, MovieSummary, PopcornError, Result, UserRating};

/// Shown when a lookup fails for any reason.
pub const DETAIL_ERROR_MESSAGE: &str = "Could not load movie details";

/// State of the detail record for the current selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    /// Nothing selected.
    #[default]
    Idle,
    Loading { id: String, generation: Generation },
    Loaded(MovieDetail),
    Failed { id: String, message: String },
}

/// Result of activating a movie in the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The id was not among the current results.
    Ignored,
    /// The movie was already selected and is now deselected.
    Cleared,
    /// A new movie is selected; carries the lookup to issue, if any.
    Selected(Option<FetchRequest>),
}

/// Selection, detail record and the rating the user is composing.
#[derive(Debug, Clone, Default)]
pub struct DetailStore {
    selected: Option<String>,
    state: DetailState,
    generations: GenerationCounter,
    pending_rating: Option<UserRating>,
}

impl DetailStore {
    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub const fn state(&self) -> &DetailState {
        &self.state
    }

    /// The loaded record, if the lookup has completed successfully.
    #[must_use]
    pub const fn displayed(&self) -> Option<&MovieDetail> {
        match &self.state {
            DetailState::Loaded(detail) => Some(detail),
            _ => None,
        }
    }

    #[must_use]
    pub const fn pending_rating(&self) -> Option<UserRating> {
        self.pending_rating
    }

    /// Selects `id` or, when it is already selected, clears the selection.
    ///
    /// Only ids present in `results` are accepted.
    pub fn toggle(&mut self, id: &str, results: &[MovieSummary], directory: Option<&MovieDirectory>) -> SelectOutcome {
        if !results.iter().any(|movie| movie.id == id) {
            tracing::debug!(movie_id = %id, "selection ignored, id not in results");
            return SelectOutcome::Ignored;
        }

        if self.selected.as_deref() == Some(id) {
            tracing::debug!(movie_id = %id, "selection toggled off");
            self.back();
            return SelectOutcome::Cleared;
        }

        self.selected = Some(id.to_string());
        self.pending_rating = None;

        let Some(directory) = directory else {
            self.state = DetailState::Failed {
                id: id.to_string(),
                message: DETAIL_ERROR_MESSAGE.to_string(),
            };
            return SelectOutcome::Selected(None);
        };

        let generation = self.generations.advance();
        tracing::debug!(movie_id = %id, generation = generation.value(), "detail requested");
        self.state = DetailState::Loading { id: id.to_string(), generation };
        SelectOutcome::Selected(Some(directory.detail_request(id, generation)))
    }

    /// Clears the selection and its detail.
    pub fn back(&mut self) {
        self.selected = None;
        self.state = DetailState::Idle;
        self.pending_rating = None;
    }

    /// Drops the selection when it is no longer among `results`.
    ///
    /// Returns `true` when the selection was cleared.
    pub fn retain_in(&mut self, results: &[MovieSummary]) -> bool {
        match &self.selected {
            Some(id) if !results.iter().any(|movie| &movie.id == id) => {
                tracing::debug!(movie_id = %id, "selection dropped by new results");
                self.back();
                true
            }
            _ => false,
        }
    }

    /// Completes the pending lookup with `response`.
    ///
    /// Returns `false` when the response was stale and ignored.
    pub fn apply(&mut self, response: &FetchResponse) -> bool {
        let context = response.context;
        let id = match &self.state {
            DetailState::Loading { id, generation }
                if context.kind == FetchKind::Detail && *generation == context.generation =>
            {
                id.clone()
            }
            _ => {
                tracing::debug!(generation = context.generation.value(), "stale detail response dropped");
                return false;
            }
        };

        let decoded = if response.is_success() {
            decode_detail(&response.body, &id)
        } else {
            Err(PopcornError::Http { status: response.status })
        };

        self.state = match decoded {
            Ok(detail) => {
                tracing::debug!(movie_id = %id, title = %detail.title, "detail loaded");
                DetailState::Loaded(detail)
            }
            Err(e) => {
                tracing::warn!(movie_id = %id, error = %e, "detail request failed");
                DetailState::Failed { id, message: DETAIL_ERROR_MESSAGE.to_string() }
            }
        };
        true
    }

    /// Pre-fills the pending rating, typically from an existing watched entry.
    pub fn prefill_rating(&mut self, rating: Option<UserRating>) {
        if self.pending_rating.is_none() {
            self.pending_rating = rating;
        }
    }

    /// Sets the pending rating. Every value in `0..=10` is a valid choice.
    ///
    /// # Errors
    ///
    /// Returns [`PopcornError::InvalidRating`] above the maximum.
    pub fn set_rating(&mut self, value: u8) -> Result<()> {
        self.pending_rating = Some(UserRating::new(value)?);
        Ok(())
    }

    pub fn rating_up(&mut self) {
        self.pending_rating = Some(match self.pending_rating {
            Some(rating) => rating.increment(),
            None => UserRating::MIN.increment(),
        });
    }

    /// Steps the pending rating down; stepping below zero leaves the movie
    /// unrated again.
    pub fn rating_down(&mut self) {
        self.pending_rating = self
            .pending_rating
            .filter(|rating| *rating > UserRating::MIN)
            .map(UserRating::decrement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> MovieDirectory {
        MovieDirectory::new("key", "https://www.omdbapi.com/").unwrap()
    }

    fn results() -> Vec<MovieSummary> {
        ["tt1375666", "tt0816692"]
            .into_iter()
            .map(|id| MovieSummary {
                id: id.to_string(),
                title: id.to_string(),
                year: "2010".to_string(),
                poster_url: String::new(),
            })
            .collect()
    }

    fn lookup(store: &mut DetailStore, id: &str) -> FetchRequest {
        match store.toggle(id, &results(), Some(&directory())) {
            SelectOutcome::Selected(Some(request)) => request,
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    const INCEPTION: &str = r#"{"Title":"Inception","Runtime":"148 min","imdbRating":"8.8","imdbID":"tt1375666","Response":"True"}"#;

    #[test]
    fn selecting_twice_clears_selection() {
        let mut store = DetailStore::default();
        lookup(&mut store, "tt1375666");
        assert_eq!(store.selected_id(), Some("tt1375666"));

        assert_eq!(store.toggle("tt1375666", &results(), Some(&directory())), SelectOutcome::Cleared);
        assert_eq!(store.selected_id(), None);
        assert_eq!(store.state(), &DetailState::Idle);
    }

    #[test]
    fn ids_outside_results_are_ignored() {
        let mut store = DetailStore::default();
        assert_eq!(store.toggle("tt9999999", &results(), Some(&directory())), SelectOutcome::Ignored);
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn switching_selection_discards_previous_lookup() {
        let mut store = DetailStore::default();
        let first = lookup(&mut store, "tt1375666");
        let second = lookup(&mut store, "tt0816692");

        let stale = FetchResponse { context: first.context, status: 200, body: INCEPTION.as_bytes().to_vec() };
        assert!(!store.apply(&stale));
        assert!(matches!(store.state(), DetailState::Loading { id, .. } if id == "tt0816692"));

        let fresh = FetchResponse {
            context: second.context,
            status: 200,
            body: br#"{"Title":"Interstellar","Response":"True"}"#.to_vec(),
        };
        assert!(store.apply(&fresh));
        let detail = store.displayed().unwrap();
        assert_eq!(detail.id, "tt0816692");
        assert_eq!(detail.title, "Interstellar");
    }

    #[test]
    fn failed_lookup_sets_error_state() {
        let mut store = DetailStore::default();
        let request = lookup(&mut store, "tt1375666");
        store.apply(&FetchResponse {
            context: request.context,
            status: 200,
            body: br#"{"Response":"False","Error":"Incorrect IMDb ID."}"#.to_vec(),
        });
        assert_eq!(
            store.state(),
            &DetailState::Failed { id: "tt1375666".to_string(), message: DETAIL_ERROR_MESSAGE.to_string() }
        );
    }

    #[test]
    fn response_after_back_is_ignored() {
        let mut store = DetailStore::default();
        let request = lookup(&mut store, "tt1375666");
        store.back();
        let response = FetchResponse { context: request.context, status: 200, body: INCEPTION.as_bytes().to_vec() };
        assert!(!store.apply(&response));
        assert_eq!(store.displayed(), None);
    }

    #[test]
    fn selection_not_in_new_results_is_dropped() {
        let mut store = DetailStore::default();
        lookup(&mut store, "tt1375666");
        assert!(!store.retain_in(&results()));
        assert!(store.retain_in(&results()[1..]));
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn rating_steps_and_digits() {
        let mut store = DetailStore::default();
        store.rating_down();
        assert_eq!(store.pending_rating(), None);
        store.rating_up();
        assert_eq!(store.pending_rating().map(UserRating::value), Some(1));
        store.rating_down();
        assert_eq!(store.pending_rating(), Some(UserRating::MIN));
        store.rating_down();
        assert_eq!(store.pending_rating(), None);

        store.set_rating(10).unwrap();
        store.rating_up();
        assert_eq!(store.pending_rating().map(UserRating::value), Some(10));
        assert!(store.set_rating(11).is_err());
    }

    #[test]
    fn zero_is_a_chosen_rating() {
        let mut store = DetailStore::default();
        store.set_rating(0).unwrap();
        assert_eq!(store.pending_rating(), Some(UserRating::MIN));
    }

    #[test]
    fn prefill_does_not_override_a_chosen_rating() {
        let mut store = DetailStore::default();
        store.set_rating(4).unwrap();
        store.prefill_rating(Some(UserRating::new(9).unwrap()));
        assert_eq!(store.pending_rating().map(UserRating::value), Some(4));
    }
}
