//! Query-driven search sessions.
//!
//! Every change to the query replaces the [`SearchSession`] wholesale. A
//! non-empty query puts the new session in [`SearchStatus::Loading`] with a
//! fresh generation; only the response carrying that generation may complete
//! it. Responses for older generations, or arriving after the query was
//! cleared, are dropped.

use crate::api::{decode_search, FetchKind, FetchRequest, FetchResponse, Generation, GenerationCounter, MovieDirectory, SearchOutcome};
use crate::domain::{MovieSummary, PopcornError};

/// Shown when the directory has no match for the query.
pub const NO_MATCH_MESSAGE: &str = "No such movie";
/// Shown for transport failures and undecodable bodies.
pub const FETCH_ERROR_MESSAGE: &str = "There was an error fetching movies";
/// Shown when searching without an API key.
pub const MISSING_KEY_MESSAGE: &str = "Set api_key in the plugin configuration to search";

/// Lifecycle of one search session.
///
/// Loading and error are mutually exclusive by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// Empty query, nothing requested.
    #[default]
    Idle,
    /// Waiting for the response with this generation.
    Loading(Generation),
    /// Results available.
    Loaded,
    /// The directory found nothing.
    NoMatch,
    /// The request failed; carries the user-facing message.
    Failed(String),
}

/// Results and status for the current query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSession {
    pub query: String,
    pub results: Vec<MovieSummary>,
    pub status: SearchStatus,
}

impl SearchSession {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, SearchStatus::Loading(_))
    }

    /// User-facing error text, if the session ended in one.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            SearchStatus::NoMatch => Some(NO_MATCH_MESSAGE),
            SearchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Owns the current session, its generation sequence and the results cursor.
#[derive(Debug, Clone, Default)]
pub struct SearchStore {
    session: SearchSession,
    generations: GenerationCounter,
    cursor: usize,
}

impl SearchStore {
    #[must_use]
    pub const fn session(&self) -> &SearchSession {
        &self.session
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.session.query
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Movie under the results cursor.
    #[must_use]
    pub fn highlighted(&self) -> Option<&MovieSummary> {
        self.session.results.get(self.cursor)
    }

    /// Replaces the query and starts a new session.
    ///
    /// Returns the request to issue, or `None` when the trimmed query is empty
    /// or no directory is configured.
    pub fn set_query(&mut self, query: String, directory: Option<&MovieDirectory>) -> Option<FetchRequest> {
        let trimmed = query.trim().to_string();
        self.cursor = 0;

        if trimmed.is_empty() {
            tracing::debug!("query cleared, search idle");
            self.session = SearchSession { query, ..SearchSession::default() };
            return None;
        }

        let Some(directory) = directory else {
            tracing::warn!("search requested without an api key");
            self.session = SearchSession {
                query,
                results: vec![],
                status: SearchStatus::Failed(MISSING_KEY_MESSAGE.to_string()),
            };
            return None;
        };

        let generation = self.generations.advance();
        tracing::debug!(query = %trimmed, generation = generation.value(), "search started");
        self.session = SearchSession {
            query,
            results: vec![],
            status: SearchStatus::Loading(generation),
        };
        Some(directory.search_request(&trimmed, generation))
    }

    /// Completes the pending session with `response`.
    ///
    /// Returns `false` when the response was stale and ignored.
    pub fn apply(&mut self, response: &FetchResponse) -> bool {
        let context = response.context;
        if context.kind != FetchKind::Search
            || self.session.status != SearchStatus::Loading(context.generation)
        {
            tracing::debug!(generation = context.generation.value(), "stale search response dropped");
            return false;
        }

        let outcome = if response.is_success() {
            decode_search(&response.body)
        } else {
            Err(PopcornError::Http { status: response.status })
        };

        match outcome {
            Ok(SearchOutcome::Found(results)) => {
                tracing::debug!(result_count = results.len(), "search loaded");
                self.session.results = results;
                self.session.status = SearchStatus::Loaded;
            }
            Ok(SearchOutcome::NoMatch(reason)) => {
                tracing::debug!(reason = %reason, "search found nothing");
                self.session.results.clear();
                self.session.status = SearchStatus::NoMatch;
            }
            Err(e) => {
                tracing::warn!(error = %e, "search request failed");
                self.session.results.clear();
                self.session.status = SearchStatus::Failed(FETCH_ERROR_MESSAGE.to_string());
            }
        }
        self.cursor = 0;
        true
    }

    pub fn cursor_down(&mut self) {
        let len = self.session.results.len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_up(&mut self) {
        let len = self.session.results.len();
        if len > 0 {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(len - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RequestContext;

    fn directory() -> MovieDirectory {
        MovieDirectory::new("key", "https://www.omdbapi.com/").unwrap()
    }

    fn response(request: &FetchRequest, body: &str) -> FetchResponse {
        FetchResponse { context: request.context, status: 200, body: body.as_bytes().to_vec() }
    }

    const TWO_MATCHES: &str = r#"{"Search":[
        {"Title":"Inception","Year":"2010","imdbID":"tt1375666","Poster":"N/A"},
        {"Title":"Inception: Jump","Year":"2010","imdbID":"tt5295990","Poster":"N/A"}
    ],"Response":"True"}"#;

    #[test]
    fn blank_query_emits_no_request() {
        let mut store = SearchStore::default();
        assert!(store.set_query("   ".to_string(), Some(&directory())).is_none());
        assert_eq!(store.session().status, SearchStatus::Idle);
        assert!(store.session().results.is_empty());
    }

    #[test]
    fn matches_are_stored_in_server_order() {
        let mut store = SearchStore::default();
        let request = store.set_query("inception".to_string(), Some(&directory())).unwrap();
        assert!(store.session().is_loading());

        assert!(store.apply(&response(&request, TWO_MATCHES)));
        let ids: Vec<&str> = store.session().results.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["tt1375666", "tt5295990"]);
        assert_eq!(store.session().status, SearchStatus::Loaded);
        assert_eq!(store.session().error_message(), None);
    }

    #[test]
    fn older_response_cannot_overwrite_newer_query() {
        let mut store = SearchStore::default();
        let first = store.set_query("incep".to_string(), Some(&directory())).unwrap();
        let second = store.set_query("inception".to_string(), Some(&directory())).unwrap();

        assert!(!store.apply(&response(&first, TWO_MATCHES)));
        assert!(store.session().is_loading());

        assert!(store.apply(&response(&second, r#"{"Response":"False","Error":"Movie not found!"}"#)));
        assert_eq!(store.session().status, SearchStatus::NoMatch);
    }

    #[test]
    fn response_after_clearing_is_ignored() {
        let mut store = SearchStore::default();
        let request = store.set_query("heat".to_string(), Some(&directory())).unwrap();
        store.set_query(String::new(), Some(&directory()));

        assert!(!store.apply(&response(&request, TWO_MATCHES)));
        assert_eq!(store.session().status, SearchStatus::Idle);
        assert!(store.session().results.is_empty());
    }

    #[test]
    fn unknown_title_reports_no_such_movie() {
        let mut store = SearchStore::default();
        let request = store.set_query("zzzznotamovie".to_string(), Some(&directory())).unwrap();
        store.apply(&response(&request, r#"{"Response":"False","Error":"Movie not found!"}"#));

        assert!(store.session().results.is_empty());
        assert!(!store.session().is_loading());
        assert_eq!(store.session().error_message(), Some(NO_MATCH_MESSAGE));
    }

    #[test]
    fn http_failure_and_garbage_report_generic_error() {
        let mut store = SearchStore::default();
        let request = store.set_query("heat".to_string(), Some(&directory())).unwrap();
        store.apply(&FetchResponse { context: request.context, status: 503, body: vec![] });
        assert_eq!(store.session().error_message(), Some(FETCH_ERROR_MESSAGE));

        let request = store.set_query("heat 2".to_string(), Some(&directory())).unwrap();
        store.apply(&response(&request, "not json"));
        assert_eq!(store.session().error_message(), Some(FETCH_ERROR_MESSAGE));
    }

    #[test]
    fn missing_directory_fails_without_request() {
        let mut store = SearchStore::default();
        assert!(store.set_query("heat".to_string(), None).is_none());
        assert_eq!(store.session().error_message(), Some(MISSING_KEY_MESSAGE));
    }

    #[test]
    fn detail_response_is_not_applied_to_search() {
        let mut store = SearchStore::default();
        let request = store.set_query("heat".to_string(), Some(&directory())).unwrap();
        let foreign = FetchResponse {
            context: RequestContext::new(FetchKind::Detail, request.context.generation),
            status: 200,
            body: TWO_MATCHES.as_bytes().to_vec(),
        };
        assert!(!store.apply(&foreign));
    }

    #[test]
    fn cursor_wraps_over_results() {
        let mut store = SearchStore::default();
        let request = store.set_query("inception".to_string(), Some(&directory())).unwrap();
        store.apply(&response(&request, TWO_MATCHES));

        store.cursor_up();
        assert_eq!(store.cursor(), 1);
        store.cursor_down();
        assert_eq!(store.cursor(), 0);
        assert_eq!(store.highlighted().map(|m| m.id.as_str()), Some("tt1375666"));
    }
}
