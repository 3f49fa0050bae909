//! Request construction for the OMDb movie directory.
//!
//! [`MovieDirectory`] holds the injected API key and base URL and turns
//! queries and ids into tagged [`FetchRequest`]s. It never performs I/O:
//! the plugin runtime issues the request through Zellij's `web_request` and
//! feeds the result back as an event.

use super::request::{FetchKind, FetchRequest, Generation, RequestContext};
use crate::domain::error::{PopcornError, Result};

/// Default OMDb endpoint used when no `api_url` is configured.
pub const DEFAULT_API_URL: &str = "https://www.omdbapi.com/";

/// Connection settings for the movie directory.
///
/// # Example
///
/// ```
/// use popcorn::api::MovieDirectory;
/// use popcorn::api::request::Generation;
///
/// let directory = MovieDirectory::new("k3y", "https://www.omdbapi.com/")?;
/// let request = directory.search_request("star wars", Generation::new(1));
/// assert_eq!(request.url, "https://www.omdbapi.com/?apikey=k3y&s=star%20wars");
/// # Ok::<(), popcorn::PopcornError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDirectory {
    api_key: String,
    base_url: String,
}

impl MovieDirectory {
    /// Creates a directory handle.
    ///
    /// # Errors
    ///
    /// Returns [`PopcornError::Config`] when the key or base URL is blank.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into().trim().to_string();
        let base_url = base_url.into().trim().to_string();

        if api_key.is_empty() {
            return Err(PopcornError::Config(
                "no OMDb api_key configured".to_string(),
            ));
        }
        if base_url.is_empty() {
            return Err(PopcornError::Config("api_url must not be empty".to_string()));
        }

        Ok(Self { api_key, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds a title search for `query`.
    #[must_use]
    pub fn search_request(&self, query: &str, generation: Generation) -> FetchRequest {
        FetchRequest {
            url: format!("{}&s={}", self.endpoint(), urlencoding::encode(query)),
            context: RequestContext::new(FetchKind::Search, generation),
        }
    }

    /// Builds an id lookup with the short plot.
    #[must_use]
    pub fn detail_request(&self, id: &str, generation: Generation) -> FetchRequest {
        FetchRequest {
            url: format!("{}&i={}&plot=short", self.endpoint(), urlencoding::encode(id)),
            context: RequestContext::new(FetchKind::Detail, generation),
        }
    }

    fn endpoint(&self) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}apikey={}",
            self.base_url,
            urlencoding::encode(&self.api_key)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> MovieDirectory {
        MovieDirectory::new("abc123", DEFAULT_API_URL).unwrap()
    }

    #[test]
    fn blank_key_is_a_config_error() {
        assert!(matches!(
            MovieDirectory::new("   ", DEFAULT_API_URL),
            Err(PopcornError::Config(_))
        ));
    }

    #[test]
    fn search_query_is_url_encoded() {
        let request = directory().search_request("amélie & co", Generation::new(3));
        assert_eq!(
            request.url,
            "https://www.omdbapi.com/?apikey=abc123&s=am%C3%A9lie%20%26%20co"
        );
        assert_eq!(request.context.kind, FetchKind::Search);
        assert_eq!(request.context.generation, Generation::new(3));
    }

    #[test]
    fn detail_request_asks_for_short_plot() {
        let request = directory().detail_request("tt1375666", Generation::new(1));
        assert_eq!(
            request.url,
            "https://www.omdbapi.com/?apikey=abc123&i=tt1375666&plot=short"
        );
        assert_eq!(request.context.kind, FetchKind::Detail);
    }

    #[test]
    fn base_url_with_existing_query_is_extended() {
        let directory = MovieDirectory::new("k", "http://localhost:8080/omdb?type=movie").unwrap();
        let request = directory.search_request("heat", Generation::new(1));
        assert_eq!(request.url, "http://localhost:8080/omdb?type=movie&apikey=k&s=heat");
    }
}
