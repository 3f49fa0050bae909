//! OMDb wire format and response decoding.
//!
//! The directory answers every request with HTTP 200 and signals failure in
//! the body through `"Response": "False"`. Numeric fields arrive as text
//! (`"148 min"`, `"8.8"`) and missing values as `"N/A"`.

use crate::domain::error::{PopcornError, Result};
use crate::domain::{MovieDetail, MovieSummary};
use serde::Deserialize;

/// Placeholder OMDb uses for any missing field.
const NOT_AVAILABLE: &str = "N/A";

/// Body of a search request.
#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<SearchItem>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
}

/// Body of an id lookup.
#[derive(Debug, Deserialize)]
struct DetailBody {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year")]
    year: Option<String>,
    #[serde(rename = "Poster")]
    poster: Option<String>,
    #[serde(rename = "Runtime")]
    runtime: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    #[serde(rename = "Plot")]
    plot: Option<String>,
    #[serde(rename = "Released")]
    released: Option<String>,
    #[serde(rename = "Actors")]
    actors: Option<String>,
    #[serde(rename = "Director")]
    director: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
}

/// What a search request produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// At least one match, in the order the directory returned them.
    Found(Vec<MovieSummary>),
    /// The directory reported no match; carries its message.
    NoMatch(String),
}

/// Decodes a search response body.
///
/// # Errors
///
/// Returns [`PopcornError::Decode`] when the body is not the expected JSON.
pub fn decode_search(body: &[u8]) -> Result<SearchOutcome> {
    let parsed: SearchBody = serde_json::from_slice(body)?;

    if parsed.response != "True" || parsed.search.is_empty() {
        let message = parsed.error.unwrap_or_else(|| "Movie not found!".to_string());
        return Ok(SearchOutcome::NoMatch(message));
    }

    let movies = parsed
        .search
        .into_iter()
        .map(|item| MovieSummary {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster_url: present(Some(item.poster)).unwrap_or_default(),
        })
        .collect();

    Ok(SearchOutcome::Found(movies))
}

/// Decodes an id lookup response body.
///
/// `requested_id` fills the record id when the directory omits `imdbID`.
///
/// # Errors
///
/// - [`PopcornError::Decode`] when the body is not the expected JSON
/// - [`PopcornError::Api`] when the directory reports a failure
pub fn decode_detail(body: &[u8], requested_id: &str) -> Result<MovieDetail> {
    let parsed: DetailBody = serde_json::from_slice(body)?;

    if parsed.response != "True" {
        return Err(PopcornError::Api(
            parsed.error.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }

    let id = if parsed.imdb_id.is_empty() {
        requested_id.to_string()
    } else {
        parsed.imdb_id
    };

    Ok(MovieDetail {
        id,
        title: parsed.title,
        year: present(parsed.year),
        poster_url: present(parsed.poster),
        runtime_minutes: present(parsed.runtime).as_deref().and_then(parse_runtime),
        imdb_rating: present(parsed.imdb_rating).as_deref().and_then(parse_rating),
        plot: present(parsed.plot),
        released: present(parsed.released),
        actors: present(parsed.actors),
        director: present(parsed.director),
        genre: present(parsed.genre),
    })
}

/// Drops empty and `"N/A"` values.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && v != NOT_AVAILABLE
    })
}

/// Parses runtimes such as `"148 min"`.
fn parse_runtime(text: &str) -> Option<u32> {
    text.split_whitespace().next()?.parse().ok()
}

/// Parses ratings such as `"8.8"`; negative values are rejected.
fn parse_rating(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|r| r.is_finite() && *r >= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_keeps_server_order() {
        let body = br#"{
            "Search": [
                {"Title": "Inception", "Year": "2010", "imdbID": "tt1375666", "Type": "movie", "Poster": "https://img/inception.jpg"},
                {"Title": "Inception: The Cobol Job", "Year": "2010", "imdbID": "tt5295894", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "2",
            "Response": "True"
        }"#;

        let SearchOutcome::Found(movies) = decode_search(body).unwrap() else {
            panic!("expected matches");
        };
        let ids: Vec<&str> = movies.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["tt1375666", "tt5295894"]);
        assert_eq!(movies[0].poster_url, "https://img/inception.jpg");
        assert_eq!(movies[1].poster_url, "");
    }

    #[test]
    fn search_false_response_is_no_match() {
        let body = br#"{"Response":"False","Error":"Movie not found!"}"#;
        assert_eq!(
            decode_search(body).unwrap(),
            SearchOutcome::NoMatch("Movie not found!".to_string())
        );
    }

    #[test]
    fn search_garbage_is_decode_error() {
        assert!(matches!(decode_search(b"<html>"), Err(PopcornError::Decode(_))));
    }

    #[test]
    fn detail_parses_text_numbers_and_drops_missing_fields() {
        let body = br#"{
            "Title": "Inception", "Year": "2010", "Released": "16 Jul 2010",
            "Runtime": "148 min", "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan", "Actors": "Leonardo DiCaprio",
            "Plot": "A thief who steals corporate secrets.", "Poster": "N/A",
            "imdbRating": "8.8", "imdbID": "tt1375666", "Response": "True"
        }"#;

        let detail = decode_detail(body, "tt1375666").unwrap();
        assert_eq!(detail.title, "Inception");
        assert_eq!(detail.runtime_minutes, Some(148));
        assert_eq!(detail.imdb_rating, Some(8.8));
        assert_eq!(detail.poster_url, None);
        assert_eq!(detail.director.as_deref(), Some("Christopher Nolan"));
    }

    #[test]
    fn detail_with_unavailable_numbers_leaves_them_empty() {
        let body = br#"{"Title":"Short","Runtime":"N/A","imdbRating":"N/A","Response":"True"}"#;
        let detail = decode_detail(body, "tt0000002").unwrap();
        assert_eq!(detail.id, "tt0000002");
        assert_eq!(detail.runtime_minutes, None);
        assert_eq!(detail.imdb_rating, None);
    }

    #[test]
    fn detail_false_response_is_api_error() {
        let body = br#"{"Response":"False","Error":"Incorrect IMDb ID."}"#;
        match decode_detail(body, "tt") {
            Err(PopcornError::Api(message)) => assert_eq!(message, "Incorrect IMDb ID."),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
