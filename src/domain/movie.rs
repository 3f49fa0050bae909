//! Movie records and the user's watched entries.
//!
//! These are the plain domain values that flow between the API layer, the
//! application stores and the view models. They carry no wire-format details:
//! decoding from OMDb JSON lives in [`crate::api::omdb`].

use super::error::{PopcornError, Result};
use std::fmt;

/// Highest rating a user can give a movie.
pub const MAX_RATING: u8 = 10;

/// Minimal movie representation returned by a title search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    /// Stable external identifier (an IMDb id such as `tt1375666`).
    pub id: String,
    pub title: String,
    pub year: String,
    /// Poster image URL, empty when the directory has none.
    pub poster_url: String,
}

/// Full movie representation returned by an id lookup.
///
/// Any field the remote record lacks is `None`; the directory reports missing
/// values as `"N/A"`, which never reaches this type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieDetail {
    pub id: String,
    pub title: String,
    pub year: Option<String>,
    pub poster_url: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub imdb_rating: Option<f64>,
    pub plot: Option<String>,
    pub released: Option<String>,
    pub actors: Option<String>,
    pub director: Option<String>,
    pub genre: Option<String>,
}

/// A rating assigned by the user, always within `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UserRating(u8);

impl UserRating {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(MAX_RATING);

    /// Validates and wraps a rating.
    ///
    /// # Errors
    ///
    /// Returns [`PopcornError::InvalidRating`] when `value` exceeds [`MAX_RATING`].
    pub fn new(value: u8) -> Result<Self> {
        if value > MAX_RATING {
            return Err(PopcornError::InvalidRating(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the rating one step higher, saturating at [`MAX_RATING`].
    #[must_use]
    pub const fn increment(self) -> Self {
        if self.0 >= MAX_RATING {
            self
        } else {
            Self(self.0 + 1)
        }
    }

    /// Returns the rating one step lower, saturating at zero.
    #[must_use]
    pub const fn decrement(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl fmt::Display for UserRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A movie the user has watched, with their own rating attached.
///
/// Runtime and IMDb rating are stored as plain numbers so the aggregate
/// statistics can average them directly. Values the directory did not supply
/// are recorded as `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchedEntry {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster_url: String,
    pub runtime_minutes: f64,
    pub imdb_rating: f64,
    pub user_rating: UserRating,
}

impl WatchedEntry {
    /// Builds an entry from the displayed detail record and the user's rating.
    ///
    /// # Example
    ///
    /// ```
    /// use popcorn::domain::{MovieDetail, UserRating, WatchedEntry};
    ///
    /// let detail = MovieDetail {
    ///     id: "tt1375666".to_string(),
    ///     title: "Inception".to_string(),
    ///     runtime_minutes: Some(148),
    ///     imdb_rating: Some(8.8),
    ///     ..MovieDetail::default()
    /// };
    /// let entry = WatchedEntry::from_detail(&detail, UserRating::new(10)?);
    /// assert_eq!(entry.runtime_minutes, 148.0);
    /// # Ok::<(), popcorn::PopcornError>(())
    /// ```
    #[must_use]
    pub fn from_detail(detail: &MovieDetail, user_rating: UserRating) -> Self {
        Self {
            id: detail.id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone().unwrap_or_default(),
            poster_url: detail.poster_url.clone().unwrap_or_default(),
            runtime_minutes: detail.runtime_minutes.map_or(0.0, f64::from),
            imdb_rating: detail.imdb_rating.unwrap_or(0.0).max(0.0),
            user_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_rejects_values_above_ten() {
        assert!(UserRating::new(10).is_ok());
        assert!(matches!(UserRating::new(11), Err(PopcornError::InvalidRating(11))));
    }

    #[test]
    fn rating_steps_saturate_at_bounds() {
        let top = UserRating::new(10).unwrap();
        assert_eq!(top.increment().value(), 10);
        let bottom = UserRating::new(0).unwrap();
        assert_eq!(bottom.decrement().value(), 0);
        assert_eq!(bottom.increment().value(), 1);
    }

    #[test]
    fn watched_entry_defaults_missing_numbers_to_zero() {
        let detail = MovieDetail {
            id: "tt0000001".to_string(),
            title: "Untimed".to_string(),
            ..MovieDetail::default()
        };
        let entry = WatchedEntry::from_detail(&detail, UserRating::new(7).unwrap());
        assert_eq!(entry.runtime_minutes, 0.0);
        assert_eq!(entry.imdb_rating, 0.0);
        assert_eq!(entry.year, "");
        assert_eq!(entry.user_rating.value(), 7);
    }
}
