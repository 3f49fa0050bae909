//! Aggregate statistics over the watched collection.

use super::movie::WatchedEntry;

/// Summary numbers shown above the watched list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchedStats {
    pub count: usize,
    pub average_imdb_rating: f64,
    pub average_user_rating: f64,
    pub average_runtime: f64,
}

impl WatchedStats {
    /// Computes count and averages for a slice of watched entries.
    ///
    /// Each average is taken independently over all entries; an empty slice
    /// yields zeros everywhere.
    #[must_use]
    pub fn from_entries(entries: &[WatchedEntry]) -> Self {
        Self {
            count: entries.len(),
            average_imdb_rating: average(entries.iter().map(|e| e.imdb_rating)),
            average_user_rating: average(entries.iter().map(|e| f64::from(e.user_rating.value()))),
            average_runtime: average(entries.iter().map(|e| e.runtime_minutes)),
        }
    }
}

/// Arithmetic mean of a sequence, `0.0` when the sequence is empty.
///
/// Uses a running mean so no intermediate sum is ever formed.
///
/// # Example
///
/// ```
/// use popcorn::domain::stats::average;
///
/// assert_eq!(average(std::iter::empty()), 0.0);
/// assert_eq!(average([8.0, 9.0]), 8.5);
/// ```
pub fn average<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut mean = 0.0;
    let mut n = 0.0;
    for value in values {
        n += 1.0;
        mean += (value - mean) / n;
    }
    mean
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::UserRating;

    fn entry(id: &str, imdb: f64, user: u8, runtime: f64) -> WatchedEntry {
        WatchedEntry {
            id: id.to_string(),
            title: id.to_string(),
            year: "2000".to_string(),
            poster_url: String::new(),
            runtime_minutes: runtime,
            imdb_rating: imdb,
            user_rating: UserRating::new(user).unwrap(),
        }
    }

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(average(Vec::<f64>::new()), 0.0);
        assert!(!average(Vec::<f64>::new()).is_nan());
    }

    #[test]
    fn average_of_single_value_is_that_value() {
        assert_eq!(average([8.8]), 8.8);
    }

    #[test]
    fn average_of_two_values_is_midpoint() {
        assert!((average([148.0, 116.0]) - 132.0).abs() < 1e-9);
    }

    #[test]
    fn stats_average_each_field_independently() {
        let entries = vec![entry("tt1375666", 8.8, 10, 148.0), entry("tt0088763", 8.5, 9, 116.0)];
        let stats = WatchedStats::from_entries(&entries);

        assert_eq!(stats.count, 2);
        assert!((stats.average_imdb_rating - 8.65).abs() < 1e-9);
        assert!((stats.average_user_rating - 9.5).abs() < 1e-9);
        assert!((stats.average_runtime - 132.0).abs() < 1e-9);
    }

    #[test]
    fn stats_of_empty_collection_are_zero() {
        assert_eq!(WatchedStats::from_entries(&[]), WatchedStats::default());
    }
}
