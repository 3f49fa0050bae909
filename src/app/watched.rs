//! The user's watched collection.

use crate::domain::{MovieDetail, UserRating, WatchedEntry, WatchedStats};

/// Watched entries in insertion order, unique by id.
#[derive(Debug, Clone, Default)]
pub struct WatchedList {
    entries: Vec<WatchedEntry>,
    cursor: usize,
}

impl WatchedList {
    #[must_use]
    pub fn entries(&self) -> &[WatchedEntry] {
        &self.entries
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&WatchedEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    #[must_use]
    pub fn stats(&self) -> WatchedStats {
        WatchedStats::from_entries(&self.entries)
    }

    /// Records `detail` with `rating`, replacing an existing entry for the
    /// same id in place.
    pub fn upsert(&mut self, detail: &MovieDetail, rating: UserRating) {
        let entry = WatchedEntry::from_detail(detail, rating);
        if let Some(existing) = self.entries.iter_mut().find(|e| e.id == entry.id) {
            tracing::debug!(movie_id = %entry.id, rating = %rating, "watched entry updated");
            *existing = entry;
        } else {
            tracing::debug!(movie_id = %entry.id, rating = %rating, "watched entry added");
            self.entries.push(entry);
        }
    }

    /// Removes the entry with `id`; a no-op when absent.
    pub fn remove(&mut self, id: &str) -> Option<WatchedEntry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        let removed = self.entries.remove(index);
        tracing::debug!(movie_id = %id, remaining = self.entries.len(), "watched entry removed");
        if self.cursor >= self.entries.len() {
            self.cursor = self.entries.len().saturating_sub(1);
        }
        Some(removed)
    }

    /// Entry under the cursor.
    #[must_use]
    pub fn highlighted(&self) -> Option<&WatchedEntry> {
        self.entries.get(self.cursor)
    }

    pub fn cursor_down(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + 1) % self.entries.len();
        }
    }

    pub fn cursor_up(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(self.entries.len() - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(id: &str, runtime: u32) -> MovieDetail {
        MovieDetail {
            id: id.to_string(),
            title: id.to_string(),
            runtime_minutes: Some(runtime),
            imdb_rating: Some(8.0),
            ..MovieDetail::default()
        }
    }

    fn rating(value: u8) -> UserRating {
        UserRating::new(value).unwrap()
    }

    #[test]
    fn add_then_remove_restores_collection() {
        let mut list = WatchedList::default();
        list.upsert(&detail("tt0088763", 116), rating(9));
        let before = list.entries().to_vec();

        list.upsert(&detail("tt1375666", 148), rating(10));
        assert_eq!(list.entries().len(), 2);
        assert!(list.remove("tt1375666").is_some());
        assert_eq!(list.entries(), before.as_slice());
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut list = WatchedList::default();
        list.upsert(&detail("tt1375666", 148), rating(6));
        list.upsert(&detail("tt0088763", 116), rating(9));
        list.upsert(&detail("tt1375666", 148), rating(10));

        let ids: Vec<&str> = list.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["tt1375666", "tt0088763"]);
        assert_eq!(list.get("tt1375666").map(|e| e.user_rating.value()), Some(10));
    }

    #[test]
    fn removing_absent_id_is_noop() {
        let mut list = WatchedList::default();
        list.upsert(&detail("tt1375666", 148), rating(6));
        assert!(list.remove("tt0000000").is_none());
        assert_eq!(list.entries().len(), 1);
    }

    #[test]
    fn cursor_stays_in_bounds_after_removal() {
        let mut list = WatchedList::default();
        list.upsert(&detail("a", 1), rating(1));
        list.upsert(&detail("b", 1), rating(1));
        list.cursor_down();
        assert_eq!(list.highlighted().map(|e| e.id.as_str()), Some("b"));

        list.remove("b");
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.highlighted().map(|e| e.id.as_str()), Some("a"));
    }

    #[test]
    fn stats_follow_the_collection() {
        let mut list = WatchedList::default();
        list.upsert(&detail("tt1375666", 148), rating(10));
        list.upsert(&detail("tt0088763", 116), rating(9));
        let stats = list.stats();
        assert_eq!(stats.count, 2);
        assert!((stats.average_runtime - 132.0).abs() < 1e-9);
    }
}
