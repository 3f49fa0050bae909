//! Domain layer for the Popcorn plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs and of the movie directory's wire format.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`movie`]: Movie summaries, details and watched entries
//! - [`stats`]: Aggregate statistics over the watched collection

pub mod error;
pub mod movie;
pub mod stats;

pub use error::{PopcornError, Result};
pub use movie::{MovieDetail, MovieSummary, UserRating, WatchedEntry, MAX_RATING};
pub use stats::WatchedStats;
