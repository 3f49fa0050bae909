//! Filesystem locations inside the Zellij plugin sandbox.
//!
//! Plugins see the host filesystem mounted under `/host`; everything here
//! translates between that view and the paths a user writes in their config.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
