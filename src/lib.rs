//! Popcorn: a Zellij plugin for finding movies and rating what you watched.
//!
//! Type a title and Popcorn queries the OMDb directory as you go. Pick a
//! result to see its details, give it a rating out of ten and add it to your
//! watched list, which keeps running averages of IMDb rating, your own
//! rating and runtime. While a movie is open the plugin pane is titled after
//! it.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - web_request / rename_plugin_pane / hide_self     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Search, detail and watched stores                │
//! │  - Event handling and action dispatch               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐     ┌───────────────────────┐
//! │ UI Layer (ui/)        │     │ API Layer (api/)      │
//! │ - Rendering           │     │ - OMDb request URLs   │
//! │ - Theming             │     │ - Response decoding   │
//! │ - Components          │     │ - Stale-response tags │
//! └───────────────────────┘     └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Movies, ratings, statistics (domain/)            │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing below the shim calls Zellij. Network traffic is a pair of
//! [`Action::Fetch`] out and [`Event::FetchCompleted`] back, so the whole
//! search/select/rate flow is testable without a host.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/popcorn.wasm" {
//!         api_key "your-omdb-key"
//!         title "popcorn"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use popcorn::{handle_event, initialize, Action, Config, Event};
//!
//! let config = Config {
//!     api_key: Some("k3y".to_string()),
//!     ..Config::default()
//! };
//! let mut state = initialize(&config);
//!
//! let mut fetches = Vec::new();
//! for c in "alien".chars() {
//!     let (_, actions) = handle_event(&mut state, &Event::Char(c))?;
//!     fetches.extend(actions.into_iter().filter(|a| matches!(a, Action::Fetch(_))));
//! }
//! assert_eq!(fetches.len(), 5);
//! # Ok::<(), popcorn::PopcornError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, map_key, Action, AppState, Event, Focus};
pub use domain::{PopcornError, Result};
pub use ui::Theme;

use api::{MovieDirectory, DEFAULT_API_URL};
use std::collections::BTreeMap;

/// Pane title used while no movie is displayed.
pub const DEFAULT_TITLE: &str = "popcorn";

/// Plugin configuration parsed from the layout's plugin block.
///
/// ```kdl
/// plugin location="file:/path/to/popcorn.wasm" {
///     api_key "your-omdb-key"
///     api_url "https://www.omdbapi.com/"
///     title "popcorn"
///     theme "catppuccin-latte"
///     theme_file "~/.config/popcorn/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// OMDb API key. Without one every search reports a configuration error.
    pub api_key: Option<String>,

    /// Directory endpoint. Default: [`DEFAULT_API_URL`]
    pub api_url: String,

    /// Pane title while nothing is displayed. Default: `"popcorn"`
    pub title: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Custom TOML theme; `~` refers to the host home directory.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for traces. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            title: DEFAULT_TITLE.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Blank values count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use popcorn::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_key".to_string(), "k3y".to_string());
    /// map.insert("title".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.api_key.as_deref(), Some("k3y"));
    /// assert_eq!(config.title, "popcorn");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            api_key: get("api_key"),
            api_url: get("api_url").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            title: get("title").unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }
}

/// Builds the initial application state from configuration.
///
/// Problems with the theme or the API key are logged and never fatal: a bad
/// theme falls back to the default and a missing key leaves the plugin
/// usable, with searches reporting the misconfiguration.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing popcorn plugin");

    let directory = match config.api_key.as_deref() {
        Some(key) => MovieDirectory::new(key, config.api_url.as_str())
            .map_err(|e| tracing::warn!(error = %e, "invalid movie directory settings"))
            .ok(),
        None => {
            tracing::warn!("no api_key configured, searches will fail");
            None
        }
    };

    AppState::new(directory, &config.title, load_theme(config))
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        let path = infrastructure::expand_tilde(theme_file);
        return Theme::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |name| {
        Theme::from_name(name).unwrap_or_else(|| {
            tracing::warn!(theme_name = %name, "unknown theme, using default");
            Theme::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn every_option_is_read() {
        let config = Config::from_zellij(&map(&[
            ("api_key", " k3y "),
            ("api_url", "http://localhost:8080/"),
            ("title", "movies"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.api_key.as_deref(), Some("k3y"));
        assert_eq!(config.api_url, "http://localhost:8080/");
        assert_eq!(config.title, "movies");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn missing_key_leaves_directory_unset() {
        let state = initialize(&Config::default());
        assert!(state.directory.is_none());
    }

    #[test]
    fn configured_key_builds_directory() {
        let config = Config {
            api_key: Some("k3y".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(
            state.directory.as_ref().map(MovieDirectory::base_url),
            Some(DEFAULT_API_URL)
        );
    }

    #[test]
    fn named_theme_is_loaded() {
        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&config).name, "catppuccin-frappe");
    }

    #[test]
    fn unreadable_theme_file_falls_back_to_default() {
        let config = Config {
            theme_file: Some("/nonexistent/popcorn-theme.toml".to_string()),
            theme_name: Some("catppuccin-latte".to_string()),
            ..Config::default()
        };
        assert_eq!(load_theme(&config), Theme::default());
    }
}
