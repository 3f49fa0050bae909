//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the domain and
//! API layers. It never talks to Zellij directly: key presses and web request
//! results arrive as [`Event`]s, and side effects leave as [`Action`]s.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Fetch Results ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`keymap`]: Key bindings per focus
//! - [`modes`]: Focus and pane expansion state
//! - [`search`]: Query-driven search sessions
//! - [`detail`]: Selection and the detail record
//! - [`watched`]: The watched collection
//! - [`title`]: Pane title scope
//! - [`state`]: Central state container and view model computation

pub mod actions;
pub mod detail;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod search;
pub mod state;
pub mod title;
pub mod watched;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keymap::map_key;
pub use modes::{Focus, PaneToggles};
pub use state::AppState;
