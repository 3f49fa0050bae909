//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process: compute the view model from `AppState`,
//! then hand it to the layout components.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
