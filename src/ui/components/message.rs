//! Centered single-line messages inside a pane (hints, loading, errors).

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;

/// Prints `message` horizontally centered in the region `[col, col + width)`.
pub fn render_message(row: usize, col: usize, width: usize, message: &str, color: &str) {
    let text = truncate(message, width);
    let len = display_width(&text);
    let padding = width.saturating_sub(len) / 2;

    position_cursor(row, col);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(width.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
