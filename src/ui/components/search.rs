//! Search bar component renderer.
//!
//! A 3-line bordered box holding the query, with the results count
//! right-aligned inside it. The border takes the focus color while typing.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search input box at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌────────────────────────────────────┐ [margin]
/// [margin] │ Search: inception▏ Found 2 results │ [margin]
/// [margin] └────────────────────────────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = theme.border_for(search.focused);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let caret = if search.focused { "▏" } else { "" };
    let summary = format!("{} ", search.results_summary);
    let summary_len = display_width(&summary);
    let query_width = inner_width.saturating_sub(summary_len);
    let search_text = truncate(&format!(" Search: {}{caret}", search.query), query_width);
    let padding = inner_width.saturating_sub(display_width(&search_text) + summary_len);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", truncate(&summary, inner_width));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
