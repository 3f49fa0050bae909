//! Composable UI component renderers.
//!
//! Each component draws one region of the screen at an explicit position and
//! pads what it prints, so a full redraw never leaves stale characters.
//!
//! # Components
//!
//! - [`header`]: Logo line
//! - [`search`]: Query box with the results count
//! - [`results`]: Search results list
//! - [`detail`]: Selected movie card with the rating bar
//! - [`watched`]: Watched summary and list
//! - [`message`]: Centered hint, loading and error lines
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Results title] │ [Detail / Watched title]
//! [Results body]  │ [Detail / Watched body]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod footer;
mod header;
mod message;
mod results;
mod search;
mod watched;

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{RightPane, UIViewModel};

use detail::render_detail_body;
use footer::render_footer;
use header::render_header;
use results::render_results_body;
use search::render_search_bar;
use watched::render_watched_body;

/// Rectangular screen area for a pane body, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: usize,
    pub col: usize,
    pub width: usize,
    pub rows: usize,
}

/// Blanks the rows of `region` from `from` (relative) to its bottom.
fn clear_rows(region: Region, from: usize) {
    for offset in from..region.rows {
        position_cursor(region.top + offset, region.col);
        print!("{}", " ".repeat(region.width));
    }
}

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a pane title such as `─ Results [-] ───`, in the focus color when
/// the pane is focused.
fn render_pane_title(row: usize, col: usize, width: usize, title: &str, focused: bool, theme: &Theme) {
    let label = format!("─ {title} ");
    let label_len = display_width(&label).min(width);

    position_cursor(row, col);
    print!("{}", Theme::fg(theme.border_for(focused)));
    if focused {
        print!("{}", Theme::bold());
    }
    print!("{}", label.chars().take(width).collect::<String>());
    print!("{}", "─".repeat(width.saturating_sub(label_len)));
    print!("{}", Theme::reset());
}

fn collapse_marker(expanded: bool) -> &'static str {
    if expanded {
        "[-]"
    } else {
        "[+]"
    }
}

/// Renders the two-pane layout for a view model.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    let left_width = vm.left_width;
    let right_col = left_width + 2;
    let right_width = cols.saturating_sub(left_width + 1);

    render_pane_title(
        current_row,
        1,
        left_width,
        &format!("Results {}", collapse_marker(vm.results.expanded)),
        vm.results.focused,
        theme,
    );
    let (right_title, right_focused) = match &vm.right {
        RightPane::Detail(pane) => ("Movie".to_string(), pane.focused),
        RightPane::Watched(pane) => (format!("Watched {}", collapse_marker(pane.expanded)), pane.focused),
    };
    render_pane_title(current_row, right_col, right_width, &right_title, right_focused, theme);
    position_cursor(current_row, left_width + 1);
    print!("{}┬{}", Theme::fg(&theme.colors.border), Theme::reset());
    current_row += 1;

    let left = Region { top: current_row, col: 1, width: left_width, rows: vm.body_rows };
    let right = Region { top: current_row, col: right_col, width: right_width, rows: vm.body_rows };

    render_results_body(left, &vm.results.body, theme);

    match &vm.right {
        RightPane::Detail(pane) => render_detail_body(right, &pane.body, theme),
        RightPane::Watched(pane) => render_watched_body(right, pane, theme),
    }

    for offset in 0..vm.body_rows {
        position_cursor(current_row + offset, left_width + 1);
        print!("{}│{}", Theme::fg(&theme.colors.border), Theme::reset());
    }

    let footer_start = rows;
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
