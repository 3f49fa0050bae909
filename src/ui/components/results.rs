//! Results pane renderer.
//!
//! Each row shows the title (with query matches highlighted) and the year
//! right-aligned. The row under the cursor uses the selection colors; the
//! movie whose detail is open carries a `▶` marker.

use super::message::render_message;
use super::{clear_rows, Region};
use crate::ui::helpers::{self, display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayItem, ResultsBody};

/// Columns reserved for the selection marker.
const MARKER_WIDTH: usize = 2;

pub fn render_results_body(region: Region, body: &ResultsBody, theme: &Theme) {
    let first_free = match body {
        ResultsBody::Hint(hint) => {
            render_message(region.top, region.col, region.width, hint, &theme.colors.text_dim);
            1
        }
        ResultsBody::Loading => {
            render_message(region.top, region.col, region.width, "Loading…", &theme.colors.message_fg);
            1
        }
        ResultsBody::Error(message) => {
            render_message(region.top, region.col, region.width, message, &theme.colors.error_fg);
            1
        }
        ResultsBody::Collapsed => 0,
        ResultsBody::Items(items) => {
            for (offset, item) in items.iter().take(region.rows).enumerate() {
                render_result_row(region.top + offset, region.col, region.width, item, theme);
            }
            items.len().min(region.rows)
        }
    };

    clear_rows(region, first_free.min(region.rows));
}

fn render_result_row(row: usize, col: usize, width: usize, item: &DisplayItem, theme: &Theme) {
    position_cursor(row, col);

    let base = |theme: &Theme| {
        if item.is_cursor {
            format!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg))
        } else {
            Theme::fg(&theme.colors.text_normal)
        }
    };

    print!("{}", base(theme));
    if item.is_selected {
        if !item.is_cursor {
            print!("{}", Theme::fg(&theme.colors.rating_fg));
        }
        print!("▶ ");
        print!("{}", base(theme));
    } else {
        print!("{}", " ".repeat(MARKER_WIDTH));
    }

    let year = format!(" {}", item.year);
    let year_width = display_width(&year);
    let title_width = width.saturating_sub(MARKER_WIDTH + year_width);
    let title = truncate(&item.title, title_width);

    helpers::render_highlighted_text(&title, &item.highlight_ranges, theme, item.is_cursor);
    print!("{}", " ".repeat(title_width.saturating_sub(display_width(&title))));

    if !item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", truncate(&year, width.saturating_sub(MARKER_WIDTH)));
    print!("{}", Theme::reset());
}
