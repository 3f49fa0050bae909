//! Watched pane renderer: aggregate summary followed by the list.

use super::message::render_message;
use super::{clear_rows, Region};
use crate::ui::helpers::{display_width, position_cursor, print_padded, render_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{WatchedItem, WatchedPane};

/// Width of each numeric column in a watched row.
const NUMBER_COLUMN: usize = 8;

pub fn render_watched_body(region: Region, pane: &WatchedPane, theme: &Theme) {
    if region.rows == 0 {
        return;
    }

    let summary = format!(
        "{}  IMDb {}  You {}  {}",
        pane.summary.count, pane.summary.imdb, pane.summary.user, pane.summary.runtime
    );
    render_line(region.top, region.col, region.width, &summary, &theme.colors.header_fg);

    if !pane.expanded || region.rows < 2 {
        clear_rows(region, 1);
        return;
    }

    if pane.items.is_empty() {
        render_message(
            region.top + 1,
            region.col,
            region.width,
            "Rate a movie to add it here",
            &theme.colors.text_dim,
        );
        clear_rows(region, 2);
        return;
    }

    let list_rows = region.rows - 1;
    for (offset, item) in pane.items.iter().take(list_rows).enumerate() {
        render_watched_row(region.top + 1 + offset, region, item, theme);
    }
    clear_rows(region, 1 + pane.items.len().min(list_rows));
}

fn render_watched_row(row: usize, region: Region, item: &WatchedItem, theme: &Theme) {
    position_cursor(row, region.col);
    if item.is_cursor {
        print!("{}{}", Theme::fg(&theme.colors.selection_fg), Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let numbers = format!(
        "{:>w$}{:>w$}{:>w$}",
        item.imdb,
        item.user,
        item.runtime,
        w = NUMBER_COLUMN
    );
    let title_width = region.width.saturating_sub(display_width(&numbers));
    print_padded(&format!(" {}", item.title), title_width);
    print_padded(&numbers, region.width.saturating_sub(title_width));
    print!("{}", Theme::reset());
}
