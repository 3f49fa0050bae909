//! Detail pane renderer for the selected movie.

use super::message::render_message;
use super::{clear_rows, Region};
use crate::ui::helpers::{self, position_cursor, print_padded, render_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailBody, DetailCard};

pub fn render_detail_body(region: Region, body: &DetailBody, theme: &Theme) {
    let used = match body {
        DetailBody::Loading => {
            render_message(region.top, region.col, region.width, "Loading…", &theme.colors.message_fg);
            1
        }
        DetailBody::Error(message) => {
            render_message(region.top, region.col, region.width, message, &theme.colors.error_fg);
            1
        }
        DetailBody::Card(card) => render_card(region, card, theme),
    };

    clear_rows(region, used.min(region.rows));
}

/// Renders the card line by line, stopping at the bottom of the region.
///
/// Returns the number of rows written.
fn render_card(region: Region, card: &DetailCard, theme: &Theme) -> usize {
    let mut lines: Vec<(String, &str)> = vec![(card.title.clone(), theme.colors.header_fg.as_str())];
    if !card.subtitle.is_empty() {
        lines.push((card.subtitle.clone(), theme.colors.text_dim.as_str()));
    }
    if let Some(genre) = &card.genre {
        lines.push((genre.clone(), theme.colors.text_dim.as_str()));
    }
    lines.push((card.imdb_line.clone(), theme.colors.text_normal.as_str()));
    lines.push((String::new(), theme.colors.text_normal.as_str()));

    let rating_row = lines.len();
    lines.push((String::new(), theme.colors.rating_fg.as_str()));
    if let Some(notice) = &card.rated_notice {
        lines.push((notice.clone(), theme.colors.message_fg.as_str()));
    }
    lines.push((String::new(), theme.colors.text_normal.as_str()));

    if let Some(plot) = &card.plot {
        for wrapped in wrap(plot, region.width.saturating_sub(1)) {
            lines.push((wrapped, theme.colors.text_normal.as_str()));
        }
    }
    if let Some(starring) = &card.starring {
        lines.push((starring.clone(), theme.colors.text_dim.as_str()));
    }
    if let Some(directed_by) = &card.directed_by {
        lines.push((directed_by.clone(), theme.colors.text_dim.as_str()));
    }

    let written = lines.len().min(region.rows);
    for (offset, (text, color)) in lines.iter().take(written).enumerate() {
        let row = region.top + offset;
        if offset == rating_row {
            render_rating_row(row, region, card, theme);
        } else if offset == 0 {
            position_cursor(row, region.col);
            print!("{}{}", Theme::bold(), Theme::fg(color));
            print_padded(text, region.width);
            print!("{}", Theme::reset());
        } else {
            render_line(row, region.col, region.width, text, color);
        }
    }
    written
}

fn render_rating_row(row: usize, region: Region, card: &DetailCard, theme: &Theme) {
    let stars = helpers::rating_stars(card.rating, card.max_rating);
    let hint = if card.can_add {
        format!(" {}/{}  a: add to list", card.rating, card.max_rating)
    } else {
        " rate to add".to_string()
    };

    position_cursor(row, region.col);
    print!("{}", Theme::fg(&theme.colors.rating_fg));
    print!("{stars}");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_padded(&hint, region.width.saturating_sub(helpers::display_width(&stars)));
    print!("{}", Theme::reset());
}

/// Greedy word wrap to `width` characters.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() { 0 } else { 1 } + word.chars().count();
        if !current.is_empty() && current.chars().count() + needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap("A thief who steals corporate secrets", 12),
            vec!["A thief who", "steals", "corporate", "secrets"]
        );
        assert!(wrap("anything", 0).is_empty());
    }
}
