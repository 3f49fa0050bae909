//! Shared rendering utilities.
//!
//! Widths are counted in characters, not bytes, so titles with accents and the
//! rating stars line up.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Character count of `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `width` characters, marking the cut with `…`.
///
/// # Example
///
/// ```rust
/// use popcorn::ui::helpers::truncate;
///
/// assert_eq!(truncate("Inception", 20), "Inception");
/// assert_eq!(truncate("Inception", 5), "Ince…");
/// assert_eq!(truncate("Inception", 0), "");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Prints `text` cut to `width` and padded with spaces to exactly `width`.
pub fn print_padded(text: &str, width: usize) {
    let text = truncate(text, width);
    print!("{text}{}", " ".repeat(width.saturating_sub(display_width(&text))));
}

/// Prints a full-width line of `text` in one color starting at `(row, col)`.
pub fn render_line(row: usize, col: usize, width: usize, text: &str, color: &str) {
    position_cursor(row, col);
    print!("{}", Theme::fg(color));
    print_padded(text, width);
    print!("{}", Theme::reset());
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Ranges are `(start, end)` character indices with exclusive end; parts
/// beyond the text are ignored. After each highlight the base colors are
/// restored, using the selection colors when `is_cursor` is set.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, is_cursor: bool) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        if is_cursor {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Rating bar such as `★★★☆☆☆☆☆☆☆`.
#[must_use]
pub fn rating_stars(value: u8, max: u8) -> String {
    let filled = usize::from(value.min(max));
    let empty = usize::from(max) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Amélie", 6), "Amélie");
        assert_eq!(truncate("Amélie", 4), "Amé…");
    }

    #[test]
    fn stars_fill_up_to_value() {
        assert_eq!(rating_stars(3, 5), "★★★☆☆");
        assert_eq!(rating_stars(0, 3), "☆☆☆");
        assert_eq!(rating_stars(12, 3), "★★★");
        assert_eq!(display_width(&rating_stars(7, 10)), 10);
    }
}
