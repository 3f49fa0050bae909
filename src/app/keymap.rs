//! Keyboard bindings per focus.
//!
//! Translates Zellij key events into application [`Event`]s. `Ctrl+n`/`Ctrl+p`
//! and `Tab` work everywhere; everything else depends on the focused region.

use super::handler::Event;
use super::modes::Focus;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an application event, or `None` when unbound.
///
/// `query_is_empty` decides whether `Esc` in the search box clears the query
/// or hides the plugin.
#[must_use]
pub fn map_key(key: &KeyWithModifier, focus: Focus, query_is_empty: bool) -> Option<Event> {
    if key.has_modifiers(&[KeyModifier::Ctrl]) {
        return match key.bare_key {
            BareKey::Char('n') => Some(Event::CursorDown),
            BareKey::Char('p') => Some(Event::CursorUp),
            _ => None,
        };
    }
    if key.has_modifiers(&[KeyModifier::Alt]) {
        return None;
    }
    if key.bare_key == BareKey::Tab {
        return Some(Event::FocusNext);
    }

    match focus {
        Focus::Search => map_search_key(key.bare_key, query_is_empty),
        Focus::Results => map_results_key(key.bare_key),
        Focus::Detail => map_detail_key(key.bare_key),
        Focus::Watched => map_watched_key(key.bare_key),
    }
}

fn map_search_key(key: BareKey, query_is_empty: bool) -> Option<Event> {
    Some(match key {
        BareKey::Esc if query_is_empty => Event::CloseFocus,
        BareKey::Esc => Event::ClearQuery,
        BareKey::Enter | BareKey::Down => Event::FocusResults,
        BareKey::Backspace => Event::Backspace,
        BareKey::Char(c) => Event::Char(c),
        _ => return None,
    })
}

fn map_results_key(key: BareKey) -> Option<Event> {
    Some(match key {
        BareKey::Down | BareKey::Char('j') => Event::CursorDown,
        BareKey::Up | BareKey::Char('k') => Event::CursorUp,
        BareKey::Enter => Event::Activate,
        BareKey::Char('c') => Event::TogglePane,
        BareKey::Char('/') => Event::FocusSearch,
        BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

fn map_detail_key(key: BareKey) -> Option<Event> {
    Some(match key {
        BareKey::Left | BareKey::Char('h') => Event::RatingDown,
        BareKey::Right | BareKey::Char('l') => Event::RatingUp,
        BareKey::Char('0') => Event::SetRating(10),
        BareKey::Char(c @ '1'..='9') => Event::SetRating(c as u8 - b'0'),
        BareKey::Enter | BareKey::Char('a') => Event::AddToWatched,
        BareKey::Esc | BareKey::Backspace | BareKey::Char('b') => Event::Back,
        BareKey::Char('/') => Event::FocusSearch,
        _ => return None,
    })
}

fn map_watched_key(key: BareKey) -> Option<Event> {
    Some(match key {
        BareKey::Down | BareKey::Char('j') => Event::CursorDown,
        BareKey::Up | BareKey::Char('k') => Event::CursorUp,
        BareKey::Char('d' | 'x') => Event::RemoveWatched,
        BareKey::Char('c') => Event::TogglePane,
        BareKey::Char('/') => Event::FocusSearch,
        BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(bare: BareKey) -> KeyWithModifier {
        KeyWithModifier::new(bare)
    }

    #[test]
    fn typing_letters_in_search_edits_query() {
        assert_eq!(map_key(&key(BareKey::Char('j')), Focus::Search, false), Some(Event::Char('j')));
        assert_eq!(map_key(&key(BareKey::Char('q')), Focus::Search, true), Some(Event::Char('q')));
    }

    #[test]
    fn escape_in_search_clears_then_hides() {
        assert_eq!(map_key(&key(BareKey::Esc), Focus::Search, false), Some(Event::ClearQuery));
        assert_eq!(map_key(&key(BareKey::Esc), Focus::Search, true), Some(Event::CloseFocus));
    }

    #[test]
    fn ctrl_navigation_works_in_every_focus() {
        let ctrl_n = key(BareKey::Char('n')).with_ctrl_modifier();
        for focus in [Focus::Search, Focus::Results, Focus::Detail, Focus::Watched] {
            assert_eq!(map_key(&ctrl_n, focus, false), Some(Event::CursorDown));
        }
    }

    #[test]
    fn digits_set_rating_with_zero_meaning_ten() {
        assert_eq!(map_key(&key(BareKey::Char('7')), Focus::Detail, true), Some(Event::SetRating(7)));
        assert_eq!(map_key(&key(BareKey::Char('0')), Focus::Detail, true), Some(Event::SetRating(10)));
    }

    #[test]
    fn pane_keys_depend_on_focus() {
        assert_eq!(map_key(&key(BareKey::Char('c')), Focus::Results, true), Some(Event::TogglePane));
        assert_eq!(map_key(&key(BareKey::Char('d')), Focus::Watched, true), Some(Event::RemoveWatched));
        assert_eq!(map_key(&key(BareKey::Char('d')), Focus::Results, true), None);
        assert_eq!(map_key(&key(BareKey::Tab), Focus::Detail, true), Some(Event::FocusNext));
    }
}
