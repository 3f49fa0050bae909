//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of every store: the search session, the
//! selection with its detail record, the watched collection, focus, pane
//! toggles and the pane title scope. The event handler mutates it; the view
//! layer only reads it through [`AppState::compute_viewmodel`].
//!
//! # Example
//!
//! ```rust
//! use popcorn::app::AppState;
//! use popcorn::ui::theme::Theme;
//!
//! let state = AppState::new(None, "popcorn", Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.search_bar.focused);
//! ```

use super::detail::{DetailState, DetailStore};
use super::modes::{Focus, PaneToggles};
use super::search::{SearchStatus, SearchStore};
use super::title::TitleScope;
use super::watched::WatchedList;
use crate::api::MovieDirectory;
use crate::domain::{MovieDetail, WatchedEntry, WatchedStats, MAX_RATING};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailBody, DetailCard, DetailPane, DisplayItem, FooterInfo, HeaderInfo, ResultsBody,
    ResultsPane, RightPane, SearchBarInfo, UIViewModel, WatchedItem, WatchedPane, WatchedSummary,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Rows taken by everything except the pane bodies.
const CHROME_ROWS: usize = 9;

/// Prompt shown in the results pane before the first search.
const SEARCH_HINT: &str = "Type to search for a movie";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory access; `None` when no API key is configured.
    pub directory: Option<MovieDirectory>,

    /// Query, results and search status.
    pub search: SearchStore,

    /// Current selection and its detail record.
    pub detail: DetailStore,

    /// Movies the user has watched.
    pub watched: WatchedList,

    /// Region receiving keyboard input.
    pub focus: Focus,

    /// Collapsed/expanded flags for the list panes.
    pub panes: PaneToggles,

    /// Pane title bound to the displayed movie.
    pub title: TitleScope,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial state.
    ///
    /// # Parameters
    ///
    /// * `directory` - Configured movie directory, `None` without an API key
    /// * `default_title` - Pane title shown while no movie is displayed
    /// * `theme` - Color scheme for UI rendering
    #[must_use]
    pub fn new(directory: Option<MovieDirectory>, default_title: &str, theme: Theme) -> Self {
        Self {
            directory,
            search: SearchStore::default(),
            detail: DetailStore::default(),
            watched: WatchedList::default(),
            focus: Focus::Search,
            panes: PaneToggles::default(),
            title: TitleScope::new(default_title),
            theme,
        }
    }

    /// Whether a movie is selected, which puts the detail on the right.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.detail.selected_id().is_some()
    }

    /// Title of the loaded detail, used for the pane title.
    #[must_use]
    pub fn displayed_title(&self) -> Option<&str> {
        self.detail.displayed().map(|detail| detail.title.as_str())
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing
    ///
    /// Each list shows at most `rows - 9` entries, centered on its cursor and
    /// shifted to stay full near the ends.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body_rows = rows.saturating_sub(CHROME_ROWS);

        UIViewModel {
            header: HeaderInfo { title: " popcorn ".to_string() },
            search_bar: self.compute_search_bar(),
            results: ResultsPane {
                focused: self.focus == Focus::Results,
                expanded: self.panes.results_expanded,
                body: self.compute_results_body(body_rows, self.panes.results_expanded),
            },
            right: self.compute_right_pane(body_rows),
            footer: self.compute_footer(),
            body_rows,
            left_width: results_pane_width(cols),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let session = self.search.session();
        let results_summary = format!("Found {} results", session.results.len());

        SearchBarInfo {
            query: session.query.clone(),
            focused: self.focus == Focus::Search,
            results_summary,
        }
    }

    /// Loading and error lines stay visible while the pane is collapsed; only
    /// the hint and the rows are hidden.
    fn compute_results_body(&self, body_rows: usize, expanded: bool) -> ResultsBody {
        let session = self.search.session();
        match &session.status {
            SearchStatus::Idle | SearchStatus::Loaded if !expanded => ResultsBody::Collapsed,
            SearchStatus::Idle => ResultsBody::Hint(SEARCH_HINT.to_string()),
            SearchStatus::Loading(_) => ResultsBody::Loading,
            SearchStatus::NoMatch | SearchStatus::Failed(_) => {
                ResultsBody::Error(session.error_message().unwrap_or_default().to_string())
            }
            SearchStatus::Loaded => {
                let query = session.query.trim();
                let matcher = (!query.is_empty()).then(SkimMatcherV2::default);
                let (start, end) = visible_window(self.search.cursor(), session.results.len(), body_rows);
                let selected = self.detail.selected_id();

                let items = session.results[start..end]
                    .iter()
                    .enumerate()
                    .map(|(offset, movie)| DisplayItem {
                        title: movie.title.clone(),
                        year: movie.year.clone(),
                        is_cursor: start + offset == self.search.cursor(),
                        is_selected: selected == Some(movie.id.as_str()),
                        highlight_ranges: matcher
                            .as_ref()
                            .map_or_else(Vec::new, |m| compute_highlight_ranges(&movie.title, query, m)),
                    })
                    .collect();
                ResultsBody::Items(items)
            }
        }
    }

    fn compute_right_pane(&self, body_rows: usize) -> RightPane {
        if self.has_selection() {
            let body = match self.detail.state() {
                DetailState::Idle | DetailState::Loading { .. } => DetailBody::Loading,
                DetailState::Failed { message, .. } => DetailBody::Error(message.clone()),
                DetailState::Loaded(detail) => DetailBody::Card(self.compute_detail_card(detail)),
            };
            return RightPane::Detail(DetailPane { focused: self.focus == Focus::Detail, body });
        }

        let entries = self.watched.entries();
        let (start, end) = visible_window(self.watched.cursor(), entries.len(), body_rows.saturating_sub(2));
        let items = entries[start..end]
            .iter()
            .enumerate()
            .map(|(offset, entry)| watched_item(entry, start + offset == self.watched.cursor()))
            .collect();

        RightPane::Watched(WatchedPane {
            focused: self.focus == Focus::Watched,
            expanded: self.panes.watched_expanded,
            summary: watched_summary(&self.watched.stats()),
            items,
        })
    }

    fn compute_detail_card(&self, detail: &MovieDetail) -> DetailCard {
        let runtime = detail.runtime_minutes.map(|m| format!("{m} min"));
        let subtitle = [detail.released.clone(), runtime]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" • ");
        let pending = self.detail.pending_rating();
        let rating = pending.map_or(0, |r| r.value());

        DetailCard {
            title: detail.title.clone(),
            subtitle,
            genre: detail.genre.clone(),
            imdb_line: detail
                .imdb_rating
                .map_or_else(|| "No IMDb rating".to_string(), |r| format!("{r:.1} IMDb rating")),
            plot: detail.plot.clone(),
            starring: detail.actors.as_ref().map(|a| format!("Starring {a}")),
            directed_by: detail.director.as_ref().map(|d| format!("Directed by {d}")),
            rating,
            max_rating: MAX_RATING,
            rated_notice: self
                .watched
                .get(&detail.id)
                .map(|entry| format!("You rated this movie {}", entry.user_rating)),
            can_add: pending.is_some(),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            Focus::Search => "Type to search  Enter: results  Tab: next pane  Esc: clear/hide",
            Focus::Results => "j/k: navigate  Enter: select  c: collapse  /: search  Tab: next pane  q: hide",
            Focus::Detail => "h/l or 0-9: rate  a: add to watched  Esc/b: back  /: search  Tab: next pane",
            Focus::Watched => "j/k: navigate  d: remove  c: collapse  /: search  Tab: next pane  q: hide",
        };
        FooterInfo { keybindings: keybindings.to_string() }
    }
}

/// Width of the results pane: two fifths of the screen, at least 24 columns
/// but never more than leaves 20 for the right pane.
fn results_pane_width(cols: usize) -> usize {
    (cols * 2 / 5).max(24).min(cols.saturating_sub(20))
}

/// Window `[start, end)` of at most `rows` items keeping `cursor` visible.
fn visible_window(cursor: usize, len: usize, rows: usize) -> (usize, usize) {
    let mut start = cursor.saturating_sub(rows / 2);
    let end = (start + rows).min(len);
    if end - start.min(end) < rows && len >= rows {
        start = end.saturating_sub(rows);
    }
    (start.min(end), end)
}

/// Coalesces fuzzy match indices of `query` in `text` into `(start, end)`
/// character ranges.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

fn watched_summary(stats: &WatchedStats) -> WatchedSummary {
    WatchedSummary {
        count: format!("{} movies", stats.count),
        imdb: format!("{:.1}", stats.average_imdb_rating),
        user: format!("{:.1}", stats.average_user_rating),
        runtime: format!("{:.0} min", stats.average_runtime),
    }
}

fn watched_item(entry: &WatchedEntry, is_cursor: bool) -> WatchedItem {
    WatchedItem {
        title: entry.title.clone(),
        imdb: format!("{:.1}", entry.imdb_rating),
        user: entry.user_rating.to_string(),
        runtime: format!("{:.0} min", entry.runtime_minutes),
        is_cursor,
    }
}
