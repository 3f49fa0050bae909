//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They carry no business logic, only display-ready data:
//! windowed rows, pre-formatted numbers and highlight ranges.

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Logo line.
    pub header: HeaderInfo,

    /// Query box with the results count.
    pub search_bar: SearchBarInfo,

    /// Left pane listing search results.
    pub results: ResultsPane,

    /// Right pane: the selected movie or the watched collection.
    pub right: RightPane,

    /// Keybinding hints for the focused region.
    pub footer: FooterInfo,

    /// Rows available to pane bodies below the pane titles.
    pub body_rows: usize,

    /// Columns of the results pane; the right pane takes the rest after a
    /// one-column divider.
    pub left_width: usize,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,
    /// Whether the query box receives typed characters.
    pub focused: bool,
    /// `"Found N results"` for the current session, including zero.
    pub results_summary: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Left pane state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsPane {
    pub focused: bool,
    pub expanded: bool,
    pub body: ResultsBody,
}

/// What the results pane shows in its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsBody {
    /// Neutral prompt, shown before anything was searched.
    Hint(String),
    Loading,
    /// No match or failed request.
    Error(String),
    /// Windowed result rows.
    Items(Vec<DisplayItem>),
    /// The pane is collapsed and has no status to report.
    Collapsed,
}

/// One row in the results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub title: String,
    pub year: String,
    /// Row under the list cursor.
    pub is_cursor: bool,
    /// Row whose detail is open on the right.
    pub is_selected: bool,
    /// Character ranges of the title matching the query, `(start, end)` with
    /// exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Right pane state.
#[derive(Debug, Clone, PartialEq)]
pub enum RightPane {
    Detail(DetailPane),
    Watched(WatchedPane),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailPane {
    pub focused: bool,
    pub body: DetailBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody {
    Loading,
    Error(String),
    Card(DetailCard),
}

/// Formatted fields of a loaded movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCard {
    pub title: String,
    /// Release date and runtime, e.g. `"16 Jul 2010 • 148 min"`.
    pub subtitle: String,
    pub genre: Option<String>,
    /// e.g. `"8.8 IMDb rating"`.
    pub imdb_line: String,
    pub plot: Option<String>,
    pub starring: Option<String>,
    pub directed_by: Option<String>,
    /// Pending rating shown on the star bar, 0 when none is chosen.
    pub rating: u8,
    pub max_rating: u8,
    /// `"You rated this movie N"` when the movie is already watched.
    pub rated_notice: Option<String>,
    /// Whether adding is possible (a rating is chosen).
    pub can_add: bool,
}

/// Watched collection with its summary.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchedPane {
    pub focused: bool,
    pub expanded: bool,
    pub summary: WatchedSummary,
    pub items: Vec<WatchedItem>,
}

/// Pre-formatted aggregate statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedSummary {
    /// e.g. `"2 movies"`.
    pub count: String,
    pub imdb: String,
    pub user: String,
    pub runtime: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedItem {
    pub title: String,
    pub imdb: String,
    pub user: String,
    pub runtime: String,
    pub is_cursor: bool,
}
