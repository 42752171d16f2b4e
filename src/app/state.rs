//! Application state definitions
//!
//! Contains the dashboard state owned by the UI thread and the input
//! contexts used to pick keybindings.

use crate::compare::ComparisonSet;
use crate::search::SearchInput;
use crate::session::Navigator;
use crate::types::Route;

/// Which dashboard widget receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Focus {
    #[default]
    SearchInput,
    Results,
}

/// Input contexts, each with its own keybindings
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Typing a city code
    Search,
    /// Browsing the hotel list
    Results,
    /// Blocking alert dialog
    Alert,
    /// Login screen shown after logout
    Login,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current route
    pub route: Route,
    /// Focused dashboard widget
    pub focus: Focus,
    /// City code being typed
    pub search: SearchInput,
    /// Hotels picked for comparison
    pub comparison: ComparisonSet,
    /// Highlighted row in the hotel list
    pub cursor: usize,
    /// Blocking alert message
    pub alert: Option<String>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            route: Route::Dashboard,
            focus: Focus::SearchInput,
            search: SearchInput::new(),
            comparison: ComparisonSet::new(),
            cursor: 0,
            alert: None,
            help_visible: false,
            status_message: "Enter a city code to search".to_string(),
        }
    }
}

impl AppState {
    /// Input context for the current state
    pub fn mode(&self) -> AppMode {
        if self.alert.is_some() {
            return AppMode::Alert;
        }
        match (self.route, self.focus) {
            (Route::Login, _) => AppMode::Login,
            (Route::Dashboard, Focus::SearchInput) => AppMode::Search,
            (Route::Dashboard, Focus::Results) => AppMode::Results,
        }
    }

    /// Reset everything the dashboard owns, as if freshly opened
    pub fn reset_dashboard(&mut self) {
        self.focus = Focus::SearchInput;
        self.search.clear();
        self.comparison.clear();
        self.cursor = 0;
        self.alert = None;
        self.help_visible = false;
    }

    /// Keep the cursor inside a list of `len` rows
    pub fn clamp_cursor(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

impl Navigator for AppState {
    fn navigate(&mut self, route: Route) {
        self.route = route;
        self.reset_dashboard();
        self.status_message = match route {
            Route::Login => "Signed out".to_string(),
            Route::Dashboard => "Enter a city code to search".to_string(),
        };
    }
}
