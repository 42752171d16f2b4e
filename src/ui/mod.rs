//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title bar, nav bar and help overlay
//! - `dashboard` - Search form, hotel list and comparison charts
//! - `login` - Screen shown after logout
//! - `dialogs` - Blocking alert dialog

mod dashboard;
mod dialogs;
mod header;
mod login;

use crate::app::AppState;
use crate::components::keybindings::KeybindingContext;
use crate::types::{CityCode, Hotel, Route};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use header::HeaderRenderer;

/// Everything a single frame needs, borrowed from the app
pub struct View<'a> {
    pub state: &'a AppState,
    pub hotels: &'a [Hotel],
    pub loading: bool,
    /// City of the most recent search
    pub city: Option<&'a CityCode>,
    pub user: Option<&'a str>,
}

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for the different screens.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI
    pub fn render(&self, f: &mut Frame, view: &View<'_>, keybinding_ctx: &KeybindingContext) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar
                Constraint::Min(1),    // Main content area
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        self.header.render_title_bar(f, main_chunks[0], view);

        match view.state.route {
            Route::Dashboard => dashboard::render_dashboard(f, main_chunks[1], view),
            Route::Login => login::render_login(f, main_chunks[1], view),
        }

        header::render_nav_bar(f, view.state, keybinding_ctx, main_chunks[2]);

        if let Some(ref message) = view.state.alert {
            dialogs::render_alert(f, message);
        }

        if view.state.help_visible {
            header::render_help_overlay(f, view.state, keybinding_ctx);
        }
    }
}
