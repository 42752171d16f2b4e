//! Title bar and common widget rendering

use super::View;
use crate::app::AppState;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::components::nav_bar::NavBar;
use crate::theme::{Colors, Styles};
use crate::types::Route;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Application title shown in the top bar
pub const APP_TITLE: &str = "Hospitality Explorer";

/// Title bar renderer
pub struct HeaderRenderer {
    title: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            title: Line::from(vec![
                Span::styled(" ▣ ", Style::default().fg(Colors::SUCCESS)),
                Span::styled(APP_TITLE, Styles::title()),
            ]),
        }
    }

    /// Render the title on the left and the session on the right
    pub fn render_title_bar(&self, f: &mut Frame, area: Rect, view: &View<'_>) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border(false));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        f.render_widget(Paragraph::new(self.title.clone()), halves[0]);

        let session = match (view.state.route, view.user) {
            (Route::Dashboard, Some(user)) => Line::from(vec![
                Span::styled(user.to_string(), Styles::text()),
                Span::styled("  ⏻ Logout ", Styles::warning()),
            ]),
            (Route::Dashboard, None) => Line::from(Span::styled("⏻ Logout ", Styles::warning())),
            (Route::Login, _) => Line::from(Span::styled("Not signed in ", Styles::text_muted())),
        };
        f.render_widget(
            Paragraph::new(session).alignment(Alignment::Right),
            halves[1],
        );
    }
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let nav_items = keybinding_ctx.get_nav_items(&state.mode());
    NavBar::new(nav_items).render(f, area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(&state.mode(), keybinding_ctx);
    help_overlay.render(f, f.area());
}
