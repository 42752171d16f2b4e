//! Navigation bar component
//!
//! A single line of `key action` hints rendered at the bottom of the screen.

use super::keybindings::NavBarItem;
use crate::theme::Colors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Bottom navigation bar
pub struct NavBar {
    items: Vec<NavBarItem>,
}

impl NavBar {
    pub fn new(items: Vec<NavBarItem>) -> Self {
        Self { items }
    }

    /// Build the styled hint line
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.items.len() * 3);
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(Colors::NAV_HINT)));
            }
            spans.push(Span::styled(
                item.key_display.clone(),
                Style::default()
                    .fg(Colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", item.action_label),
                Style::default().fg(Colors::FG_SECONDARY),
            ));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        f.render_widget(Paragraph::new(self.line()), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_joins_items() {
        let bar = NavBar::new(vec![
            NavBarItem {
                key_display: "Enter".to_string(),
                action_label: "Search".to_string(),
            },
            NavBarItem {
                key_display: "Q".to_string(),
                action_label: "Quit".to_string(),
            },
        ]);
        let text: String = bar.line().spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Enter Search | Q Quit");
    }
}
