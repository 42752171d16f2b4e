//! Dialog rendering module

use crate::components::centered_rect;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::Alignment,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render a blocking alert on top of the current screen
pub fn render_alert(f: &mut Frame, message: &str) {
    let area = centered_rect(f.area(), 44, 7);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Styles::text()),
        Line::from(""),
        Line::styled("[ OK ]", Styles::title()),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Alert ")
                .border_style(Styles::error())
                .style(Style::default().bg(Colors::BG_DANGER)),
        );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}
