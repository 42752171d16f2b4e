//! Login screen, reached after logout

use super::View;
use crate::components::centered_rect;
use crate::theme::Styles;
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_login(f: &mut Frame, area: Rect, view: &View<'_>) {
    let box_area = centered_rect(area, 48, 9);

    let lines = vec![
        Line::from(""),
        Line::styled(view.state.status_message.clone(), Styles::text()),
        Line::from(""),
        Line::styled("Press Enter to sign in again", Styles::title()),
        Line::styled("or Q to quit", Styles::text_muted()),
    ];

    let login = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Login ")
                .border_style(Styles::border(true)),
        );
    f.render_widget(login, box_area);
}
