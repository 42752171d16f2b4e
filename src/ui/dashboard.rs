//! Dashboard screen
//!
//! Stacked sections: the city search form, the hotel list, the comparison
//! charts once at least one hotel is picked, and a status line. Chart prices
//! are re-drawn on every frame.

use super::View;
use crate::app::Focus;
use crate::chart::{self, ChartRecord, MAX_RATING, PRICE_RANGE};
use crate::compare::COMPARISON_CAPACITY;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const PLACEHOLDER: &str = "Enter City Code (NYC, LON, AMS...)";

/// Height of the comparison section, borders included
const COMPARISON_HEIGHT: u16 = 14;

pub fn render_dashboard(f: &mut Frame, area: Rect, view: &View<'_>) {
    let show_comparison = !view.state.comparison.is_empty();

    let mut constraints = vec![
        Constraint::Length(3), // Search form
        Constraint::Min(5),    // Hotel list
    ];
    if show_comparison {
        constraints.push(Constraint::Length(COMPARISON_HEIGHT));
    }
    constraints.push(Constraint::Length(1)); // Status line

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_search_form(f, chunks[0], view);
    render_hotel_list(f, chunks[1], view);
    if show_comparison {
        render_comparison(f, chunks[2], view);
    }
    render_status(f, chunks[chunks.len() - 1], view);
}

fn render_status(f: &mut Frame, area: Rect, view: &View<'_>) {
    let status = Paragraph::new(format!(" {}", view.state.status_message))
        .style(Styles::text_muted());
    f.render_widget(status, area);
}

fn render_search_form(f: &mut Frame, area: Rect, view: &View<'_>) {
    let focused = view.state.focus == Focus::SearchInput;
    let value = view.state.search.value();

    let mut spans = vec![Span::styled(" ⌕ ", Styles::title())];
    if value.is_empty() && !focused {
        spans.push(Span::styled(PLACEHOLDER, Styles::text_muted()));
    } else {
        spans.push(Span::styled(value.to_string(), Styles::text()));
        if focused {
            spans.push(Span::styled("█", Style::default().fg(Colors::PRIMARY)));
        }
        if value.is_empty() {
            spans.push(Span::styled(format!(" {}", PLACEHOLDER), Styles::text_muted()));
        }
    }

    let form = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" City Code ")
            .border_style(Styles::border(focused)),
    );
    f.render_widget(form, area);
}

fn render_hotel_list(f: &mut Frame, area: Rect, view: &View<'_>) {
    let focused = view.state.focus == Focus::Results;
    let title = match view.city {
        Some(city) if !view.loading => format!(" Hotels in {} ({}) ", city, view.hotels.len()),
        _ => " Hotels ".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Styles::border(focused));

    if view.loading {
        f.render_widget(
            Paragraph::new("Loading hotels...").style(Styles::text()).block(block),
            area,
        );
        return;
    }

    if view.hotels.is_empty() {
        let message = match view.city {
            Some(city) => format!("No hotels found for {}", city),
            None => "Search a city to see its hotels".to_string(),
        };
        f.render_widget(
            Paragraph::new(message).style(Styles::text_muted()).block(block),
            area,
        );
        return;
    }

    let searched = view.city.map(|c| c.as_str()).unwrap_or_default();
    let items: Vec<ListItem> = view
        .hotels
        .iter()
        .map(|hotel| {
            let marker = if view.state.comparison.contains(&hotel.hotel_id) {
                Span::styled("[✓ Selected]     ", Styles::compare_selected())
            } else {
                Span::styled("[Add to Compare] ", Styles::compare_unselected())
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::styled(hotel.name.clone(), Styles::text()),
                Span::styled(format!("  ⌖ {}", hotel.location(searched)), Styles::location()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(if focused { Styles::cursor() } else { Style::default() })
        .highlight_symbol("› ");

    let mut list_state = ListState::default().with_selected(Some(view.state.cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_comparison(f: &mut Frame, area: Rect, view: &View<'_>) {
    let comparison = &view.state.comparison;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![
            Span::styled(" ▥ ", Style::default().fg(Colors::SUCCESS)),
            Span::styled(
                format!(
                    "Comparison Insights ({}/{}) ",
                    comparison.len(),
                    COMPARISON_CAPACITY
                ),
                Styles::title(),
            ),
        ]))
        .title_bottom(Line::from(" C Clear All ").right_aligned())
        .border_style(Styles::border(false));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let records = chart::project_random(comparison);
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    render_price_chart(f, halves[0], &records);
    render_rating_chart(f, halves[1], &records);
}

fn render_price_chart(f: &mut Frame, area: Rect, records: &[ChartRecord]) {
    let bars: Vec<Bar> = records
        .iter()
        .map(|r| {
            Bar::default()
                .value(u64::from(r.price))
                .text_value(format!("${}", r.price))
                .label(Line::from(r.name.clone()))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title(" Price "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(chart::CHART_NAME_LEN as u16)
        .bar_gap(2)
        .max(u64::from(PRICE_RANGE.end))
        .bar_style(Style::default().fg(Colors::CHART_PRICE))
        .value_style(Style::default().fg(Color::Black).bg(Colors::CHART_PRICE));
    f.render_widget(chart, area);
}

fn render_rating_chart(f: &mut Frame, area: Rect, records: &[ChartRecord]) {
    let bars: Vec<Bar> = records
        .iter()
        .map(|r| {
            Bar::default()
                .value(u64::from(r.rating))
                .text_value(format!("{}★", r.rating))
                .label(Line::from(r.name.clone()))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().title(" Rating "))
        .data(BarGroup::default().bars(&bars))
        .bar_width(chart::CHART_NAME_LEN as u16)
        .bar_gap(2)
        .max(u64::from(MAX_RATING))
        .bar_style(Style::default().fg(Colors::CHART_RATING))
        .value_style(Style::default().fg(Color::Black).bg(Colors::CHART_RATING));
    f.render_widget(chart, area);
}
