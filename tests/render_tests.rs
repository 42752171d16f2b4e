//! Rendering tests against ratatui's TestBackend

mod common;

use common::{Harness, RecordingAuth};
use crossterm::event::KeyCode;
use hotel_explorer::{App, Catalog, CityCode, HotelResultProvider, Route, SessionController};
use ratatui::{backend::TestBackend, Terminal};
use std::sync::Arc;
use std::time::Duration;

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
    app.draw(&mut terminal).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_initial_dashboard() {
    let h = Harness::new();
    let screen = render(&h.app);

    assert!(screen.contains("Hospitality Explorer"));
    assert!(screen.contains("City Code"));
    assert!(screen.contains("Enter City Code (NYC, LON, AMS...)"));
    assert!(screen.contains("Search a city to see its hotels"));
    assert!(screen.contains("Logout"));
    assert!(!screen.contains("Comparison Insights"));
}

#[test]
fn test_loading_indicator_while_searching() {
    let catalog = Catalog::demo().unwrap().with_delay(Duration::from_secs(2));
    let provider = HotelResultProvider::new(Arc::new(catalog));
    let session = SessionController::new(Box::new(RecordingAuth::default()), Route::Login);
    let mut app = App::new(provider, session);

    app.provider_mut()
        .perform_search(CityCode::parse("NYC").unwrap());
    let screen = render(&app);

    assert!(screen.contains("Loading hotels..."));
}

#[test]
fn test_results_list_marks_selection() {
    let mut h = Harness::new();
    h.search("NYC");
    h.press(KeyCode::Char(' '));
    let screen = render(&h.app);

    assert!(screen.contains("Hotels in NYC (6)"));
    assert!(screen.contains("✓ Selected"));
    assert!(screen.contains("[Add to Compare] Hotel B of NYC"));
    assert!(screen.contains("Comparison Insights (1/4)"));
    assert!(screen.contains("Price"));
    assert!(screen.contains("Rating"));
}

#[test]
fn test_status_line_follows_actions() {
    let mut h = Harness::new();
    assert!(render(&h.app).contains("Enter a city code to search"));

    h.search("NYC");
    assert!(render(&h.app).contains("Found 6 hotels in NYC"));

    h.press(KeyCode::Char(' '));
    assert!(render(&h.app).contains("Added Hotel A of NYC to comparison"));

    h.press(KeyCode::Char(' '));
    assert!(render(&h.app).contains("Removed Hotel A of NYC from comparison"));

    h.press(KeyCode::Char('c'));
    assert!(render(&h.app).contains("Comparison cleared"));
}

#[test]
fn test_empty_results_message() {
    let catalog = Catalog::new(Default::default());
    let provider = HotelResultProvider::new(Arc::new(catalog));
    let session = SessionController::new(Box::new(RecordingAuth::default()), Route::Login);
    let mut app = App::new(provider, session);

    app.provider_mut()
        .perform_search(CityCode::parse("XYZ").unwrap());
    assert!(app.wait_for_results(common::WAIT));

    let screen = render(&app);
    assert!(screen.contains("No hotels found for XYZ"));
    assert!(screen.contains("Found 0 hotels in XYZ"));
}

#[test]
fn test_alert_dialog() {
    let mut h = Harness::new();
    h.type_text("ab");
    h.press(KeyCode::Enter);
    let screen = render(&h.app);

    assert!(screen.contains("Alert"));
    assert!(screen.contains("Enter 3-letter city code"));
    assert!(screen.contains("[ OK ]"));
}

#[test]
fn test_login_screen_after_logout() {
    let mut h = Harness::new();
    h.press_ctrl('l');
    let screen = render(&h.app);

    assert!(screen.contains("Login"));
    assert!(screen.contains("Press Enter to sign in again"));
    assert!(!screen.contains("City Code"));
}

#[test]
fn test_help_overlay_lists_bindings() {
    let mut h = Harness::new();
    h.press(KeyCode::Tab);
    h.press(KeyCode::Char('?'));
    let screen = render(&h.app);

    assert!(screen.contains("Navigation"));
    assert!(screen.contains("Clear all"));
}
