//! Application module
//!
//! Contains the main application logic, state management, and event handling.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, Focus)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState, Focus};

use crate::compare::ToggleOutcome;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::error::{ExplorerError, Result};
use crate::provider::HotelResultProvider;
use crate::session::SessionController;
use crate::types::Route;
use crate::ui::{UiRenderer, View};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// How long to wait for input before redrawing
const TICK: Duration = Duration::from_millis(50);

/// Main application struct
pub struct App {
    state: AppState,
    provider: HotelResultProvider,
    session: SessionController,
    ui_renderer: UiRenderer,
    /// Keybinding context for dispatch and navigation hints
    keybinding_context: KeybindingContext,
    /// Set by signal handlers to request a clean exit
    shutdown: Arc<AtomicBool>,
}

impl App {
    /// Create a new application instance
    pub fn new(provider: HotelResultProvider, session: SessionController) -> Self {
        info!("Creating new App instance");
        Self {
            state: AppState::default(),
            provider,
            session,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Use `flag` as the shutdown request flag
    pub fn with_shutdown_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.shutdown = flag;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn provider(&self) -> &HotelResultProvider {
        &self.provider
    }

    pub fn provider_mut(&mut self) -> &mut HotelResultProvider {
        &mut self.provider
    }

    /// Run the event loop until the user quits or a shutdown is requested
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                info!("Shutdown requested");
                break;
            }

            if self.provider.poll() {
                self.on_results();
            }

            self.draw(terminal)?;

            if crossterm::event::poll(TICK)? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    if self.handle_key_event(key_event)? {
                        break;
                    }
                }
            }
        }

        info!("Main loop finished");
        Ok(())
    }

    /// Block until the current search settles, then apply its results.
    ///
    /// Returns false if `timeout` elapsed first.
    pub fn wait_for_results(&mut self, timeout: Duration) -> bool {
        if !self.provider.wait(timeout) {
            return false;
        }
        self.on_results();
        true
    }

    fn on_results(&mut self) {
        self.state.clamp_cursor(self.provider.hotels().len());
        let Some(city) = self.provider.city() else {
            return;
        };
        // Fetch failures are already logged by the provider and read as an empty list
        self.state.status_message =
            format!("Found {} hotels in {}", self.provider.hotels().len(), city);
    }

    /// Draw one frame
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        let user = self.session.current_user();
        let view = View {
            state: &self.state,
            hotels: self.provider.hotels(),
            loading: self.provider.is_loading(),
            city: self.provider.city(),
            user: user.as_deref(),
        };
        terminal
            .draw(|f| {
                self.ui_renderer
                    .render(f, &view, &self.keybinding_context)
            })
            .map_err(|e| ExplorerError::terminal(format!("Failed to draw frame: {}", e)))?;
        Ok(())
    }

    /// Handle a key event. Returns true when the app should exit.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(false);
        }

        let mode = self.state.mode();

        if self.state.help_visible {
            return Ok(self.handle_help_key(&mode, &key_event));
        }

        let Some(action) = self.keybinding_context.action_for(&mode, &key_event) else {
            if mode == AppMode::Search {
                self.handle_text_input(&key_event);
            }
            return Ok(false);
        };

        debug!("Key {:?} in {:?} -> {:?}", key_event.code, mode, action);
        self.dispatch(action)
    }

    fn handle_help_key(&mut self, mode: &AppMode, key_event: &KeyEvent) -> bool {
        match self.keybinding_context.action_for(mode, key_event) {
            Some(KeyAction::Quit) => return true,
            Some(KeyAction::Help) => self.state.help_visible = false,
            _ if key_event.code == KeyCode::Esc => self.state.help_visible = false,
            _ => {}
        }
        false
    }

    fn handle_text_input(&mut self, key_event: &KeyEvent) {
        if let KeyCode::Char(c) = key_event.code {
            if !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                self.state.search.push(c);
            }
        }
    }

    fn dispatch(&mut self, action: KeyAction) -> Result<bool> {
        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::Help => self.state.help_visible = true,
            KeyAction::Dismiss => self.state.alert = None,
            KeyAction::Submit => self.submit_search(),
            KeyAction::DeleteChar => self.state.search.pop(),
            KeyAction::FocusSearch => self.state.focus = Focus::SearchInput,
            KeyAction::FocusResults => self.state.focus = Focus::Results,
            KeyAction::NavigateUp => self.state.cursor = self.state.cursor.saturating_sub(1),
            KeyAction::NavigateDown => {
                self.state.cursor += 1;
                self.state.clamp_cursor(self.provider.hotels().len());
            }
            KeyAction::Home => self.state.cursor = 0,
            KeyAction::End => self.state.cursor = self.provider.hotels().len().saturating_sub(1),
            KeyAction::ToggleCompare => self.toggle_selected(),
            KeyAction::ClearCompare => self.clear_comparison(),
            KeyAction::Logout => self.logout(),
            KeyAction::Login => self.login(),
        }
        Ok(false)
    }

    /// Submit the search form.
    ///
    /// An invalid code raises an alert and changes nothing else. A valid one
    /// starts a search and empties the comparison set.
    pub fn submit_search(&mut self) {
        match self.state.search.submit() {
            Ok(city) => {
                self.state.status_message = format!("Searching {}...", city);
                self.provider.perform_search(city);
                self.state.comparison.clear();
                self.state.cursor = 0;
                self.state.focus = Focus::Results;
            }
            Err(e) => {
                debug!("Rejected search input {:?}", self.state.search.value());
                self.state.alert = Some(e.user_message());
            }
        }
    }

    /// Toggle the hotel under the cursor in the comparison set
    pub fn toggle_selected(&mut self) {
        if self.provider.is_loading() {
            return;
        }
        let Some(hotel) = self.provider.hotels().get(self.state.cursor) else {
            return;
        };

        let outcome = self.state.comparison.toggle(hotel);
        debug!("Toggle {} -> {:?}", hotel.hotel_id, outcome);
        self.state.status_message = match outcome {
            ToggleOutcome::Added => format!("Added {} to comparison", hotel.name),
            ToggleOutcome::Removed => format!("Removed {} from comparison", hotel.name),
            ToggleOutcome::Ignored => return,
        };
    }

    pub fn clear_comparison(&mut self) {
        self.state.comparison.clear();
        self.state.status_message = "Comparison cleared".to_string();
    }

    /// Sign out and go to the login screen, discarding dashboard state
    pub fn logout(&mut self) {
        self.provider.reset();
        self.session.logout(&mut self.state);
    }

    /// Sign in from the login screen
    pub fn login(&mut self) {
        if let Err(e) = self.session.login(&mut self.state, Route::Dashboard) {
            self.state.status_message = format!("Sign-in failed: {}", e.user_message());
        }
    }
}
