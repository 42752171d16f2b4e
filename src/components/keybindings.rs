//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current input
//! context. The same registry drives key dispatch, the nav bar and the help
//! overlay, so what is shown always matches what is handled.

use crate::app::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Home,
    End,
    Submit,
    DeleteChar,
    ToggleCompare,
    ClearCompare,
    FocusSearch,
    FocusResults,
    Logout,
    Login,
    Dismiss,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding.
    ///
    /// Shift is ignored for character keys since terminals disagree on
    /// whether to report it for symbols like `?`.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if event.code != self.key {
            return false;
        }
        let mut modifiers = event.modifiers;
        if matches!(event.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        modifiers == self.modifiers
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
    /// Bindings outside text entry
    command_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
            command_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![Keybinding::with_modifiers(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyAction::Quit,
            "Ctrl+C",
            "Quit",
        )];

        // Plain letters are typed into the search box, so these stay out of Search
        self.command_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
        ];

        let logout = Keybinding::with_modifiers(
            KeyCode::Char('l'),
            KeyModifiers::CONTROL,
            KeyAction::Logout,
            "Ctrl+L",
            "Logout",
        );

        // Search input
        self.mode_bindings.insert(
            AppMode::Search,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Submit, "Enter", "Search"),
                Keybinding::new(KeyCode::Backspace, KeyAction::DeleteChar, "Bksp", "Delete"),
                Keybinding::new(KeyCode::Tab, KeyAction::FocusResults, "Tab", "Results"),
                Keybinding::new(KeyCode::Down, KeyAction::FocusResults, "Down", "Results"),
                Keybinding::new(KeyCode::Esc, KeyAction::FocusResults, "Esc", "Leave input"),
                logout.clone(),
            ],
        );

        // Result list
        self.mode_bindings.insert(
            AppMode::Results,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous hotel"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next hotel"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Previous hotel"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Next hotel"),
                Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "First hotel"),
                Keybinding::new(KeyCode::End, KeyAction::End, "End", "Last hotel"),
                Keybinding::new(KeyCode::Char(' '), KeyAction::ToggleCompare, "Space", "Compare"),
                Keybinding::new(KeyCode::Enter, KeyAction::ToggleCompare, "Enter", "Compare"),
                Keybinding::new(KeyCode::Char('c'), KeyAction::ClearCompare, "C", "Clear all"),
                Keybinding::new(KeyCode::Char('/'), KeyAction::FocusSearch, "/", "Search"),
                Keybinding::new(KeyCode::Tab, KeyAction::FocusSearch, "Tab", "Search"),
                Keybinding::new(KeyCode::Char('l'), KeyAction::Logout, "L", "Logout"),
                logout,
            ],
        );

        // Alert dialog
        self.mode_bindings.insert(
            AppMode::Alert,
            vec![
                Keybinding::new(KeyCode::Enter, KeyAction::Dismiss, "Enter", "OK"),
                Keybinding::new(KeyCode::Esc, KeyAction::Dismiss, "Esc", "OK"),
            ],
        );

        // Login screen
        self.mode_bindings.insert(
            AppMode::Login,
            vec![Keybinding::new(KeyCode::Enter, KeyAction::Login, "Enter", "Sign in")],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }

        if matches!(mode, AppMode::Results | AppMode::Login) {
            bindings.extend(self.command_bindings.iter());
        }

        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Resolve a key event to an action in the given mode
    pub fn action_for(&self, mode: &AppMode, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        // Select key bindings to show in nav bar (most important ones)
        let priority_actions = match mode {
            AppMode::Search => vec![
                KeyAction::Submit,
                KeyAction::FocusResults,
                KeyAction::Logout,
                KeyAction::Quit,
            ],
            AppMode::Results => vec![
                KeyAction::NavigateUp,
                KeyAction::NavigateDown,
                KeyAction::ToggleCompare,
                KeyAction::ClearCompare,
                KeyAction::FocusSearch,
                KeyAction::Logout,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            AppMode::Alert => vec![KeyAction::Dismiss],
            AppMode::Login => vec![KeyAction::Login, KeyAction::Quit],
        };

        let mut items: Vec<NavBarItem> = Vec::new();
        let mut has_nav = false;

        for action in priority_actions {
            // Up/Down collapse into one item
            if matches!(action, KeyAction::NavigateUp | KeyAction::NavigateDown) {
                if !has_nav {
                    items.push(NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Navigate".to_string(),
                    });
                    has_nav = true;
                }
                continue;
            }

            if let Some(binding) = bindings.iter().find(|b| b.action == action) {
                items.push(NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                });
            }
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(KeyAction) -> bool); 3] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::Home
                        | KeyAction::End
                        | KeyAction::FocusSearch
                        | KeyAction::FocusResults
                )
            }),
            ("Actions", |a| {
                matches!(
                    a,
                    KeyAction::Submit
                        | KeyAction::DeleteChar
                        | KeyAction::ToggleCompare
                        | KeyAction::ClearCompare
                        | KeyAction::Dismiss
                        | KeyAction::Login
                )
            }),
            ("General", |a| {
                matches!(a, KeyAction::Logout | KeyAction::Help | KeyAction::Quit)
            }),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| belongs(b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
