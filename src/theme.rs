//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors, styles,
//! and visual constants used throughout the dashboard.
//!
//! # Usage
//! ```rust
//! use hotel_explorer::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - used for panels and dialogs
    pub const BG_PRIMARY: Color = Color::Rgb(15, 23, 42);

    /// Alert dialog background
    pub const BG_DANGER: Color = Color::Rgb(40, 20, 20);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - used for borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - used for emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;

    pub const WARNING: Color = Color::Yellow;

    pub const ERROR: Color = Color::Red;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Focused widget border
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Unfocused widget border
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Cursor row highlight
    pub const SELECTED_BG: Color = Color::Rgb(51, 65, 85);

    /// Location tag next to hotel names
    pub const LOCATION: Color = Color::Rgb(100, 116, 139);

    /// Navigation hint separators
    pub const NAV_HINT: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Chart Colors
    // -------------------------------------------------------------------------

    /// Price bars
    pub const CHART_PRICE: Color = Color::Rgb(34, 197, 94);

    /// Rating bars
    pub const CHART_RATING: Color = Color::Rgb(250, 204, 21);
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Screen and section titles
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for a widget, depending on focus
    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }

    /// Highlighted list row
    pub fn cursor() -> Style {
        Style::default()
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// "Selected" marker on hotels in the comparison set
    pub fn compare_selected() -> Style {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// "Add to Compare" marker
    pub fn compare_unselected() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    pub fn location() -> Style {
        Style::default().fg(Colors::LOCATION)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Colors::ERROR)
            .add_modifier(Modifier::BOLD)
    }
}
