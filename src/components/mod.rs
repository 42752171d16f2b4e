//! Reusable UI components
//!
//! - `keybindings` - Context-aware key registry used for dispatch and hints
//! - `nav_bar` - Bottom bar listing the most useful keys
//! - `help_overlay` - Full key reference popup

pub mod help_overlay;
pub mod keybindings;
pub mod nav_bar;

use ratatui::layout::Rect;

/// A rectangle of at most `width` x `height`, centered in `parent`
pub fn centered_rect(parent: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(parent.width);
    let height = height.min(parent.height);
    let x = parent.x + (parent.width - width) / 2;
    let y = parent.y + (parent.height - height) / 2;
    Rect::new(x, y, width, height)
}
