//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`source`]: Source text coloured from the lexer's tokens, with the
//!   selected token's line and the failing line highlighted
//! - [`tokens`]: The token table (`lexeme | kind | line`)
//! - [`trace`]: The parse trace, ending with the diagnostic on failure
//! - [`status`]: Status bar with the verdict and keybindings
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*_pane()` function that takes
//! the frame, its area, the data to show, whether it is focused and a mutable
//! scroll offset owned by [`App`](crate::ui::App).

pub mod source;
pub mod status;
pub mod tokens;
pub mod trace;

// Re-export render functions for convenience
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use trace::render_trace_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block with the focus-dependent border style shared by all panes
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, at least one
pub(crate) fn visible_rows(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Clamp a scroll offset so the last page is never scrolled past
pub fn clamp_scroll(offset: usize, total: usize, visible: usize) -> usize {
    if total > visible {
        offset.min(total - visible)
    } else {
        0
    }
}

/// Smallest change to `offset` that keeps row `index` on screen
pub fn scroll_into_view(offset: usize, index: usize, visible: usize) -> usize {
    if index < offset {
        index
    } else if index >= offset + visible {
        index + 1 - visible
    } else {
        offset
    }
}
