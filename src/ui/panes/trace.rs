//! Parse trace pane rendering

use crate::parser::parse::SyntaxError;
use crate::ui::panes::{clamp_scroll, pane_block, visible_rows};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Padding},
    Frame,
};

fn line_style(line: &str) -> Style {
    let text = line.trim_start_matches('-').trim_start();
    if text.starts_with("RULE_") {
        Style::default().fg(DEFAULT_THEME.primary)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Render the parse trace. A failed parse ends with its diagnostic.
///
/// `scroll_offset` may be `usize::MAX` to pin the view to the end.
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[String],
    outcome: &Result<(), SyntaxError>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Parse Trace ", is_focused).padding(Padding::new(1, 0, 0, 0));

    let mut items: Vec<ListItem> = lines
        .iter()
        .map(|line| ListItem::new(line.as_str()).style(line_style(line)))
        .collect();

    match outcome {
        Ok(()) => items.push(
            ListItem::new("ACCEPTED").style(
                Style::default()
                    .fg(DEFAULT_THEME.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ),
        Err(err) => items.push(
            ListItem::new(err.to_string()).style(
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            ),
        ),
    }

    let visible_height = visible_rows(area);
    *scroll_offset = clamp_scroll(*scroll_offset, items.len(), visible_height);

    let visible_items: Vec<ListItem> = items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_lines_are_highlighted() {
        assert_eq!(
            line_style("--- RULE_WHILE").fg,
            Some(DEFAULT_THEME.primary)
        );
        assert_eq!(line_style("--- while").fg, Some(DEFAULT_THEME.fg));
    }
}
