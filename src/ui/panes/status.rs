//! Status bar rendering with the verdict and keybindings

use crate::parser::parse::SyntaxError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Short verdict shown in the status bar
pub fn verdict_text(outcome: &Result<(), SyntaxError>) -> String {
    match outcome {
        Ok(()) => " ACCEPTED ".to_string(),
        Err(err) => format!(" Error {} at line {} ", err.code, err.line),
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    outcome: &Result<(), SyntaxError>,
    token_count: usize,
    error_tokens: usize,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);

    // Left side: verdict, counts, message
    let mut left_spans = vec![
        Span::styled(
            verdict_text(outcome),
            Style::default()
                .bg(if outcome.is_ok() {
                    DEFAULT_THEME.success
                } else {
                    DEFAULT_THEME.error
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", sep_style),
        Span::styled(format!("{} tokens", token_count), desc_style),
    ];

    if error_tokens > 0 {
        left_spans.push(Span::styled(", ", desc_style));
        left_spans.push(Span::styled(
            format!("{} lexical errors", error_tokens),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.error),
        ));
    }

    left_spans.push(Span::styled(" | ", sep_style));
    left_spans.push(Span::styled(format!(" {} ", message), desc_style));

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);

    let right_spans = vec![
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" move ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" PgUp/PgDn ", key_style),
        Span::styled(" page ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" Home/End ", key_style),
        Span::styled(" first/last ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::analyze;

    #[test]
    fn test_verdict_text() {
        assert_eq!(verdict_text(&Ok(())), " ACCEPTED ");

        let analysis = analyze("{\n  x = ;\n}");
        assert_eq!(verdict_text(&analysis.outcome), " Error 60 at line 2 ");
    }
}
