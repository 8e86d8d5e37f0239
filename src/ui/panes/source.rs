//! Source code pane rendering with token colouring
//!
//! The pane shows the program being analyzed with line numbers. Colours come
//! from the lexer's own tokens rather than a separate highlighter, so what is
//! shown as a keyword, numeral or `ERROR` is exactly what the parser received.
//!
//! # Features
//!
//! - Per-token colouring (keywords, type names, numerals, strings, operators,
//!   delimiters, lexical errors)
//! - Highlighted line of the token selected in the tokens pane
//! - The line of a syntax error drawn in the error colour
//! - Line numbering and scrolling

use crate::parser::parse::TYPE_NAMES;
use crate::parser::token::{Token, TokenKind};
use crate::ui::panes::{clamp_scroll, pane_block, scroll_into_view, visible_rows};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Scroll state for the source pane
pub struct SourceScrollState {
    pub offset: usize,
    /// Bring the current line into view on the next render
    pub follow: bool,
}

impl SourceScrollState {
    pub fn new() -> Self {
        SourceScrollState {
            offset: 0,
            follow: true,
        }
    }
}

impl Default for SourceScrollState {
    fn default() -> Self {
        Self::new()
    }
}

fn token_style(token: &Token) -> Style {
    match token.kind() {
        TokenKind::Keyword if TYPE_NAMES.contains(&token.lexeme()) => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        TokenKind::Keyword => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::String => Style::default().fg(DEFAULT_THEME.string),
        TokenKind::Operator => Style::default().fg(DEFAULT_THEME.operator),
        TokenKind::Delimiter => match token.lexeme() {
            "{" | "}" | "(" | ")" => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        },
        TokenKind::Error => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::UNDERLINED),
        kind if kind.is_numeric() => Style::default().fg(DEFAULT_THEME.number),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Colour one source line from the tokens scanned on it, in order.
///
/// Everything the lexer skips is whitespace, so each lexeme is the next
/// non-blank run of the remaining text.
pub fn highlight_line<'t>(line: &str, tokens: impl IntoIterator<Item = &'t Token>) -> Line<'static> {
    let mut spans = Vec::new();
    let mut rest = line;

    for token in tokens {
        let Some(start) = rest.find(token.lexeme()) else {
            continue;
        };
        let end = start + token.lexeme().len();

        if start > 0 {
            spans.push(Span::raw(rest[..start].to_string()));
        }
        spans.push(Span::styled(rest[start..end].to_string(), token_style(token)));
        rest = &rest[end..];
    }

    if !rest.is_empty() {
        spans.push(Span::raw(rest.to_string()));
    }

    Line::from(spans)
}

/// Tokens scanned on `line`. The lexer emits tokens in line order.
fn tokens_on_line(tokens: &[Token], line: usize) -> &[Token] {
    let start = tokens.partition_point(|t| t.line() < line);
    let end = tokens.partition_point(|t| t.line() <= line);
    &tokens[start..end]
}

/// Render the source code pane
#[allow(clippy::too_many_arguments)]
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    tokens: &[Token],
    current_line: Option<usize>,
    error_line: Option<usize>,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let block = pane_block(" Source Code ", is_focused);

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = visible_rows(area);

    if scroll_state.follow {
        if let Some(line) = current_line.filter(|&l| l > 0) {
            scroll_state.offset = scroll_into_view(scroll_state.offset, line - 1, visible_height);
        }
        scroll_state.follow = false;
    }
    scroll_state.offset = clamp_scroll(scroll_state.offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_error = error_line == Some(line_num);
            let is_current = current_line == Some(line_num);
            let line_num_str = format!("{:4} ", line_num);

            let mut content_line = highlight_line(line, tokens_on_line(tokens, line_num));

            let num_style = if is_error {
                // ERROR LINE: white text on red, whatever the token colours
                let error_style = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
                for span in &mut content_line.spans {
                    span.style = error_style;
                }
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else if is_current {
                let current_style = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content_line.spans {
                    span.style = span.style.patch(current_style);
                }
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        let source = "  while ( x<10 )   { x = x + 0x1F ; }";
        let tokens = Lexer::new().tokenize_str(source);
        let line = highlight_line(source, &tokens);
        assert_eq!(text_of(&line), source);
    }

    #[test]
    fn test_highlight_styles_follow_token_kinds() {
        let source = "int n = 3. ;";
        let tokens = Lexer::new().tokenize_str(source);
        let line = highlight_line(source, &tokens);

        let style_of = |text: &str| {
            line.spans
                .iter()
                .find(|s| s.content == text)
                .map(|s| s.style)
                .expect("span present")
        };

        assert_eq!(style_of("int").fg, Some(DEFAULT_THEME.type_name));
        assert_eq!(style_of("=").fg, Some(DEFAULT_THEME.operator));
        assert_eq!(style_of("3.").fg, Some(DEFAULT_THEME.error));
    }

    #[test]
    fn test_tokens_on_line() {
        let tokens = Lexer::new().tokenize_str("{\n\nx = 1 ;\n}");
        assert_eq!(tokens_on_line(&tokens, 1).len(), 1);
        assert!(tokens_on_line(&tokens, 2).is_empty());
        assert_eq!(tokens_on_line(&tokens, 3).len(), 4);
        assert!(tokens_on_line(&tokens, 9).is_empty());
    }
}
