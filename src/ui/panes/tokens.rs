//! Token table pane rendering

use crate::parser::token::{Token, TokenKind};
use crate::ui::panes::{pane_block, scroll_into_view, visible_rows};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

/// Width of the lexeme column; longer lexemes are shown in full and push the
/// rest of their row right.
const LEXEME_WIDTH: usize = 16;

fn kind_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Error => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::BOLD),
        TokenKind::Keyword => Style::default().fg(DEFAULT_THEME.keyword),
        TokenKind::String => Style::default().fg(DEFAULT_THEME.string),
        TokenKind::Operator => Style::default().fg(DEFAULT_THEME.operator),
        kind if kind.is_numeric() => Style::default().fg(DEFAULT_THEME.number),
        _ => Style::default().fg(DEFAULT_THEME.comment),
    }
}

/// Render the token table. `selected` is highlighted and kept on screen.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Tokens ", is_focused);

    if tokens.is_empty() {
        let paragraph = Paragraph::new("(no tokens)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = visible_rows(area);
    *scroll_offset = scroll_into_view(*scroll_offset, selected, visible_height);

    let items: Vec<ListItem> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, token)| {
            let row = Line::from(vec![
                Span::styled(
                    format!("{:<width$}", token.lexeme(), width = LEXEME_WIDTH),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(" │ ", Style::default().fg(DEFAULT_THEME.border_normal)),
                Span::styled(format!("{:<11}", token.kind().as_str()), kind_style(token.kind())),
                Span::styled(" │ ", Style::default().fg(DEFAULT_THEME.border_normal)),
                Span::styled(
                    format!("{:>4}", token.line()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ]);

            let item = ListItem::new(row);
            if idx == selected {
                item.style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
