//! Main TUI application state and logic

use crate::parser::parse::SyntaxError;
use crate::parser::token::{Token, TokenKind};
use crate::parser::Analysis;
use crate::ui::panes::source::SourceScrollState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Rows moved by PgUp/PgDn
const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Trace,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tokens -> trace)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Trace,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Trace => FocusedPane::Tokens,
        }
    }
}

/// One movement request, independent of the pane it applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Motion {
    Up(usize),
    Down(usize),
    First,
    Last,
}

/// The main application state
pub struct App {
    /// The source text that was analyzed
    pub source_code: String,

    pub tokens: Vec<Token>,

    /// Rendered parse trace lines
    pub trace_lines: Vec<String>,

    pub outcome: Result<(), SyntaxError>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index of the selected row in the tokens pane
    pub selected_token: usize,

    /// Per-pane scroll offsets
    pub source_scroll: SourceScrollState,
    pub tokens_scroll: usize,
    pub trace_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app showing `analysis` of `source_code`
    pub fn new(source_code: String, analysis: Analysis) -> Self {
        let trace_lines = analysis.trace.parse_lines();

        // Start on the token the parser stopped at
        let selected_token = match &analysis.outcome {
            // At end of input the position is one past the last token
            Err(err) => err.position.min(analysis.tokens.len().saturating_sub(1)),
            Ok(()) => 0,
        };

        App {
            source_code,
            tokens: analysis.tokens,
            trace_lines,
            outcome: analysis.outcome,
            focused_pane: FocusedPane::Tokens,
            selected_token,
            source_scroll: SourceScrollState::new(),
            tokens_scroll: 0,
            trace_scroll: usize::MAX, // Pinned to the verdict
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Line of the selected token, if there are any tokens
    pub fn current_line(&self) -> Option<usize> {
        self.tokens.get(self.selected_token).map(Token::line)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Source on the left, tokens and trace stacked on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(columns[1]);

        let current_line = self.current_line();
        let error_line = self.outcome.as_ref().err().map(|err| err.line);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            &self.tokens,
            current_line,
            error_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            right_rows[0],
            &self.tokens,
            self.selected_token,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_trace_pane(
            frame,
            right_rows[1],
            &self.trace_lines,
            &self.outcome,
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        let error_tokens = self
            .tokens
            .iter()
            .filter(|t| t.kind() == TokenKind::Error)
            .count();

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            &self.outcome,
            self.tokens.len(),
            error_tokens,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        let motion = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
                return;
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
                return;
            }
            KeyCode::Up => Motion::Up(1),
            KeyCode::Down => Motion::Down(1),
            KeyCode::PageUp => Motion::Up(PAGE),
            KeyCode::PageDown => Motion::Down(PAGE),
            KeyCode::Home => Motion::First,
            KeyCode::End => Motion::Last,
            _ => return,
        };

        match self.focused_pane {
            FocusedPane::Tokens => self.move_selection(motion),
            FocusedPane::Source => {
                let offset = &mut self.source_scroll.offset;
                *offset = scroll(*offset, motion);
            }
            FocusedPane::Trace => {
                // Rendering clamps usize::MAX back to the last page
                self.trace_scroll = scroll(self.trace_scroll, motion);
            }
        }
    }

    fn move_selection(&mut self, motion: Motion) {
        let last = self.tokens.len().saturating_sub(1);
        self.selected_token = match motion {
            Motion::Up(n) => self.selected_token.saturating_sub(n),
            Motion::Down(n) => self.selected_token.saturating_add(n).min(last),
            Motion::First => 0,
            Motion::Last => last,
        };

        if let Some(token) = self.tokens.get(self.selected_token) {
            self.status_message = format!("{} {} on line {}", token.kind(), token.lexeme(), token.line());
        }
        self.source_scroll.follow = true;
    }
}

/// Apply `motion` to a free scroll offset. Upper bounds are left to the
/// renderer, which knows the pane height.
fn scroll(offset: usize, motion: Motion) -> usize {
    match motion {
        Motion::Up(n) => offset.saturating_sub(n),
        Motion::Down(n) => offset.saturating_add(n),
        Motion::First => 0,
        Motion::Last => usize::MAX,
    }
}
