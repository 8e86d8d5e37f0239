// ParsTTY: DFA lexer and recursive descent recognizer with a trace viewer

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use parstty::parser::{analyze, lexer::Lexer, token::Token, Analysis};
use parstty::ui::App;

/// Scan and recognize a program, printing its tokens and parse trace.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file to analyze
    file: PathBuf,

    /// Browse the result in the terminal viewer instead of printing it
    #[arg(long)]
    tui: bool,

    /// Do not print the parse trace
    #[arg(long, conflicts_with = "tui")]
    no_trace: bool,

    /// Print the token table and stop before parsing
    #[arg(long, conflicts_with = "tui")]
    tokens_only: bool,

    /// Report progress and the verdict on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Token table in the classic `Value | Type | Line` layout
fn token_table(tokens: &[Token]) -> String {
    let mut out = String::from("\nToken List:\n");
    let _ = writeln!(out, "{:>10}\t|\t{:>10}\t|\t{}", "Value", "Type", "Line");
    out.push_str("----------------------------------------\n");
    for token in tokens {
        let _ = writeln!(
            out,
            "{:>10}\t|\t{:>10}\t|\t{}",
            token.lexeme(),
            token.kind().as_str(),
            token.line()
        );
    }
    out
}

/// Everything printed to stdout for an analysis: the token table, then the
/// parse trace unless `show_trace` is off.
fn console_report(analysis: &Analysis, show_trace: bool) -> String {
    let mut out = token_table(&analysis.tokens);
    if show_trace {
        out.push('\n');
        for line in analysis.trace.parse_lines() {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

fn run_tui(source: String, analysis: Analysis) -> Result<()> {
    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(source, analysis);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal viewer failed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read '{}'", cli.file.display()))?;

    if cli.tokens_only {
        let tokens = Lexer::new().tokenize_str(&source);
        print!("{}", token_table(&tokens));
        return Ok(());
    }

    if cli.verbose {
        eprintln!("Analyzing {}...", cli.file.display());
    }
    let analysis = analyze(&source);
    if cli.verbose {
        eprintln!("Scanned {} tokens.", analysis.tokens.len());
    }

    if cli.tui {
        let failed = analysis.outcome.is_err();
        run_tui(source, analysis)?;
        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    print!("{}", console_report(&analysis, !cli.no_trace));

    match analysis.outcome {
        Ok(()) => {
            if cli.verbose {
                eprintln!("Accepted.");
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }
}
