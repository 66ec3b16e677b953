//! qhl - highlight SQL and log-filter queries in the terminal

use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use crossterm::event::{KeyCode, KeyModifiers};

use query_highlight::config::Config;
use query_highlight::error::{HighlightError, Result};
use query_highlight::line::QueryLine;
use query_highlight::syntax::RuleTable;
use query_highlight::terminal::{write_segments, Terminal};

/// Parsed command line
#[derive(Debug, Default)]
struct Args {
    dialect: Option<String>,
    interactive: bool,
    list: bool,
    no_color: bool,
    query: Vec<String>,
}

fn main() {
    let _ = env_logger::Builder::from_default_env()
        .filter_module("query_highlight", log::LevelFilter::Warn)
        .try_init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = match parse_args(env::args().skip(1))? {
        Some(args) => args,
        None => return Ok(()),
    };

    let config = Config::load();
    let registry = config.registry()?;

    if args.list {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let dialect = registry.require(args.dialect.as_deref().unwrap_or(&config.dialect))?;
    let color = config.color && !args.no_color;

    if args.interactive {
        run_interactive(dialect, color)
    } else if !args.query.is_empty() {
        print_highlighted(dialect, &args.query.join(" "), color)
    } else {
        for line in io::stdin().lock().lines() {
            print_highlighted(dialect, &line?, color)?;
        }
        Ok(())
    }
}

/// Parse arguments; `None` means the request was already answered
fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Option<Args>> {
    let mut args = Args::default();

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(None);
            }
            "--version" | "-V" => {
                println!("qhl {}", env!("CARGO_PKG_VERSION"));
                return Ok(None);
            }
            "--dialect" | "-d" => {
                let name = argv.next().ok_or_else(|| {
                    HighlightError::Config("--dialect needs a value".to_string())
                })?;
                args.dialect = Some(name);
            }
            "--interactive" | "-i" => args.interactive = true,
            "--list" | "-l" => args.list = true,
            "--no-color" => args.no_color = true,
            "--" => {
                args.query.extend(argv.by_ref());
            }
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(HighlightError::Config(format!("unknown option {}", other)));
            }
            _ => args.query.push(arg),
        }
    }

    Ok(Some(args))
}

fn print_highlighted(dialect: &RuleTable, text: &str, color: bool) -> Result<()> {
    let segments = dialect.tokenize(text);
    let mut out = io::stdout().lock();
    write_segments(&mut out, &segments, color)?;
    writeln!(out)?;
    Ok(())
}

/// Live query line: re-highlighted on every key
fn run_interactive(dialect: &RuleTable, color: bool) -> Result<()> {
    let prompt = format!("{}> ", dialect.name());
    let mut terminal = Terminal::new()?;
    let mut line = QueryLine::new();

    loop {
        let segments = dialect.tokenize(line.text());
        terminal.redraw_line(&prompt, &segments, line.cursor_col(), color)?;

        let key = terminal.read_key()?;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => break,
            KeyCode::Char('c') | KeyCode::Char('d') if ctrl => break,
            KeyCode::Char('a') if ctrl => line.home(),
            KeyCode::Char('e') if ctrl => line.end(),
            KeyCode::Char('b') if ctrl => line.left(),
            KeyCode::Char('f') if ctrl => line.right(),
            KeyCode::Char(ch) if !ctrl => line.insert_char(ch),
            KeyCode::Backspace => {
                line.backspace();
            }
            KeyCode::Delete => {
                line.delete();
            }
            KeyCode::Left => line.left(),
            KeyCode::Right => line.right(),
            KeyCode::Home => line.home(),
            KeyCode::End => line.end(),
            KeyCode::Enter => {
                let query = line.take();
                log::debug!("submitted query: {}", query);
                terminal.newline()?;
            }
            _ => {}
        }
    }

    terminal.newline()?;
    Ok(())
}

fn print_usage() {
    println!("qhl {} - highlight SQL and log-filter queries", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: qhl [OPTIONS] [QUERY...]");
    println!();
    println!("Highlights QUERY, or each line of stdin when no query is given.");
    println!();
    println!("Options:");
    println!("  -d, --dialect NAME  Dialect to use (default from ~/.qhl.toml, else sql)");
    println!("  -i, --interactive   Edit a query line with live highlighting");
    println!("  -l, --list          List available dialects");
    println!("      --no-color      Print without styling");
    println!("  -h, --help          Show this help message");
    println!("  -V, --version       Show version information");
}
