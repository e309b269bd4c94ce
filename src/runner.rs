// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    io::{self, stdin, stdout, BufRead, Write},
    path::Path,
    time::Duration,
};

use log::{info, warn};

use clap::Parser;

use crossterm::{
    event::{self, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};

use ratatui::{
    prelude::{Backend, CrosstermBackend, Rect, Terminal},
    TerminalOptions, Viewport,
};

use crate::app::App;
use crate::config::{find_config, HydropathConfig};
use crate::errors::HydropathError;
use crate::hydropathy::DEFAULT_WINDOW_SIZE;
use crate::seq;
use crate::ui::{key_handling::handle_key_press, render::render_ui, UI};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// Protein sequence file (FastA); prompted for if omitted
    seq_fname: Option<String>,

    /// Sliding window size [default: 9, or window_size from .hydropathconfig]
    #[arg(short = 'n', long = "window-size", value_parser = parse_window_size)]
    window_size: Option<usize>,

    /// Fixed terminal width (mostly used for testing/debugging)
    #[arg(short, long, requires = "height")]
    width: Option<u16>,

    /// Fixed terminal height ("tall" -- -h is already used)
    #[arg(short = 't', long, requires = "width")]
    height: Option<u16>,

    /// Disable color
    #[arg(short = 'C', long = "no-color")]
    no_color: bool,

    /// Poll wait time [ms]
    #[clap(long = "poll-wait-time", default_value_t = 50)]
    poll_wait_time: u64,
}

fn parse_window_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err(String::from("window size must be at least 1")),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn banner() -> String {
    format!(
        "Hydrophilicity Plot: Kyte-Doolittle Analysis Tool v{}",
        env!("CARGO_PKG_VERSION")
    )
}

fn prompt_for_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String, HydropathError> {
    writeln!(output, "Enter the path to the FASTA file:")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

// Returns the config (default if none) and an error message if a config file was found but could
// not be used.
fn read_config() -> (HydropathConfig, Option<String>) {
    let Some(path) = find_config() else {
        return (HydropathConfig::default(), None);
    };
    match HydropathConfig::from_file(&path) {
        Ok(cfg) => {
            info!("Read config from {}", path.display());
            (cfg, None)
        }
        Err(e) => {
            let msg = format!("Error reading {}: {}", path.display(), e);
            warn!("{}", msg);
            (HydropathConfig::default(), Some(msg))
        }
    }
}

pub fn run() -> Result<(), HydropathError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();

    println!("{}", banner());
    println!(" ");

    let (config, config_err) = read_config();

    let seq_filename = match cli.seq_fname {
        Some(ref fname) => fname.clone(),
        None => prompt_for_path(&mut stdin().lock(), &mut stdout())?,
    };
    if !Path::new(&seq_filename).is_file() {
        println!("File not found. Exiting.");
        return Ok(());
    }

    let window_size = cli
        .window_size
        .or(config.window_size)
        .unwrap_or(DEFAULT_WINDOW_SIZE);
    info!("Window size: {}", window_size);

    let sequences = seq::load(&seq_filename)?;
    if sequences.is_empty() {
        warn!("No sequences in {}", seq_filename);
        println!("No sequences found in {}.", seq_filename);
        return Ok(());
    }
    let mut app = App::from_seq_map(&seq_filename, &sequences, window_size)?;
    if let Some(msg) = config_err {
        app.add_error_msg(msg);
    }

    let exit_message = in_terminal_session(
        enter_terminal,
        || show_charts(&mut app, &cli, &config),
        restore_terminal,
    )?;

    match exit_message {
        Some(msg) => println!("{}", msg),
        None => info!("Plotted {} sequence(s)", app.num_profiles()),
    }

    Ok(())
}

// Runs `body` between `enter` and `restore`. `restore` runs whatever happens to the other two, so a
// failure cannot leave the terminal in raw mode on the alternate screen.
fn in_terminal_session<T>(
    enter: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let outcome = enter().and_then(|()| body());
    restore()?;
    outcome
}

fn enter_terminal() -> io::Result<()> {
    stdout().execute(EnterAlternateScreen)?;
    enable_raw_mode()
}

fn restore_terminal() -> io::Result<()> {
    let left = stdout().execute(LeaveAlternateScreen).map(|_| ());
    disable_raw_mode()?;
    left
}

// Returns the exit message, if the user stopped before the last chart.
fn show_charts(
    app: &mut App,
    cli: &Cli,
    config: &HydropathConfig,
) -> io::Result<Option<String>> {
    let backend = CrosstermBackend::new(stdout());
    // Fix viewport dimensions IFF supplied (mainly for tests)
    let viewport = match (cli.width, cli.height) {
        (Some(width), Some(height)) => Viewport::Fixed(Rect::new(0, 0, width, height)),
        _ => Viewport::Fullscreen,
    };
    let mut terminal = Terminal::with_options(backend, TerminalOptions { viewport })?;
    terminal.clear()?;

    let mut app_ui = UI::new(app);
    if cli.no_color {
        app_ui.set_monochrome();
    }
    if let Some(color) = config.line_color() {
        app_ui.set_line_color(color);
    }
    if let Some(color) = config.reference_color() {
        app_ui.set_reference_color(color);
    }

    let poll_wait = Duration::from_millis(cli.poll_wait_time);
    event_loop(&mut terminal, &mut app_ui, poll_wait)?;
    Ok(app_ui.take_exit_message())
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_ui: &mut UI,
    poll_wait: Duration,
) -> io::Result<()> {
    terminal.draw(|f| render_ui(f, app_ui))?;

    // main loop: one chart at a time, until the last one is closed
    loop {
        // Wait for an event (or timeout)
        if event::poll(poll_wait)? {
            match event::read()? {
                event::Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app_ui.clear_dirty();
                    let done = handle_key_press(app_ui, key);
                    if done {
                        break;
                    }
                    if app_ui.take_dirty() {
                        terminal.draw(|f| render_ui(f, app_ui))?;
                    }
                }
                event::Event::Resize(_, _) => {
                    terminal.draw(|f| render_ui(f, app_ui))?;
                }
                _ => {}
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_prompt_reads_trimmed_line() {
        let mut input = "  data/test1.pep \nignored\n".as_bytes();
        let mut output: Vec<u8> = Vec::new();
        let path = prompt_for_path(&mut input, &mut output).expect("prompt");
        assert_eq!(path, "data/test1.pep");
        assert_eq!(
            String::from_utf8(output).expect("utf-8"),
            "Enter the path to the FASTA file:\n"
        );
    }

    #[test]
    fn test_prompt_on_closed_stdin() {
        let mut input = "".as_bytes();
        let mut output: Vec<u8> = Vec::new();
        assert_eq!(prompt_for_path(&mut input, &mut output).expect("prompt"), "");
    }

    #[test]
    fn test_parse_window_size() {
        assert_eq!(parse_window_size("9"), Ok(9));
        assert!(parse_window_size("0").is_err());
        assert!(parse_window_size("-3").is_err());
        assert!(parse_window_size("nine").is_err());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["hydropath", "prot.fa", "-n", "11", "-C"]);
        assert_eq!(cli.seq_fname.as_deref(), Some("prot.fa"));
        assert_eq!(cli.window_size, Some(11));
        assert!(cli.no_color);
        let cli = Cli::parse_from(["hydropath"]);
        assert!(cli.seq_fname.is_none());
        assert!(cli.window_size.is_none());
        assert!(Cli::try_parse_from(["hydropath", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["hydropath", "-w", "80"]).is_err());
    }

    #[test]
    fn test_session_restores_after_failed_body() {
        let restored = Cell::new(false);
        let res: io::Result<()> = in_terminal_session(
            || Ok(()),
            || Err(io::Error::new(io::ErrorKind::Other, "terminal setup failed")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_session_restores_after_failed_enter() {
        let restored = Cell::new(false);
        let ran_body = Cell::new(false);
        let res = in_terminal_session(
            || Err(io::Error::new(io::ErrorKind::Other, "no raw mode")),
            || {
                ran_body.set(true);
                Ok(())
            },
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(res.is_err());
        assert!(!ran_body.get());
        assert!(restored.get());
    }

    #[test]
    fn test_session_passes_body_result() {
        let res = in_terminal_session(|| Ok(()), || Ok(Some(String::from("done"))), || Ok(()));
        assert_eq!(res.expect("session").as_deref(), Some("done"));
    }

    #[test]
    fn test_banner() {
        assert!(banner().starts_with("Hydrophilicity Plot: Kyte-Doolittle Analysis Tool v"));
    }
}
