//! Funcplot - a terminal function plotter.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use funcplot::app::{App, AppOptions};
use funcplot::command::Command;
use funcplot::data::DomainPolicy;
use funcplot::util::PlotConfig;
use funcplot::{headless, ui};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "funcplot")]
#[command(about = "Plot functions on a terminal canvas", long_about = None)]
struct Args {
    /// Load curves from this file instead of plotting the default curves
    #[arg(long)]
    load: Option<PathBuf>,

    /// Enable logging to specified file (level from RUST_LOG, default debug)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Segments per curve (each curve gets one more sample)
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    points: u32,

    /// Abort a curve on the first sample outside its domain
    #[arg(long)]
    strict_domain: bool,

    /// Scale the drawing to the current range instead of 20 pixels per unit
    #[arg(long)]
    fit: bool,

    /// Do not draw tick and axis labels
    #[arg(long)]
    no_labels: bool,

    /// Read menu input from stdin and print to stdout, without the terminal UI
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Funcplot");
    }

    let mut config = PlotConfig::default();
    config.sampling.num_points = args.points as usize;

    let policy = if args.strict_domain {
        DomainPolicy::Strict
    } else {
        DomainPolicy::SkipUndefined
    };
    tracing::info!(
        "Sampling {} segments per curve, {} domain policy",
        config.sampling.num_points,
        policy.name()
    );

    let options = AppOptions {
        policy,
        fit_viewport: args.fit,
        show_labels: !args.no_labels,
    };

    let mut app = match args.load {
        Some(ref path) => {
            let mut app = App::new(config, options);
            if let Err(e) = app.apply(Command::Load(path.clone())) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            app
        },
        None => App::with_default_curves(config, options),
    };

    if args.headless {
        headless::run(&mut app, io::stdin().lock(), &mut io::stdout().lock())?;
    } else {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = run_app(&mut terminal, &mut app);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        if let Err(err) = res {
            eprintln!("Error: {}", err);
        }
    }

    if args.log.is_some() {
        tracing::info!("Funcplot exited");
    }

    Ok(())
}

/// Render, poll input without blocking, then apply queued commands.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Submit the current line to the menu
                    (_, KeyCode::Enter) => {
                        let line = std::mem::take(&mut app.input);
                        app.submit_line(&line);
                    },
                    (_, KeyCode::Backspace) => {
                        app.input.pop();
                    },

                    // Escape - back to the main menu
                    (_, KeyCode::Esc) => {
                        app.input.clear();
                        if !app.menu.is_awaiting_choice() {
                            app.menu.cancel();
                            app.info("Cancelled");
                        }
                    },

                    (KeyModifiers::NONE, KeyCode::Char(c))
                    | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                        app.input.push(c);
                    },

                    _ => {},
                }
            }
        }

        app.process_commands();
    }

    Ok(())
}
