// algotrace: step-by-step traces of classic algorithms

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use algotrace::engine::{DynAlgorithm, RenderedTrace, TraceConfig, TraceError};
use algotrace::registry::{self, Registry};
use algotrace::ui::App;

/// Generate and replay step-by-step algorithm traces.
#[derive(Parser)]
#[command(name = "algotrace", version, about)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every available algorithm, grouped by family
    List,

    /// Print the full trace of one algorithm
    Trace {
        /// Algorithm id, as shown by `list`
        id: String,

        /// Emit the rendered trace as JSON instead of text
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Replay a trace interactively in the terminal
    Play {
        /// Algorithm id, as shown by `list`
        id: String,

        #[command(flatten)]
        limits: LimitArgs,
    },
}

/// Overrides applied on top of the defaults or the config file
#[derive(Args)]
struct LimitArgs {
    /// JSON file with `max_steps`, `search_max_steps` and `seed`
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for randomly generated instances
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum number of steps in a trace
    #[arg(long)]
    max_steps: Option<usize>,

    /// Maximum number of steps for backtracking searches
    #[arg(long)]
    search_max_steps: Option<usize>,
}

impl LimitArgs {
    fn resolve(&self) -> Result<TraceConfig, TraceError> {
        let mut config = match &self.config {
            Some(path) => TraceConfig::from_json_file(path)?,
            None => TraceConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(max_steps) = self.max_steps {
            config = config.with_max_steps(max_steps);
        }
        if let Some(search_max_steps) = self.search_max_steps {
            config = config.with_search_max_steps(search_max_steps);
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::List => run_list(),
        Commands::Trace { id, json, limits } => {
            limits.resolve().and_then(|config| run_trace(&id, json, &config))
        }
        Commands::Play { id, limits } => limits.resolve().and_then(|config| run_play(&id, &config)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_list() -> Result<(), TraceError> {
    let registry = Registry::new(&TraceConfig::default());
    let mut out = io::stdout().lock();
    for (family, infos) in registry.by_family() {
        writeln!(out, "{}", family)?;
        for info in infos {
            writeln!(out, "  {:<28} {:<36} {}", info.id, info.name, info.complexity)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

#[tracing::instrument(skip(config))]
fn run_trace(id: &str, json: bool, config: &TraceConfig) -> Result<(), TraceError> {
    let trace = registry::find(id, config)?.render(config)?;
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &trace)
            .map_err(|source| TraceError::Serialize { index: 0, source })?;
        writeln!(out)?;
    } else {
        write_text(&mut out, &trace)?;
    }
    Ok(())
}

fn write_text(out: &mut impl Write, trace: &RenderedTrace) -> io::Result<()> {
    writeln!(
        out,
        "{} ({}, {})",
        trace.info.name, trace.info.family, trace.info.complexity
    )?;
    for step in &trace.steps {
        writeln!(out)?;
        match &step.annotation.title {
            Some(title) => writeln!(out, "[{}] {}: {}", step.index, title, step.description)?,
            None => writeln!(out, "[{}] {}", step.index, step.description)?,
        }
        for row in &step.rows {
            writeln!(out, "    {}", row)?;
        }
        if let Some(note) = &step.annotation.note {
            writeln!(out, "    note: {}", note)?;
        }
    }
    if let Some(outcome) = trace.outcome() {
        writeln!(out)?;
        writeln!(out, "{} after {} steps", outcome.label(), trace.len())?;
    }
    Ok(())
}

#[tracing::instrument(skip(config))]
fn run_play(id: &str, config: &TraceConfig) -> Result<(), TraceError> {
    let trace = registry::find(id, config)?.render(config)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(trace);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(TraceError::from)
}
