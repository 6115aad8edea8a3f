//! Text Bubbles terminal viewer.
//!
//! ```bash
//! textbubbles notes.txt              # open the viewer
//! textbubbles book.epub --law cubic
//! cat essay.md | textbubbles - --print
//! ```

use clap::Parser;
use std::path::PathBuf;
use textbubbles::app::App;
use textbubbles::engine::{analyze, Config, DisplayConfig, ScaleLaw, SizeConfig};
use textbubbles::input::{self, LoadedDocument};
use textbubbles::ui::{format_report, TuiManager};
use tracing_subscriber::EnvFilter;

/// Visualize text as bubbles sized by word length.
#[derive(Parser)]
#[command(name = "textbubbles", version, about)]
struct Cli {
    /// Text, PDF or EPUB file to open; `-` reads standard input
    path: Option<String>,

    /// Scale law: linear, quadratic or cubic
    #[arg(short, long, default_value = "linear")]
    law: ScaleLaw,

    /// Bubble size multiplier (must be positive)
    #[arg(short, long, default_value_t = SizeConfig::DEFAULT_SCALE)]
    scale: f64,

    /// Gap between bubbles
    #[arg(long, default_value_t = SizeConfig::DEFAULT_SPACING)]
    spacing: f64,

    /// Lay bubbles out on a fixed grid
    #[arg(short, long)]
    gridded: bool,

    /// Print stats and bubble sizes instead of opening the viewer
    #[arg(short, long)]
    print: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file (the viewer never logs to the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "info" } else { "warn" }));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    if let Some(path) = &cli.log_file {
        let file = std::fs::File::create(path)?;
        builder
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .init();
    } else if cli.print {
        builder.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn load(path: &str) -> Result<LoadedDocument, input::LoadError> {
    if path == "-" {
        input::load_stdin()
    } else {
        input::load_path(path)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config = Config {
        size: SizeConfig::new(cli.law, cli.scale, cli.spacing),
        display: DisplayConfig {
            gridded: cli.gridded,
            ..DisplayConfig::default()
        },
    };
    config.size.validate()?;

    let document = cli.path.as_deref().map(load).transpose()?;

    if cli.print {
        let text = document.map(|doc| doc.text).unwrap_or_default();
        let analysis = analyze(&text, &config.size)?;
        print!("{}", format_report(&analysis, &config));
        return Ok(());
    }

    let mut app = App::with_config(config);
    if let Some(doc) = document {
        app.load_document(doc);
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
