//! copydeck - bind a content document onto a landing-page skeleton

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use copydeck::{BindOptions, BindOutcome, Binder, DirSource, Page};

#[derive(Parser)]
#[command(name = "copydeck")]
#[command(version, about = "Bind a JSON content document onto an HTML page skeleton", long_about = None)]
#[command(after_help = "EXAMPLES:
    copydeck index.html                     Bind ./content.json, print to stdout
    copydeck index.html -o dist/index.html  Write the bound page to a file
    copydeck index.html -c copy/en.json     Use another content document")]
struct Cli {
    /// Page skeleton (HTML)
    #[arg(value_name = "SKELETON")]
    skeleton: PathBuf,

    /// Content document [default: content.json next to the skeleton]
    #[arg(short, long, value_name = "PATH")]
    content: Option<PathBuf>,

    /// Output file [default: stdout]
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(quiet: bool) {
    let filter = if quiet { "warn" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();
}

fn run(cli: &Cli) -> copydeck::Result<()> {
    let original = fs::read(&cli.skeleton)?;
    let mut page = Page::parse_bytes(&original);

    let (source, options) = content_source(&cli.skeleton, cli.content.as_deref());
    let output = match Binder::new(options).run(&source, &mut page) {
        BindOutcome::Bound(regions) => {
            info!(regions = regions.len(), "content bound");
            page.to_html()?.into_bytes()
        }
        // Already logged; the skeleton's defaults are the fallback page.
        BindOutcome::Skipped(_) => original,
    };

    match &cli.output {
        Some(path) => fs::write(path, &output)?,
        None => io::stdout().lock().write_all(&output)?,
    }
    Ok(())
}

/// Resolve the content document the way a browser would resolve a relative
/// URL: against the skeleton's directory unless a path is given.
fn content_source(skeleton: &Path, content: Option<&Path>) -> (DirSource, BindOptions) {
    let mut options = BindOptions::default();
    let source = match content {
        Some(path) => {
            if let Some(name) = path.file_name() {
                options.content_resource = name.to_string_lossy().into_owned();
            }
            DirSource::beside(path)
        }
        None => DirSource::beside(skeleton),
    };
    (source, options)
}
