mod samples;
mod session;
mod source;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use ascii_render::AsciiRenderer;
use clap::Parser;

use samples::{Sample, SAMPLES};
use session::{Pacing, Session};
use source::SourceLoader;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render images from the web as ASCII art in the terminal")]
struct Cli {
    /// Go straight to the prompt without rendering the built-in samples
    #[arg(long, default_value_t = false)]
    skip_samples: bool,
    /// Disable the pauses between steps
    #[arg(long, default_value_t = false)]
    no_pause: bool,
    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,
    /// Log debug output to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loader = SourceLoader::new(Duration::from_secs(cli.timeout))
        .context("failed to create HTTP client")?;
    let pacing = if cli.no_pause { Pacing::none() } else { Pacing::standard() };
    let samples: &[Sample] = if cli.skip_samples { &[] } else { &SAMPLES };

    let session = Session::new(loader, AsciiRenderer::default(), pacing);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    session.run(samples, &mut input, &mut output)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
