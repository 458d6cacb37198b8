//! fleetos-render - write the FleetOS landing page as static HTML.
//!
//! ```bash
//! fleetos-render --out-dir dist --year 2025
//! fleetos-render --config site.toml
//! fleetos-render --stdout > index.html
//! ```

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use fleetos_render::config::{Overrides, SiteConfig};
use fleetos_render::{build_site, render};

#[derive(Parser, Debug)]
#[command(name = "fleetos-render")]
#[command(about = "Render the FleetOS landing page to static HTML")]
#[command(version)]
struct Args {
    /// Site config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for index.html (overrides config)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Page title (overrides config)
    #[arg(long)]
    title: Option<String>,

    /// Stylesheet href (overrides config)
    #[arg(long)]
    stylesheet: Option<String>,

    /// Copyright year (overrides config; defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Print the page to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: Args) -> Result<()> {
    let config = SiteConfig::load_or_default(args.config.as_deref())?.apply(Overrides {
        title: args.title,
        stylesheet: args.stylesheet,
        output_dir: args.out_dir,
        copyright_year: args.year,
    });
    config.validate()?;

    if args.stdout {
        let html = render(&config);
        let mut out = std::io::stdout().lock();
        out.write_all(html.as_bytes())
            .and_then(|()| out.flush())
            .context("failed to write page to stdout")?;
        return Ok(());
    }

    let index = build_site(&config)?;
    info!("Site ready at {}", index.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so --stdout output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[fleetos-render] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
