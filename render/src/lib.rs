//! # fleetos-render
//!
//! Renders the FleetOS landing page to a static `index.html` using the
//! server-side rendering path of [`fleetos_landing`].
//!
//! ```rust,no_run
//! use fleetos_render::{build_site, config::SiteConfig};
//!
//! let index = build_site(&SiteConfig::default())?;
//! println!("wrote {}", index.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::SiteConfig;
use tracing::{debug, info};

/// File name of the rendered page inside the output directory
pub const INDEX_FILE: &str = "index.html";

/// Render the page for `config` without touching the filesystem.
pub fn render(config: &SiteConfig) -> String {
    let options = config.page_options();
    debug!(
        title = %options.title,
        stylesheet = %options.stylesheet_href,
        year = options.year,
        "rendering landing page"
    );
    fleetos_landing::render_page(&options)
}

/// Render the page and write it to `<output_dir>/index.html`.
///
/// Returns the path of the written file.
pub fn build_site(config: &SiteConfig) -> Result<PathBuf> {
    let html = render(config);

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let index = config.output_dir.join(INDEX_FILE);
    fs::write(&index, &html).with_context(|| format!("failed to write {}", index.display()))?;

    info!("Wrote {} ({} bytes)", index.display(), html.len());
    Ok(index)
}
