//! # fleetos-landing
//!
//! The FleetOS marketing page as [Leptos](https://leptos.dev/) components.
//!
//! The same component tree renders two ways:
//!
//! - **`csr`** - compiled to WASM by trunk and mounted in the browser, where
//!   the mobile menu toggle is live.
//! - **`ssr`** (default) - rendered to a static HTML document with
//!   [`render_page`], used by the `fleetos-render` CLI and the tests.
//!
//! ## Quick Start
//!
//! ```rust
//! use fleetos_landing::{render_page, PageOptions};
//!
//! let html = render_page(&PageOptions {
//!     year: 2025,
//!     ..Default::default()
//! });
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("© 2025 FleetOS"));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - copy and sample data as constants
//! - [`components`] - leaf components (`Icon`, `Stat`, `FeatureCard`)
//! - [`sections`] - page sections composed by [`App`]
//! - [`menu`] - the mobile menu's open/closed flag

pub mod components;
#[cfg(feature = "csr")]
pub mod console;
pub mod content;
pub mod menu;
pub mod sections;

use leptos::prelude::*;
use sections::{current_year, Cta, Features, Footer, Hero, NavBar};

/// The whole page: nav, hero, features, contact, footer - always in that order.
#[component]
pub fn App(
    /// Year for the footer copyright line
    #[prop(default = current_year())]
    year: i32,
) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white text-gray-900">
            <NavBar />
            <Hero />
            <Features />
            <Cta />
            <Footer year=year />
        </div>
    }
}

/// Settings for a standalone HTML document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// Contents of `<title>`
    pub title: String,
    /// Stylesheet carrying the utility classes (compiled Tailwind output)
    pub stylesheet_href: String,
    /// Year for the footer copyright line
    pub year: i32,
}

pub const DEFAULT_TITLE: &str = "FleetOS | Connected Fleet Operations";
pub const DEFAULT_STYLESHEET: &str = "/tailwind.css";

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            stylesheet_href: DEFAULT_STYLESHEET.to_string(),
            year: current_year(),
        }
    }
}

#[cfg(feature = "ssr")]
#[component]
fn PageDocument(title: String, stylesheet_href: String, year: i32) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta
                    name="description"
                    content="Connected trucking platform: predictive maintenance, fuel intelligence and GST-compliant invoicing."
                />
                <title>{title}</title>
                <link rel="stylesheet" href=stylesheet_href />
            </head>
            <body>
                <App year=year />
            </body>
        </html>
    }
}

/// Render the complete landing page as an HTML document.
///
/// Rendering happens inside a fresh reactive [`Owner`], so the signals the
/// page creates are dropped with it once the string is produced.
///
/// # Example
///
/// ```rust
/// use fleetos_landing::{render_page, PageOptions};
///
/// let html = render_page(&PageOptions::default());
/// assert!(html.contains(r#"id="contact""#));
/// ```
#[cfg(feature = "ssr")]
pub fn render_page(options: &PageOptions) -> String {
    let options = options.clone();
    let html = render_html(move || {
        view! {
            <PageDocument
                title=options.title
                stylesheet_href=options.stylesheet_href
                year=options.year
            />
        }
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Build a view under its own owner and render it to a string.
#[cfg(feature = "ssr")]
pub(crate) fn render_html<V>(build: impl FnOnce() -> V) -> String
where
    V: leptos::tachys::view::RenderHtml,
{
    use leptos::tachys::view::RenderHtml;

    let owner = Owner::new();
    owner.with(|| build().to_html())
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn page() -> String {
        render_page(&PageOptions {
            year: 2025,
            ..Default::default()
        })
    }

    /// Every `href="#..."` fragment in the document, excluding bare `#`.
    fn in_page_targets(html: &str) -> BTreeSet<String> {
        html.match_indices(r##"href="#"##)
            .filter_map(|(start, m)| {
                let rest = &html[start + m.len()..];
                let end = rest.find('"')?;
                let target = &rest[..end];
                (!target.is_empty()).then(|| target.to_string())
            })
            .collect()
    }

    #[test]
    fn renders_complete_document() {
        let html = page();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains(DEFAULT_TITLE));
        assert!(html.contains(DEFAULT_STYLESHEET));
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let html = page();

        let markers = [
            "<header",
            r#"id="home""#,
            r#"id="features""#,
            r#"id="contact""#,
            "<footer",
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|m| html.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn every_in_page_link_resolves() {
        let html = page();
        let targets = in_page_targets(&html);

        assert!(targets.contains("fuel"));
        for target in &targets {
            assert!(
                html.contains(&format!(r#"id="{target}""#)),
                "#{target} has no matching element"
            );
        }
    }

    #[test]
    fn nav_targets_cover_every_nav_item() {
        let targets = in_page_targets(&page());
        let expected: BTreeSet<String> = content::NAV_ITEMS
            .iter()
            .map(|item| item.href.trim_start_matches('#').to_string())
            .collect();
        assert!(expected.is_subset(&targets));
    }

    #[test]
    fn mobile_menu_closed_on_mount() {
        let html = page();
        assert!(!html.contains(r#"id="mobile-menu""#));
    }

    #[test]
    fn renders_page_data() {
        let html = page();

        for row in content::FLEET_ROWS {
            assert!(html.contains(row.vehicle));
        }
        for stat in content::HERO_STATS {
            assert!(html.contains(stat.value));
        }
        for benefit in content::CTA_BENEFITS {
            assert!(html.contains(benefit));
        }
        assert!(html.contains("© 2025 FleetOS. All rights reserved."));
    }

    #[test]
    fn page_options_override_head() {
        let html = render_page(&PageOptions {
            title: "Fleet demo".into(),
            stylesheet_href: "assets/site.css".into(),
            year: 2030,
        });

        assert!(html.contains("<title>"));
        assert!(html.contains("Fleet demo"));
        assert!(html.contains(r#"href="assets/site.css""#));
        assert!(html.contains("© 2030"));
    }
}
