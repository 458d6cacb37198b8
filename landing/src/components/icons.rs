//! Inline SVG icons.
//!
//! Stroke icons drawn on a 24x24 grid in the style of
//! [Lucide](https://lucide.dev/). Each icon is a list of path data strings;
//! circles are written as two arcs so every shape is a `<path>`.

use leptos::prelude::*;

/// Renders a stroke icon from its path data.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon paths=icons::TRUCK size="18" /> }
/// ```
#[component]
pub fn Icon(
    /// Path data (the `d` attribute of each `<path>`)
    paths: &'static [&'static str],
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            {paths.iter().map(|d| view! { <path d=*d></path> }).collect_view()}
        </svg>
    }
}

pub const TRUCK: &[&str] = &[
    "M14 18V6a2 2 0 0 0-2-2H4a2 2 0 0 0-2 2v11a1 1 0 0 0 1 1h2",
    "M15 18H9",
    "M19 18h2a1 1 0 0 0 1-1v-3.65a1 1 0 0 0-.22-.624l-3.48-4.35A1 1 0 0 0 17.52 8H14",
    "M19 18a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
    "M9 18a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
];

pub const FUEL: &[&str] = &[
    "M3 22h12",
    "M4 9h10",
    "M14 22V4a2 2 0 0 0-2-2H6a2 2 0 0 0-2 2v18",
    "M14 13h2a2 2 0 0 1 2 2v2a2 2 0 0 0 2 2a2 2 0 0 0 2-2V9.83a2 2 0 0 0-.59-1.42L18 5",
];

pub const ACTIVITY: &[&str] = &["M22 12h-4l-3 9L9 3l-3 9H2"];

pub const RECEIPT: &[&str] = &[
    "M4 2v20l2-1 2 1 2-1 2 1 2-1 2 1 2-1 2 1V2l-2 1-2-1-2 1-2-1-2 1-2-1-2 1Z",
    "M16 8h-6a2 2 0 1 0 0 4h4a2 2 0 1 1 0 4H8",
    "M12 17.5v-11",
];

pub const SHIELD_CHECK: &[&str] = &[
    "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
    "m9 12 2 2 4-4",
];

pub const GAUGE: &[&str] = &["m12 14 4-4", "M3.34 19a10 10 0 1 1 17.32 0"];

pub const ARROW_RIGHT: &[&str] = &["M5 12h14", "m12 5 7 7-7 7"];

pub const MENU: &[&str] = &["M4 12h16", "M4 6h16", "M4 18h16"];

pub const X: &[&str] = &["M18 6 6 18", "m6 6 12 12"];

pub const CHECK_CIRCLE: &[&str] = &[
    "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0",
    "m9 12 2 2 4-4",
];
