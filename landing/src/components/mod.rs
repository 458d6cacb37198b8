//! Leaf display components shared by the page sections.
//!
//! # Component Hierarchy
//!
//! ```text
//! App
//! ├── NavBar
//! ├── Hero
//! │   └── DashboardPreview
//! │       └── Stat (x3)
//! ├── Features
//! │   └── FeatureCard (x4)
//! ├── Cta
//! └── Footer
//! ```

mod feature_card;
pub mod icons;
mod stat;

pub use feature_card::FeatureCard;
pub use icons::Icon;
pub use stat::Stat;
