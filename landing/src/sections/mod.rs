// Landing page sections, top to bottom

mod cta;
mod dashboard;
mod features;
mod footer;
mod hero;
mod nav;

pub use cta::Cta;
pub use dashboard::DashboardPreview;
pub use features::Features;
pub use footer::{current_year, Footer};
pub use hero::Hero;
pub use nav::NavBar;
