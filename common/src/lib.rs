mod section;
pub use section::*;

mod screen;
pub use screen::*;

mod semester;
pub use semester::*;

mod review_draft;
pub use review_draft::*;

mod params;
pub use params::*;

mod navigation_state;
pub use navigation_state::*;

pub mod routes;
pub use routes::{FormatRule, TrailingAction};

mod config;
pub use config::*;

pub mod test_case;
