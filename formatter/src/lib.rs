use classlink_common::*;

mod error;
pub use error::FormatError;

mod formatter;
pub use formatter::Formatter;

/// Encodes `screen` in `section` with the default configuration.
pub fn stringify(
    section: Section,
    screen: Screen,
    params: &ScreenParams,
) -> Result<String, FormatError> {
    Formatter::new().format(section, screen, params)
}
