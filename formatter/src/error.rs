use classlink_common::{Screen, Section};

/// Reasons a route cannot be written as a link. All of them are caller
/// mistakes: a screen asked for in the wrong section or without the
/// parameters its path needs.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("screen {screen} is not part of the {section} section")]
    ScreenNotInSection { section: Section, screen: Screen },
    #[error("screen {screen} needs the `{param}` parameter")]
    MissingParam { screen: Screen, param: &'static str },
    #[error("navigation state has no routes")]
    EmptyState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = FormatError::ScreenNotInSection {
            section: Section::Search,
            screen: Screen::School,
        };
        assert_eq!(err.to_string(), "screen School is not part of the Search section");

        let err = FormatError::MissingParam {
            screen: Screen::Detail,
            param: "number",
        };
        assert_eq!(err.to_string(), "screen Detail needs the `number` parameter");
    }
}
