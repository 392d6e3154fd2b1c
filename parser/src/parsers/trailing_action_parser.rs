use super::{FeatureParser, ParserContext};
use classlink_common::TrailingAction;

/// Parser for the segment right after a full class path
/// (`review`, `schedule`, `sign-up`, `sign-in`).
#[derive(Debug, Default)]
pub struct TrailingActionParser;

impl TrailingActionParser {
    pub fn new() -> Self {
        Self
    }
}

impl FeatureParser for TrailingActionParser {
    type Input = str;
    type Output = Option<TrailingAction>;

    fn parse(&self, input: &str, _context: &ParserContext) -> Self::Output {
        TrailingAction::from_literal(input.trim())
    }
}
