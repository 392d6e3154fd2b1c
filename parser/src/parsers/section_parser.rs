use super::{FeatureParser, ParserContext};
use classlink_common::routes::{self, EntryRule};
use tracing::debug;

/// Parser for the first path segment.
///
/// This parser is responsible for:
/// - Picking the section a link belongs to
/// - Picking the entry chain pushed for that segment
///
/// Returns `None` for segments that name no entry; the caller falls back to
/// the default section.
#[derive(Debug, Default)]
pub struct SectionParser;

impl SectionParser {
    pub fn new() -> Self {
        Self
    }
}

impl FeatureParser for SectionParser {
    type Input = str;
    type Output = Option<&'static EntryRule>;

    fn parse(&self, input: &str, context: &ParserContext) -> Self::Output {
        let entry = routes::entry_for(input);
        if entry.is_none() {
            debug!(link = %context.link, segment = input, "unknown entry segment");
        }
        entry
    }
}
