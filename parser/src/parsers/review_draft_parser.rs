use super::{FeatureParser, ParserContext, QueryFields};
use classlink_common::{Rating, ReviewDraft};
use tracing::debug;

/// Rebuilds a partially filled review from query fields.
///
/// Ratings that are not a number in 1..=5 are dropped, never clamped.
/// Instructor and comment are copied verbatim.
#[derive(Debug, Default)]
pub struct ReviewDraftParser;

impl ReviewDraftParser {
    pub fn new() -> Self {
        Self
    }

    fn rating(&self, key: &str, input: &QueryFields, context: &ParserContext) -> Option<Rating> {
        let raw = input.get(key)?;
        match raw.parse() {
            Ok(rating) => Some(rating),
            Err(err) => {
                debug!(link = %context.link, field = key, %err, "dropping rating");
                None
            }
        }
    }
}

impl FeatureParser for ReviewDraftParser {
    type Input = QueryFields;
    type Output = ReviewDraft;

    fn parse(&self, input: &QueryFields, context: &ParserContext) -> ReviewDraft {
        ReviewDraft {
            enjoyment: self.rating("enjoyment", input, context),
            difficulty: self.rating("difficulty", input, context),
            workload: self.rating("workload", input, context),
            value: self.rating("value", input, context),
            instructor: input.get("instructor").map(str::to_string),
            comment: input.get("comment").map(str::to_string),
            semester: input.semester(context),
        }
    }
}
