pub mod query_parser;
pub mod review_draft_parser;
pub mod section_parser;
pub mod trailing_action_parser;

pub use query_parser::{QueryFields, QueryParser};
pub use review_draft_parser::ReviewDraftParser;
pub use section_parser::SectionParser;
pub use trailing_action_parser::TrailingActionParser;

/// Represents the shared context between different parsers
#[derive(Debug, Default)]
pub struct ParserContext {
    /// The link being decoded, after prefix stripping. Used in log events.
    pub link: String,
    /// Non-empty, percent-decoded path segments in order
    pub segments: Vec<String>,
    /// Query fields of the link
    pub query: QueryFields,
}

impl ParserContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_link(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            ..Self::default()
        }
    }
}

/// The core trait that all feature parsers implement.
///
/// Feature parsers never fail. Input they cannot make sense of produces an
/// empty output, and the caller falls back to a default.
pub trait FeatureParser {
    /// What this parser reads
    type Input: ?Sized;
    /// The type of output this parser produces
    type Output;

    /// Parse the input using the given context
    ///
    /// # Arguments
    /// * `input` - The input to parse
    /// * `context` - The shared parser context
    fn parse(&self, input: &Self::Input, context: &ParserContext) -> Self::Output;
}
