use super::{FeatureParser, ParserContext};
use classlink_common::Semester;
use percent_encoding::percent_decode_str;
use std::collections::HashMap;
use tracing::debug;

/// Parser for the `key=value&...` part of a link.
///
/// Keys are lower-cased, values keep their case. Both are percent-decoded.
/// When a key repeats, the last value wins.
#[derive(Debug, Default)]
pub struct QueryParser;

/// Flat query mapping with lower-case keys.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryFields {
    fields: HashMap<String, String>,
}

impl QueryParser {
    pub fn new() -> Self {
        Self
    }
}

impl FeatureParser for QueryParser {
    type Input = str;
    type Output = QueryFields;

    fn parse(&self, input: &str, _context: &ParserContext) -> QueryFields {
        input
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                // Split on the first '=' only so values may contain '='
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key).to_lowercase(), decode(value))
            })
            .collect()
    }
}

fn decode(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}

impl QueryFields {
    /// Value for `key`. Empty values count as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn query(&self) -> Option<&str> {
        self.get("query")
    }

    /// The `semester` field, dropped when it does not parse.
    pub fn semester(&self, context: &ParserContext) -> Option<Semester> {
        let raw = self.get("semester")?;
        match raw.parse() {
            Ok(semester) => Some(semester),
            Err(err) => {
                debug!(link = %context.link, %err, "ignoring semester");
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for QueryFields {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        QueryFields {
            fields: iter.into_iter().collect(),
        }
    }
}
