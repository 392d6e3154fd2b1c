use crate::FormatError;
use classlink_common::routes::{self, CLASS_SEGMENTS};
use classlink_common::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::trace;

/// Everything except RFC 3986 unreserved characters is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encodes routes into canonical links.
///
/// Paths have no leading `/`; use [`Formatter::to_url`] for a full URL.
#[derive(Debug, Default, Clone)]
pub struct Formatter {
    config: LinkConfig,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LinkConfig) -> Self {
        Self { config }
    }

    /// Writes the link for `screen` in `section`.
    pub fn format(
        &self,
        section: Section,
        screen: Screen,
        params: &ScreenParams,
    ) -> Result<String, FormatError> {
        let rule = routes::format_rule(section, screen)
            .ok_or(FormatError::ScreenNotInSection { section, screen })?;

        // Draft fields are only written for Review.
        let mut params = params.clone();
        if screen != Screen::Review {
            params.review = None;
        }
        let params = &params.normalized();

        let mut segments: Vec<String> = Vec::new();
        match rule {
            FormatRule::Entry(segment) => segments.push(segment.to_string()),
            FormatRule::ClassDepth(depth) => {
                segments.push(routes::class_prefix(section, params.list).to_string());
                segments.extend(class_segments(screen, params, depth)?);
            }
            FormatRule::Action(action) => {
                segments.push(routes::class_prefix(section, params.list).to_string());
                segments.extend(class_segments(screen, params, CLASS_SEGMENTS)?);
                segments.push(action.literal().to_string());
            }
            FormatRule::Auth => {
                // Without a class the link collapses to the bare literal.
                if params.class_id().is_some() {
                    segments.push(routes::class_prefix(section, params.list).to_string());
                    segments.extend(class_segments(screen, params, CLASS_SEGMENTS)?);
                }
                segments.push(TrailingAction::auth(params.is_signing_up).literal().to_string());
            }
        }

        let mut path = segments.join("/");
        let query = query_pairs(params);
        if !query.is_empty() {
            path.push('?');
            path.push_str(&query.join("&"));
        }

        trace!(%section, %screen, path = %path, "encoded link");
        Ok(path)
    }

    /// Writes the link for the screen currently shown in `state`.
    pub fn format_state(&self, state: &NavigationState) -> Result<String, FormatError> {
        let route = state.current().ok_or(FormatError::EmptyState)?;
        self.format(state.section, route.screen, &route.params)
    }

    /// Prepends the configured base URL, if any.
    pub fn to_url(&self, path: &str) -> String {
        self.config.join_url(path)
    }
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// First `depth` class identifier segments, percent-encoded.
fn class_segments(
    screen: Screen,
    params: &ScreenParams,
    depth: usize,
) -> Result<Vec<String>, FormatError> {
    let parts = [
        ("school", &params.school),
        ("department", &params.department),
        ("number", &params.number),
    ];

    parts
        .into_iter()
        .take(depth)
        .map(|(param, value)| {
            value
                .as_deref()
                .map(encode)
                .ok_or(FormatError::MissingParam { screen, param })
        })
        .collect()
}

/// Query pairs of normalized params, in link order.
fn query_pairs(params: &ScreenParams) -> Vec<String> {
    let mut pairs = Vec::new();

    if let Some(query) = &params.query {
        pairs.push(format!("query={}", encode(query)));
    }
    if let Some(semester) = params.semester {
        pairs.push(format!("semester={}", semester));
    }

    if let Some(draft) = &params.review {
        for (key, rating) in draft.ratings() {
            if let Some(rating) = rating {
                pairs.push(format!("{}={}", key, rating));
            }
        }
        let text = [("instructor", &draft.instructor), ("comment", &draft.comment)];
        for (key, value) in text {
            if let Some(value) = value {
                pairs.push(format!("{}={}", key, encode(value)));
            }
        }
    }

    pairs
}
