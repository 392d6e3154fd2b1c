use crate::parsers::{
    FeatureParser, ParserContext, QueryParser, ReviewDraftParser, SectionParser,
    TrailingActionParser,
};
use classlink_common::routes::{self, EntryRule, CLASS_SEGMENTS};
use classlink_common::*;
use percent_encoding::percent_decode_str;
use tracing::{debug, trace};

/// Decodes links into navigation states.
///
/// Decoding is total: anything that cannot be understood degrades to the
/// root screen of the best-guess section.
#[derive(Debug, Default, Clone)]
pub struct Parser {
    config: LinkConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LinkConfig) -> Self {
        Self { config }
    }

    pub fn parse<A>(&self, link: A) -> NavigationState
    where
        A: AsRef<str>,
    {
        let link = self.config.strip_prefix(link.as_ref().trim());
        let link = link.split_once('#').map_or(link, |(link, _)| link);
        let (path, query) = link.split_once('?').unwrap_or((link, ""));

        let mut context = ParserContext::with_link(link);
        context.segments = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
            .collect();
        context.query = QueryParser::new().parse(query, &context);

        let state = match context.segments.first() {
            Some(first) => match SectionParser::new().parse(first, &context) {
                Some(entry) => self.build_state(entry, &context),
                None => Self::fallback(&context),
            },
            None => Self::fallback(&context),
        };

        trace!(link, screens = ?state.screens(), "decoded link");
        state
    }

    /// Root of the default section, carrying the link's shared fields.
    fn fallback(context: &ParserContext) -> NavigationState {
        let section = Section::default();
        let root = routes::section_rule(section).root;
        if !context.segments.is_empty() {
            debug!(link = %context.link, "falling back to the {} root", section);
        }
        NavigationState::new(section, vec![Route::new(root, Self::shared_params(context))])
    }

    /// Semester and query are handed to every screen in the chain.
    fn shared_params(context: &ParserContext) -> ScreenParams {
        ScreenParams {
            semester: context.query.semester(context),
            query: context.query.query().map(str::to_string),
            ..ScreenParams::default()
        }
    }

    fn build_state(&self, entry: &'static EntryRule, context: &ParserContext) -> NavigationState {
        let shared = Self::shared_params(context);

        let mut stack: Vec<Route> = entry
            .chain
            .iter()
            .map(|screen| Route::new(*screen, shared.clone()))
            .collect();

        if let (Some(signing_up), Some(last)) = (entry.signing_up, stack.last_mut()) {
            last.params.is_signing_up = signing_up;
        }

        if !entry.class_run {
            if context.segments.len() > 1 {
                debug!(link = %context.link, entry = entry.segment, "ignoring segments after entry");
            }
            return NavigationState::new(entry.section, stack);
        }

        // Class identifiers are case-insensitive; the app keys them upper-case.
        let class: Vec<String> = context.segments[1..]
            .iter()
            .take(CLASS_SEGMENTS)
            .map(|segment| segment.to_uppercase())
            .collect();

        let rule = routes::section_rule(entry.section);
        for (depth, screen) in rule.drill {
            if class.len() >= *depth {
                stack.push(Route::new(*screen, Self::class_params(&shared, &class[..*depth], entry)));
            }
        }

        // Only the segment right after a full class path may be an action.
        if class.len() == CLASS_SEGMENTS {
            let action = context
                .segments
                .get(1 + CLASS_SEGMENTS)
                .and_then(|segment| TrailingActionParser::new().parse(segment, context));

            if let Some(action) = action {
                let mut params = Self::class_params(&shared, &class, entry);
                match action {
                    TrailingAction::Review => {
                        let draft = ReviewDraftParser::new().parse(&context.query, context);
                        params.review = Some(draft);
                    }
                    TrailingAction::SignUp => params.is_signing_up = true,
                    TrailingAction::SignIn | TrailingAction::Schedule => {}
                }
                stack.push(Route::new(action.screen(), params.normalized()));
            }

            if context.segments.len() > 2 + CLASS_SEGMENTS {
                debug!(link = %context.link, "ignoring trailing segments");
            }
        }

        NavigationState::new(entry.section, stack)
    }

    fn class_params(shared: &ScreenParams, class: &[String], entry: &EntryRule) -> ScreenParams {
        ScreenParams {
            school: class.first().cloned(),
            department: class.get(1).cloned(),
            number: class.get(2).cloned(),
            list: entry.list,
            ..shared.clone()
        }
    }
}
