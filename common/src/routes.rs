//! Declarative link tables shared by the parser and the formatter.
//!
//! Every table here is a `static` and is never mutated.

use crate::{ClassList, Screen, Section};

/// Number of path segments in a full class identifier
/// (`school/department/number`).
pub const CLASS_SEGMENTS: usize = 3;

/// Literal segment after a full class path that opens an action screen.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub enum TrailingAction {
    Review,
    Schedule,
    SignUp,
    SignIn,
}

impl TrailingAction {
    pub const ALL: [TrailingAction; 4] = [
        TrailingAction::Review,
        TrailingAction::Schedule,
        TrailingAction::SignUp,
        TrailingAction::SignIn,
    ];

    pub fn literal(&self) -> &'static str {
        match self {
            TrailingAction::Review => "review",
            TrailingAction::Schedule => "schedule",
            TrailingAction::SignUp => "sign-up",
            TrailingAction::SignIn => "sign-in",
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            TrailingAction::Review => Screen::Review,
            TrailingAction::Schedule => Screen::Schedule,
            TrailingAction::SignUp | TrailingAction::SignIn => Screen::SignInSignUp,
        }
    }

    /// Literals match exactly; `Review` or `SIGN-UP` are not actions.
    pub fn from_literal(segment: &str) -> Option<TrailingAction> {
        TrailingAction::ALL
            .into_iter()
            .find(|action| action.literal() == segment)
    }

    /// Picks `sign-up` or `sign-in` from the signing-up flag.
    pub fn auth(is_signing_up: bool) -> TrailingAction {
        if is_signing_up {
            TrailingAction::SignUp
        } else {
            TrailingAction::SignIn
        }
    }
}

/// A first path segment and the stack it opens.
#[derive(Debug, PartialEq, Eq)]
pub struct EntryRule {
    pub segment: &'static str,
    pub section: Section,
    /// Screens pushed for this entry, root first.
    pub chain: &'static [Screen],
    /// Whether class identifier segments may follow this entry.
    pub class_run: bool,
    /// List recorded on class screens opened below this entry.
    pub list: Option<ClassList>,
    /// Signing-up flag for entries that open the auth screen directly.
    pub signing_up: Option<bool>,
}

/// Per-section stack layout.
#[derive(Debug, PartialEq, Eq)]
pub struct SectionRule {
    pub section: Section,
    pub root: Screen,
    /// Ancestor screen synthesized once the class run reaches a length.
    pub drill: &'static [(usize, Screen)],
    /// Screens reachable in this section.
    pub catalog: &'static [Screen],
}

/// How a `(Section, Screen)` pair is written as a path.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum FormatRule {
    /// A fixed first segment, e.g. `starred`.
    Entry(&'static str),
    /// The section's class prefix followed by the first `n` class segments.
    ClassDepth(usize),
    /// The full class path followed by a trailing literal.
    Action(TrailingAction),
    /// `sign-in` or `sign-up`, after the full class path when there is one.
    Auth,
}

pub static ENTRIES: &[EntryRule] = &[
    EntryRule {
        segment: "explore",
        section: Section::Explore,
        chain: &[Screen::University],
        class_run: true,
        list: None,
        signing_up: None,
    },
    EntryRule {
        segment: "search",
        section: Section::Search,
        chain: &[Screen::Search],
        class_run: true,
        list: None,
        signing_up: None,
    },
    EntryRule {
        segment: "account",
        section: Section::Me,
        chain: &[Screen::Account],
        class_run: false,
        list: None,
        signing_up: None,
    },
    EntryRule {
        segment: "starred",
        section: Section::Me,
        chain: &[Screen::Account, Screen::Starred],
        class_run: true,
        list: Some(ClassList::Starred),
        signing_up: None,
    },
    EntryRule {
        segment: "reviewed",
        section: Section::Me,
        chain: &[Screen::Account, Screen::Reviewed],
        class_run: true,
        list: Some(ClassList::Reviewed),
        signing_up: None,
    },
    EntryRule {
        segment: "settings",
        section: Section::Me,
        chain: &[Screen::Account, Screen::Settings],
        class_run: false,
        list: None,
        signing_up: None,
    },
    EntryRule {
        segment: "sign-in",
        section: Section::Me,
        chain: &[Screen::Account, Screen::SignInSignUp],
        class_run: false,
        list: None,
        signing_up: Some(false),
    },
    EntryRule {
        segment: "sign-up",
        section: Section::Me,
        chain: &[Screen::Account, Screen::SignInSignUp],
        class_run: false,
        list: None,
        signing_up: Some(true),
    },
];

pub static SECTIONS: [SectionRule; 3] = [
    SectionRule {
        section: Section::Explore,
        root: Screen::University,
        drill: &[(1, Screen::School), (2, Screen::Department), (3, Screen::Detail)],
        catalog: &[
            Screen::University,
            Screen::School,
            Screen::Department,
            Screen::Detail,
            Screen::Review,
            Screen::Schedule,
            Screen::SignInSignUp,
        ],
    },
    SectionRule {
        section: Section::Search,
        root: Screen::Search,
        drill: &[(3, Screen::Detail)],
        catalog: &[
            Screen::Search,
            Screen::Detail,
            Screen::Review,
            Screen::Schedule,
            Screen::SignInSignUp,
        ],
    },
    SectionRule {
        section: Section::Me,
        root: Screen::Account,
        drill: &[(3, Screen::Detail)],
        catalog: &[
            Screen::Account,
            Screen::Starred,
            Screen::Reviewed,
            Screen::Settings,
            Screen::Detail,
            Screen::Review,
            Screen::Schedule,
            Screen::SignInSignUp,
        ],
    },
];

pub static FORMAT_RULES: &[(Section, Screen, FormatRule)] = &[
    (Section::Explore, Screen::University, FormatRule::Entry("explore")),
    (Section::Explore, Screen::School, FormatRule::ClassDepth(1)),
    (Section::Explore, Screen::Department, FormatRule::ClassDepth(2)),
    (Section::Explore, Screen::Detail, FormatRule::ClassDepth(3)),
    (Section::Explore, Screen::Review, FormatRule::Action(TrailingAction::Review)),
    (Section::Explore, Screen::Schedule, FormatRule::Action(TrailingAction::Schedule)),
    (Section::Explore, Screen::SignInSignUp, FormatRule::Auth),
    (Section::Search, Screen::Search, FormatRule::Entry("search")),
    (Section::Search, Screen::Detail, FormatRule::ClassDepth(3)),
    (Section::Search, Screen::Review, FormatRule::Action(TrailingAction::Review)),
    (Section::Search, Screen::Schedule, FormatRule::Action(TrailingAction::Schedule)),
    (Section::Search, Screen::SignInSignUp, FormatRule::Auth),
    (Section::Me, Screen::Account, FormatRule::Entry("account")),
    (Section::Me, Screen::Starred, FormatRule::Entry("starred")),
    (Section::Me, Screen::Reviewed, FormatRule::Entry("reviewed")),
    (Section::Me, Screen::Settings, FormatRule::Entry("settings")),
    (Section::Me, Screen::Detail, FormatRule::ClassDepth(3)),
    (Section::Me, Screen::Review, FormatRule::Action(TrailingAction::Review)),
    (Section::Me, Screen::Schedule, FormatRule::Action(TrailingAction::Schedule)),
    (Section::Me, Screen::SignInSignUp, FormatRule::Auth),
];

/// Looks up the entry for a first path segment, ignoring case.
pub fn entry_for(segment: &str) -> Option<&'static EntryRule> {
    ENTRIES.iter().find(|entry| match entry.signing_up {
        // The signing-up flag only comes from the exact auth literal.
        Some(_) => entry.segment == segment,
        None => entry.segment.eq_ignore_ascii_case(segment),
    })
}

pub fn section_rule(section: Section) -> &'static SectionRule {
    match section {
        Section::Explore => &SECTIONS[0],
        Section::Search => &SECTIONS[1],
        Section::Me => &SECTIONS[2],
    }
}

pub fn catalog(section: Section) -> &'static [Screen] {
    section_rule(section).catalog
}

pub fn format_rule(section: Section, screen: Screen) -> Option<FormatRule> {
    FORMAT_RULES
        .iter()
        .find(|(s, sc, _)| *s == section && *sc == screen)
        .map(|(_, _, rule)| *rule)
}

/// First segment in front of class identifier segments.
pub fn class_prefix(section: Section, list: Option<ClassList>) -> &'static str {
    match section {
        Section::Explore => "explore",
        Section::Search => "search",
        Section::Me => list.unwrap_or_default().segment(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_screen_has_one_format_rule() {
        for section in Section::ALL {
            for screen in catalog(section) {
                let count = FORMAT_RULES
                    .iter()
                    .filter(|(s, sc, _)| *s == section && sc == screen)
                    .count();
                assert_eq!(count, 1, "{section} / {screen}");
            }
        }
    }

    #[test]
    fn test_format_rules_stay_inside_catalog() {
        for (section, screen, _) in FORMAT_RULES {
            assert!(catalog(*section).contains(screen), "{section} / {screen}");
        }
    }

    #[test]
    fn test_entry_chains_start_at_section_root() {
        for entry in ENTRIES {
            assert_eq!(entry.chain.first(), Some(&section_rule(entry.section).root));
        }
    }

    #[test]
    fn test_section_rule_lookup() {
        for section in Section::ALL {
            assert_eq!(section_rule(section).section, section);
        }
    }

    #[test]
    fn test_entry_for_case_rules() {
        assert_eq!(entry_for("Explore").map(|e| e.section), Some(Section::Explore));
        assert_eq!(entry_for("sign-up").and_then(|e| e.signing_up), Some(true));
        assert_eq!(entry_for("SIGN-UP"), None);
        assert_eq!(entry_for("Sign-In"), None);
        assert_eq!(entry_for("home"), None);
    }

    #[test]
    fn test_trailing_action_literals() {
        assert_eq!(TrailingAction::from_literal("review"), Some(TrailingAction::Review));
        assert_eq!(TrailingAction::from_literal("Review"), None);
        assert_eq!(TrailingAction::from_literal("SIGN-UP"), None);
        assert_eq!(TrailingAction::from_literal("sign-up"), Some(TrailingAction::SignUp));
        assert_eq!(TrailingAction::from_literal("signup"), None);
        assert_eq!(TrailingAction::auth(false).literal(), "sign-in");
    }

    #[test]
    fn test_class_prefix() {
        assert_eq!(class_prefix(Section::Explore, Some(ClassList::Reviewed)), "explore");
        assert_eq!(class_prefix(Section::Me, None), "starred");
        assert_eq!(class_prefix(Section::Me, Some(ClassList::Reviewed)), "reviewed");
    }
}
