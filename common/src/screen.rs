use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A view inside a section's navigation stack.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Screen {
    University,
    School,
    Department,
    Search,
    Detail,
    Review,
    Schedule,
    SignInSignUp,
    Account,
    Starred,
    Reviewed,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 12] = [
        Screen::University,
        Screen::School,
        Screen::Department,
        Screen::Search,
        Screen::Detail,
        Screen::Review,
        Screen::Schedule,
        Screen::SignInSignUp,
        Screen::Account,
        Screen::Starred,
        Screen::Reviewed,
        Screen::Settings,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Screen::University => "University",
            Screen::School => "School",
            Screen::Department => "Department",
            Screen::Search => "Search",
            Screen::Detail => "Detail",
            Screen::Review => "Review",
            Screen::Schedule => "Schedule",
            Screen::SignInSignUp => "SignInSignUp",
            Screen::Account => "Account",
            Screen::Starred => "Starred",
            Screen::Reviewed => "Reviewed",
            Screen::Settings => "Settings",
        }
    }

    /// Screens that always address a single class.
    pub fn needs_class(&self) -> bool {
        matches!(self, Screen::Detail | Screen::Review | Screen::Schedule)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
#[error("unknown screen `{0}`")]
pub struct UnknownScreen(pub String);

impl FromStr for Screen {
    type Err = UnknownScreen;

    /// Accepts the screen name in any case, with or without dashes
    /// (`SignInSignUp`, `sign-in-sign-up`, `signinsignup`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();

        Screen::ALL
            .into_iter()
            .find(|screen| screen.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
