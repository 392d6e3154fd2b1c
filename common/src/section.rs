use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Top-level navigation area. Exactly one is active at a time.
#[derive(Debug, Default, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Hash)]
pub enum Section {
    #[default]
    Explore,
    Search,
    Me,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Explore, Section::Search, Section::Me];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Explore => "Explore",
            Section::Search => "Search",
            Section::Me => "Me",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
#[error("unknown section `{0}`")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
