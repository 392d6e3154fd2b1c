use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Academic term, identified in links by a two-letter code.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Term {
    Ja,
    Sp,
    Su,
    Fa,
}

impl Term {
    pub fn code(&self) -> &'static str {
        match self {
            Term::Ja => "ja",
            Term::Sp => "sp",
            Term::Su => "su",
            Term::Fa => "fa",
        }
    }

    pub fn from_code(code: &str) -> Option<Term> {
        match code.to_ascii_lowercase().as_str() {
            "ja" => Some(Term::Ja),
            "sp" => Some(Term::Sp),
            "su" => Some(Term::Su),
            "fa" => Some(Term::Fa),
            _ => None,
        }
    }
}

/// A term in a given year, e.g. `fa23` for Fall 2023.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Hash, PartialOrd, Ord)]
pub struct Semester {
    pub year: u16,
    pub term: Term,
}

impl Semester {
    pub fn new(term: Term, year: u16) -> Self {
        Self { year, term }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum SemesterError {
    #[error("semester `{0}` is too short")]
    TooShort(String),
    #[error("unknown term code in `{0}`")]
    UnknownTerm(String),
    #[error("invalid year in `{0}`")]
    InvalidYear(String),
}

impl FromStr for Semester {
    type Err = SemesterError;

    /// Parses `<term><yy>` or a term with the full year. Two-digit years are in the 2000s.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() < 3 || !s.is_char_boundary(2) {
            return Err(SemesterError::TooShort(s.to_string()));
        }

        let (code, year) = s.split_at(2);
        let term = Term::from_code(code).ok_or_else(|| SemesterError::UnknownTerm(s.to_string()))?;

        let digits = year.len();
        if !matches!(digits, 2 | 4 | 5) || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SemesterError::InvalidYear(s.to_string()));
        }
        let year = year
            .parse::<u16>()
            .map_err(|_| SemesterError::InvalidYear(s.to_string()))?;

        Ok(Semester::new(term, if digits == 2 { 2000 + year } else { year }))
    }
}

impl fmt::Display for Semester {
    /// Two-digit years only cover the 2000s; other years are written in full.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (2000..=2099).contains(&self.year) {
            write!(f, "{}{:02}", self.term.code(), self.year % 100)
        } else {
            write!(f, "{}{:04}", self.term.code(), self.year)
        }
    }
}
