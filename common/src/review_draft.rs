use crate::Semester;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A 1 to 5 score given to one aspect of a class.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Hash, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Rating> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Rating(value))
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum RatingError {
    #[error("rating `{0}` is not a number")]
    NotANumber(String),
    #[error("rating {0} is outside 1..=5")]
    OutOfRange(u8),
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or(RatingError::OutOfRange(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| RatingError::NotANumber(s.to_string()))?;
        Rating::try_from(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A review the user started writing but has not submitted.
#[derive(Debug, Default, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct ReviewDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enjoyment: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Rating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<Semester>,
}

impl ReviewDraft {
    pub fn is_empty(&self) -> bool {
        *self == ReviewDraft::default()
    }

    /// Whether the user entered anything besides the semester.
    pub fn has_answers(&self) -> bool {
        self.ratings().iter().any(|(_, rating)| rating.is_some())
            || self.instructor.is_some()
            || self.comment.is_some()
    }

    /// Ratings in link order, paired with their query key.
    pub fn ratings(&self) -> [(&'static str, Option<Rating>); 4] {
        [
            ("enjoyment", self.enjoyment),
            ("difficulty", self.difficulty),
            ("workload", self.workload),
            ("value", self.value),
        ]
    }

    /// Empty free text is the same as no text.
    pub fn normalized(mut self) -> Self {
        self.instructor = self.instructor.filter(|s| !s.is_empty());
        self.comment = self.comment.filter(|s| !s.is_empty());
        self
    }
}
