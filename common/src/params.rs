use crate::{ReviewDraft, Semester};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Identifies a single class offered by a department.
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone, Hash)]
pub struct ClassId {
    pub school: String,
    pub department: String,
    pub number: String,
}

impl ClassId {
    pub fn new(
        school: impl Into<String>,
        department: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            school: school.into(),
            department: department.into(),
            number: number.into(),
        }
    }

    pub fn to_uppercase(&self) -> ClassId {
        ClassId::new(
            self.school.to_uppercase(),
            self.department.to_uppercase(),
            self.number.to_uppercase(),
        )
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {}", self.school, self.department, self.number)
    }
}

/// Account list a class was opened from, used as the path prefix for
/// class screens in the Me section.
#[derive(Debug, Default, Serialize, Deserialize, Eq, PartialEq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClassList {
    #[default]
    Starred,
    Reviewed,
}

impl ClassList {
    pub fn segment(&self) -> &'static str {
        match self {
            ClassList::Starred => "starred",
            ClassList::Reviewed => "reviewed",
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
#[error("unknown class list `{0}`")]
pub struct UnknownClassList(pub String);

impl FromStr for ClassList {
    type Err = UnknownClassList;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "starred" => Ok(ClassList::Starred),
            "reviewed" => Ok(ClassList::Reviewed),
            _ => Err(UnknownClassList(s.to_string())),
        }
    }
}

/// Parameters attached to a screen. Which fields matter depends on the
/// screen; unused fields stay empty.
#[derive(Debug, Default, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub struct ScreenParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<Semester>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_signing_up: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<ReviewDraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ClassList>,
}

impl ScreenParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_class(class: &ClassId) -> Self {
        Self::default().with_class(class)
    }

    pub fn with_class(mut self, class: &ClassId) -> Self {
        self.school = Some(class.school.clone());
        self.department = Some(class.department.clone());
        self.number = Some(class.number.clone());
        self
    }

    pub fn with_school(mut self, school: impl Into<String>) -> Self {
        self.school = Some(school.into());
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_semester(mut self, semester: Semester) -> Self {
        self.semester = Some(semester);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_review(mut self, review: ReviewDraft) -> Self {
        self.review = Some(review);
        self
    }

    pub fn with_list(mut self, list: ClassList) -> Self {
        self.list = Some(list);
        self
    }

    pub fn signing_up(mut self, is_signing_up: bool) -> Self {
        self.is_signing_up = is_signing_up;
        self
    }

    /// The full class identifier, if all three parts are present.
    pub fn class_id(&self) -> Option<ClassId> {
        match (&self.school, &self.department, &self.number) {
            (Some(school), Some(department), Some(number)) => {
                Some(ClassId::new(school, department, number))
            }
            _ => None,
        }
    }

    /// Canonical form of the params as a link carries them.
    ///
    /// Empty free text becomes absent. A link holds a single semester, so the
    /// draft's semester is folded into `semester` and a draft with nothing
    /// else in it is dropped.
    pub fn normalized(mut self) -> Self {
        self.query = self.query.filter(|q| !q.is_empty());
        if let Some(draft) = self.review.take().map(ReviewDraft::normalized) {
            self.semester = self.semester.or(draft.semester);
            let draft = ReviewDraft {
                semester: self.semester,
                ..draft
            };
            self.review = Some(draft).filter(ReviewDraft::has_answers);
        }
        self
    }
}
