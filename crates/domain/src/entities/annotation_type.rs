//! Annotation type entity - the definition a study attaches to participants,
//! collection events, or specimen links.
//!
//! An annotation type says what kind of value a form field holds (text,
//! number, date-time, or a selection from fixed options) and whether the
//! field must be filled in.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::{AnnotationTypeId, StudyId};

/// Kind of value an annotation holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationValueType {
    Text,
    Number,
    DateTime,
    Select,
    /// Unrecognised value type for forward compatibility
    #[serde(other)]
    Unknown,
}

impl AnnotationValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Number => "Number",
            Self::DateTime => "DateTime",
            Self::Select => "Select",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AnnotationValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnnotationValueType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Text" => Ok(Self::Text),
            "Number" => Ok(Self::Number),
            "DateTime" => Ok(Self::DateTime),
            "Select" => Ok(Self::Select),
            _ => Err(DomainError::invalid_value_type(format!(
                "Invalid value type '{}'. Valid types: Text, Number, DateTime, Select",
                s
            ))),
        }
    }
}

/// How many options a Select annotation may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// `maxValueCount == 1`
    Single,
    /// `maxValueCount > 1`
    Multiple,
}

impl SelectionMode {
    /// Anything other than 1 or more than 1 is a malformed annotation type.
    pub fn from_max_value_count(count: Option<i32>) -> Result<Self, DomainError> {
        match count {
            Some(1) => Ok(Self::Single),
            Some(n) if n > 1 => Ok(Self::Multiple),
            Some(n) => Err(DomainError::invalid_state(format!(
                "invalid max value count for annotation: {}",
                n
            ))),
            None => Err(DomainError::invalid_state(
                "invalid max value count for annotation: not set",
            )),
        }
    }
}

/// Definition of an annotation type as delivered by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationTypeDescriptor {
    pub id: AnnotationTypeId,
    #[serde(default)]
    pub study_id: Option<StudyId>,
    #[serde(default)]
    pub version: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub value_type: AnnotationValueType,
    /// Absent for annotation types whose owner decides (e.g. collection event types)
    #[serde(default)]
    pub required: Option<bool>,
    /// Select only
    #[serde(default)]
    pub options: Vec<String>,
    /// Select only
    #[serde(default)]
    pub max_value_count: Option<i32>,
}

impl AnnotationTypeDescriptor {
    pub fn new(
        id: impl Into<AnnotationTypeId>,
        name: impl Into<String>,
        value_type: AnnotationValueType,
    ) -> Self {
        Self {
            id: id.into(),
            study_id: None,
            version: None,
            name: name.into(),
            description: None,
            value_type,
            required: None,
            options: Vec::new(),
            max_value_count: None,
        }
    }

    /// A Select annotation type with the given options
    pub fn select(
        id: impl Into<AnnotationTypeId>,
        name: impl Into<String>,
        max_value_count: i32,
        options: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let mut descriptor = Self::new(id, name, AnnotationValueType::Select);
        descriptor.max_value_count = Some(max_value_count);
        descriptor.options = options.into_iter().map(Into::into).collect();
        descriptor
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_study(mut self, study_id: impl Into<StudyId>) -> Self {
        self.study_id = Some(study_id.into());
        self
    }

    pub fn with_version(mut self, version: u64) -> Self {
        self.version = Some(version);
        self
    }

    /// Selection mode of a Select annotation type
    pub fn selection_mode(&self) -> Result<SelectionMode, DomainError> {
        SelectionMode::from_max_value_count(self.max_value_count)
    }

    /// Whether the form keeps a checkbox list rather than a single choice
    pub fn is_multi_select(&self) -> bool {
        self.value_type == AnnotationValueType::Select
            && self.max_value_count.is_some_and(|n| n > 1)
    }
}

/// The study entity an annotation type is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationTypeKind {
    Participant,
    CollectionEvent,
    SpecimenLink,
}

impl AnnotationTypeKind {
    /// REST path segment under `studies/{studyId}/`
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Participant => "pannottypes",
            Self::CollectionEvent => "ceannottypes",
            Self::SpecimenLink => "slannottypes",
        }
    }

    /// Explanation shown when an in-use annotation type cannot be changed
    pub fn in_use_message(&self) -> &'static str {
        match self {
            Self::Participant => {
                "This annotation type is in use by participants. \
                 If you want to make changes to the annotation type, \
                 it must first be removed from the participants that use it."
            }
            Self::CollectionEvent => {
                "This annotation type is in use by a collection event type. \
                 If you want to make changes to the annotation type, \
                 it must first be removed from the collection event type(s) that use it."
            }
            Self::SpecimenLink => {
                "This annotation type is in use by a specimen link type. \
                 If you want to make changes to the annotation type, \
                 it must first be removed from the specimen link type(s) that use it."
            }
        }
    }
}
