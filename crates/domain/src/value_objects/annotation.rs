//! Annotation wire records exchanged with the server's REST API

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::AnnotationTypeId;

/// A number as entered in a form or as sent by the server.
///
/// The server may send either a JSON number or a string; outgoing records
/// always carry the string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for NumberValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for NumberValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for NumberValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One selected option of a Select annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedValue {
    pub annotation_type_id: AnnotationTypeId,
    /// Unset when a single-select field has no choice yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SelectedValue {
    pub fn new(annotation_type_id: AnnotationTypeId, value: impl Into<String>) -> Self {
        Self {
            annotation_type_id,
            value: Some(value.into()),
        }
    }
}

/// Scalar part of an annotation record.
///
/// The inner value is `None` when the field exists for the value type but
/// has not been filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationScalar {
    StringValue(Option<String>),
    NumberValue(Option<String>),
}

/// An annotation as sent to and received from the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub annotation_type_id: AnnotationTypeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_value: Option<NumberValue>,
    #[serde(default)]
    pub selected_values: Vec<SelectedValue>,
}

impl Annotation {
    pub fn new(annotation_type_id: AnnotationTypeId) -> Self {
        Self {
            annotation_type_id,
            string_value: None,
            number_value: None,
            selected_values: Vec::new(),
        }
    }

    pub fn with_string_value(mut self, value: impl Into<String>) -> Self {
        self.string_value = Some(value.into());
        self
    }

    pub fn with_number_value(mut self, value: impl Into<NumberValue>) -> Self {
        self.number_value = Some(value.into());
        self
    }

    pub fn with_selected_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = self.annotation_type_id.clone();
        self.selected_values = values
            .into_iter()
            .map(|v| SelectedValue::new(id.clone(), v))
            .collect();
        self
    }

    /// Merges scalar fields into the record
    pub fn merge_scalar(&mut self, scalar: AnnotationScalar) {
        match scalar {
            AnnotationScalar::StringValue(value) => self.string_value = value,
            AnnotationScalar::NumberValue(value) => {
                self.number_value = value.map(NumberValue::Text)
            }
        }
    }
}
