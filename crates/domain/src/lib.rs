//! Biobank domain model.
//!
//! Annotation types describe the extra data a study collects for its
//! participants, collection events and specimen links. This crate holds the
//! value model that turns form input into the annotation records the server
//! accepts, and back.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    AnnotationTypeDescriptor, AnnotationTypeKind, AnnotationValueType, SelectionMode,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{AnnotationTypeId, StudyId};

pub use value_objects::{
    parse_amount_input, parse_integer_input, Annotation, AnnotationScalar, AnnotationState,
    AnnotationValue, NumberValue, SelectOption, SelectedValue,
};
