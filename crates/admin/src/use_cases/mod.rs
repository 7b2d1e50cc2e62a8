//! Use cases - admin workflows built on the annotation model and ports.

pub mod annotation_form;
pub mod annotation_types;
pub mod remove_entity;

pub use annotation_form::{AnnotationForm, OpenAnnotationForm};
pub use annotation_types::StudyAnnotationTypes;
pub use remove_entity::{RemoveEntity, RemoveOutcome, RemovePrompt};
