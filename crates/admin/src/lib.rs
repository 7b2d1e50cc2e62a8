//! Biobank Admin - annotation forms and annotation type administration.
//!
//! Workflows talk to the outside world only through the ports in
//! [`infrastructure::ports`]; the annotation model lives in `biobank-domain`.

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod use_cases;

pub use config::AnnotationFormConfig;
pub use error::AdminError;
pub use use_cases::{
    AnnotationForm, OpenAnnotationForm, RemoveEntity, RemoveOutcome, RemovePrompt,
    StudyAnnotationTypes,
};
