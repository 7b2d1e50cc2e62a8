//! Port traits for everything outside the model: time, modal dialogs and the
//! annotation type REST resource.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use biobank_domain::AnnotationTypeDescriptor;

use super::error::PortError;

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// =============================================================================
// User Interaction
// =============================================================================

/// Answer to a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Cancelled,
}

impl ConfirmOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModalPort: Send + Sync {
    /// Asks the user to confirm; resolves once the dialog is closed.
    async fn confirm(&self, header: &str, body: &str) -> ConfirmOutcome;

    /// Shows a message with a single OK button.
    async fn acknowledge(&self, header: &str, body: &str);
}

// =============================================================================
// Entities
// =============================================================================

/// An entity that knows how to delete itself on the server
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemovableEntity: Send + Sync {
    async fn remove(&self) -> Result<(), PortError>;
}

/// Annotation type REST resource, addressed by path relative to the API root
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnnotationTypeStore: Send + Sync {
    async fn list(&self, path: &str) -> Result<Vec<AnnotationTypeDescriptor>, PortError>;
    async fn get(&self, path: &str) -> Result<Option<AnnotationTypeDescriptor>, PortError>;
    async fn remove(&self, path: &str) -> Result<(), PortError>;
}
