//! Remove entity use case - confirm with the user, then delete.

use std::sync::Arc;

use crate::infrastructure::ports::{ModalPort, RemovableEntity};
use crate::infrastructure::PortError;

/// Texts shown while removing an entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovePrompt {
    pub title: String,
    pub confirm_text: String,
    pub fail_title: String,
    pub fail_text: String,
}

impl RemovePrompt {
    pub fn new(
        title: impl Into<String>,
        confirm_text: impl Into<String>,
        fail_title: impl Into<String>,
        fail_text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            confirm_text: confirm_text.into(),
            fail_title: fail_title.into(),
            fail_text: fail_text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The user declined; nothing was deleted
    Cancelled,
}

/// Asks for confirmation and deletes the entity.
///
/// When the deletion fails the user is told why before the error is
/// returned to the caller.
pub struct RemoveEntity {
    modal: Arc<dyn ModalPort>,
}

impl RemoveEntity {
    pub fn new(modal: Arc<dyn ModalPort>) -> Self {
        Self { modal }
    }

    pub async fn execute(
        &self,
        entity: &dyn RemovableEntity,
        prompt: &RemovePrompt,
    ) -> Result<RemoveOutcome, PortError> {
        let outcome = self.modal.confirm(&prompt.title, &prompt.confirm_text).await;
        if !outcome.is_confirmed() {
            tracing::debug!(title = %prompt.title, "Removal cancelled by user");
            return Ok(RemoveOutcome::Cancelled);
        }

        match entity.remove().await {
            Ok(()) => {
                tracing::info!(title = %prompt.title, "Entity removed");
                Ok(RemoveOutcome::Removed)
            }
            Err(err) => {
                tracing::warn!(title = %prompt.title, error = %err, "Entity removal failed");
                let body = format!("{}: {}", prompt.fail_text, err);
                self.modal.acknowledge(&prompt.fail_title, &body).await;
                Err(err)
            }
        }
    }
}
