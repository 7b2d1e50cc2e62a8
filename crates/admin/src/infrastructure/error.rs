//! Error types for port operations.

/// Port operation errors with context for debugging.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PortError {
    /// Entity not found - includes entity type and ID for actionable error messages.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The server refused the request (e.g. the entity is in use).
    #[error("Request rejected in {operation}: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },

    /// The request never completed.
    #[error("Transport error: {0}")]
    Transport(String),
}

impl PortError {
    /// Create a NotFound error with entity type and ID context.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a Rejected error with operation context.
    pub fn rejected(operation: &'static str, message: impl ToString) -> Self {
        Self::Rejected {
            operation,
            message: message.to_string(),
        }
    }

    pub fn transport(message: impl ToString) -> Self {
        Self::Transport(message.to_string())
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
