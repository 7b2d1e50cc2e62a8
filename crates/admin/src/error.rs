//! Application-level error type combining model and port failures.

use biobank_domain::DomainError;

use crate::infrastructure::PortError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AdminError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Port(#[from] PortError),
}
