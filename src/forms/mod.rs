//! Form definitions backing the news search routes.

use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod search;

#[derive(Debug, Error)]
/// Errors that can occur when processing query parameters.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    InvalidPage(#[from] TypeConstraintError),
}
