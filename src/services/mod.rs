//! Framework independent request orchestration.

use thiserror::Error;

use crate::forms::FormError;
use crate::news::NewsError;

pub mod search;

/// Failures surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller sent parameters that cannot be turned into a query.
    #[error("{0}")]
    Form(String),

    /// The news API call failed; no retry is attempted.
    #[error(transparent)]
    Upstream(#[from] NewsError),
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
