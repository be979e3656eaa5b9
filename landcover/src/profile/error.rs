//! Profile error type.

use crate::classify::SourceIdError;
use crate::feature::EmitError;
use thiserror::Error;

/// Errors surfaced to the engine for a single source feature.
///
/// The engine decides whether to skip the feature or abort.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error(transparent)]
    SourceId(#[from] SourceIdError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}
