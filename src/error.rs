use thiserror::Error;

use crate::types::RuleError;

/// Unified error type for callers that funnel every veto failure path
/// through one `Result`.
///
/// The engine's own APIs return the precise [`RuleError`]; this wrapper
/// exists for embedders combining validation with catalog loading.
#[derive(Debug, Error)]
pub enum VetoError {
    #[error(transparent)]
    Rule(#[from] RuleError),

    #[cfg(feature = "serde")]
    #[error(transparent)]
    Catalog(#[from] serde_json::Error),
}
