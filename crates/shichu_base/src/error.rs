//! Error types for chart calculations.

use shichu_time::TimeError;
use thiserror::Error;

/// Errors from the pillar, combination, ten-god and pattern stages.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// A rule table lacks an entry the calculation needs. Never expected
    /// with the standard tables.
    #[error("incomplete rule table: {0}")]
    IncompleteRuleMatch(String),
    /// Error from time adjustment or the calendrical tables.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
