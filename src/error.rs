use thiserror::Error;

/// Input-contract failures. All of these indicate a caller bug or corrupt
/// upstream data, never a transient condition; they propagate uncaught to
/// whatever layer invoked the engine.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// An odds value was zero, negative, or missing where the normalizer or
    /// value-bet path needed it. Decimal odds are >= 1.0 by contract.
    #[error("invalid odds: {0}")]
    InvalidOdds(String),

    /// A snapshot record could not be decoded at the boundary, e.g. a team
    /// record missing `recent_results` entirely. An *empty* result list is
    /// legal and means "no history".
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),

    /// A probability triple with negative components or a sum outside the
    /// rounding tolerance of 100. Points at an upstream composition bug and
    /// is surfaced rather than silently corrected.
    #[error("probability out of range: {0}")]
    OutOfRange(String),
}
