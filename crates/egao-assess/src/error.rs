use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The assessment had zero scorable entries. Surfaced explicitly so
    /// callers never see a NaN stage or motivation.
    #[error("assessment has no scorable entries")]
    EmptyAssessment,

    /// A goal lookup received a key outside the clamped range. Only
    /// reachable if a caller constructs stage/motivation values without
    /// going through the scoring functions — a bug, not a recoverable
    /// condition.
    #[error("goal lookup out of range: {0}")]
    InvariantViolation(String),
}
