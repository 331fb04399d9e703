use thiserror::Error;

/// Application-level error type for the submission pipeline.
///
/// Transport and service failures never escape a submission: the orchestrator
/// converts them into synthetic failure records so they stay visible in the
/// result history. Malformed response bodies and corrupted stored history are
/// absorbed at their boundaries and never reach this type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
