//! User-visible failures: everything an estimator can't absorb on its own.
//!
//! Estimator-internal failures never reach here — the orchestrator (see
//! [`crate::orchestrator`]) catches those per-estimator and folds them into
//! an infinite guess number instead.

use thiserror::Error;

/// Input validation failures surfaced directly to the caller.
#[derive(Debug, Error)]
pub enum CrackTimeError {
    /// `estimate()` was asked for a hash algorithm it doesn't know how to rate.
    #[error("unknown algorithm '{name}'; supported: {}", supported.join(", "))]
    UnknownAlgorithm {
        name: String,
        supported: Vec<String>,
    },

    /// `estimate()` was asked for a hardware tier it doesn't know how to rate.
    #[error("unknown hardware tier '{name}'; supported: {}", supported.join(", "))]
    UnknownHardwareTier {
        name: String,
        supported: Vec<String>,
    },

    /// A batch endpoint was called with no passwords.
    #[error("password list cannot be empty")]
    EmptyBatch,

    /// A comparison endpoint needs at least `need` items but got fewer.
    #[error("need at least {need} items to compare, got {got}")]
    TooFewItems { need: usize, got: usize },

    /// A packaged data file failed to load. Unreachable with the embedded
    /// data assets shipped in this crate; kept so a future file-system
    /// loader (see `CRACK_TIME_DATA_DIR`) has a typed error to return.
    #[error("missing data file: {path}")]
    MissingDataFile { path: String },
}
