//! Error types for the trace engine
//!
//! [`TraceError`] covers failures of the surrounding machinery (looking up an
//! algorithm, reading configuration, serializing steps, terminal I/O).
//! Algorithmic non-success such as "no path" or "negative cycle" is never an
//! error: it is recorded as the terminal step of the trace.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    /// No algorithm is registered under this id
    #[error("unknown algorithm '{id}' (run `algotrace list` to see available ids)")]
    UnknownAlgorithm { id: String },

    /// A step's state could not be converted to JSON
    #[error("failed to serialize step {index}: {source}")]
    Serialize {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The configuration file could not be read
    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`TraceConfig`](super::TraceConfig)
    #[error("invalid config: {source}")]
    ConfigParse {
        #[source]
        source: serde_json::Error,
    },

    /// Terminal or output stream failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_algorithm_mentions_id() {
        let err = TraceError::UnknownAlgorithm {
            id: "bogo-sort".to_string(),
        };
        assert!(err.to_string().contains("bogo-sort"));
    }

    #[test]
    fn io_errors_convert() {
        let err: TraceError = std::io::Error::other("boom").into();
        assert!(err.to_string().contains("boom"));
    }
}
