//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Every variant is fatal for a run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DigestError {
    /// Network/transport failure or a non-success HTTP status.
    #[error("Fetch failed ({source_name}): {message}")]
    Fetch {
        source_name: &'static str,
        message: String,
    },

    /// Malformed feed, JSON document, or HTML selector.
    #[error("Parse failed ({source_name}): {message}")]
    Parse {
        source_name: &'static str,
        message: String,
    },

    /// A scrape matched nothing. Treated as failure, not as an empty list.
    #[error("No results from {source_name}")]
    EmptyResult { source_name: &'static str },

    #[error("Persistence error: {0}")]
    Persist(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DigestError {
    pub fn fetch(source_name: &'static str, message: impl std::fmt::Display) -> Self {
        Self::Fetch {
            source_name,
            message: message.to_string(),
        }
    }

    pub fn parse(source_name: &'static str, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            source_name,
            message: message.to_string(),
        }
    }
}
