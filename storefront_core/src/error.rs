//! Error types for content loading and timer backends.

use std::path::PathBuf;

use thiserror::Error;

/// A content record that cannot be rendered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("brand name is empty")]
    EmptyBrandName,

    #[error("{kind} #{id} has an empty {field}")]
    EmptyField {
        kind: &'static str,
        id: u32,
        field: &'static str,
    },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("hero slide {index} has an empty source")]
    EmptySlideSource { index: usize },

    #[error("slide interval must be greater than zero")]
    ZeroInterval,
}

/// Failure to load a content file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse content: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid content: {0}")]
    Invalid(#[from] ContentError),
}

/// A repeating timer that could not be started.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("timer period must be greater than zero")]
    ZeroPeriod,

    #[error("no timer runtime available: {0}")]
    NoRuntime(String),

    #[error("timer backend refused to start: {0}")]
    Backend(String),
}
