//! Error types for the filterable select component.

use thiserror::Error;

/// Errors returned by fallible `FilterableSelect` and `SelectConfig` calls.
///
/// Event handlers never return these; a bad index arriving through an event
/// is logged and ignored instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    /// An option index outside the list was requested.
    #[error("option index {index} out of range (list has {len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    /// A configuration value was rejected by `SelectConfig::validate`.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SelectError>;
