//! Error types shared by the engine, the band table and the config loader.

use thiserror::Error;

/// Input validation failure for the commission calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommissionError {
    #[error("invalid argument `{arg}`: {reason}")]
    InvalidArgument { arg: &'static str, reason: String },
}

impl CommissionError {
    pub(crate) fn invalid(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument { arg, reason: reason.into() }
    }
}

/// A custom band table that does not partition `[1, ∞)`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandTableError {
    #[error("band table is empty")]
    Empty,

    #[error("first band must start at 1 activation, starts at {0}")]
    FirstBandNotOne(u32),

    #[error("band {index} leaves a gap after the previous band")]
    Gap { index: usize },

    #[error("band {index} overlaps the previous band")]
    Overlap { index: usize },

    #[error("band {index} has min greater than max")]
    InvertedRange { index: usize },

    #[error("band {index} is unbounded but is not the last band")]
    UnboundedNotLast { index: usize },

    #[error("last band must be unbounded above")]
    LastBandBounded,

    #[error("band {index} has a negative or non-finite factor")]
    InvalidFactor { index: usize },
}

/// Failure while reading configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
