//! Error types shared by every CareVault crate.
//!
//! The response selector itself never fails. Errors only arise at the edges:
//! loading a rule file, or dispatching an action the store cannot apply.

use thiserror::Error;

/// The unified error type for CareVault.
#[derive(Debug, Error)]
pub enum CarevaultError {
    /// A rule file is missing, unreadable, or does not match the expected shape.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// A star rating outside `1..=5` was submitted.
    #[error("invalid rating {value}: expected a value between 1 and 5")]
    InvalidRating { value: u8 },

    /// A quick-question index past the end of the quick-question list.
    #[error("unknown quick question #{index}")]
    UnknownQuickQuestion { index: usize },

    /// A value could not be encoded for output.
    #[error("serialization error: {reason}")]
    Serialization { reason: String },

    /// A section name that does not correspond to any portal.
    #[error("unknown section '{name}'")]
    UnknownSection { name: String },
}

/// Convenience alias used throughout the CareVault crates.
pub type CarevaultResult<T> = Result<T, CarevaultError>;
