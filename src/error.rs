//! Error types for the Interoperable Address codec
//!
//! Every failure is an input rejection: nothing here is retried or recovered
//! internally. The four [`ValidationError`] messages are part of the public
//! contract and must not change.

use thiserror::Error;

use crate::chain_type::ChainType;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, InteropError>;

/// Structural constraint violations detected by the address builder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("at least one of chainReference or address must be provided")]
    MissingReferenceAndAddress,

    #[error("chain reference length exceeds 255 bytes")]
    ChainReferenceTooLong,

    #[error("address length exceeds 255 bytes")]
    AddressTooLong,

    #[error("chain type must fit in 2 bytes")]
    ChainTypeOutOfRange,
}

/// Failures while reading the binary wire format.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryError {
    #[error("truncated input: needed {needed} bytes, got {available}")]
    Truncated { needed: usize, available: usize },

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u16),

    #[error("{0} trailing bytes after address")]
    TrailingBytes(usize),
}

/// Failures while parsing, verifying or rendering human-readable names.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("missing '#' checksum separator")]
    MissingChecksum,

    #[error("missing '@' chain separator")]
    MissingChain,

    #[error("chain must not be empty")]
    EmptyChain,

    #[error("invalid checksum: expected 8 hex characters, got {0:?}")]
    InvalidChecksum(String),

    #[error("checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("no CAIP-2 namespace registered for chain type {0}")]
    UnknownNamespace(ChainType),

    #[error("rendering {0} chain references requires the `{0}` feature")]
    RenderingDisabled(&'static str),

    #[error("chain reference of {0} bytes cannot be rendered as a number")]
    UnrepresentableReference(usize),
}

/// Top-level error returned by the public API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InteropError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid hex: {0}")]
    Decode(#[from] hex::FromHexError),

    #[error(transparent)]
    Binary(#[from] BinaryError),

    #[error(transparent)]
    Name(#[from] NameError),
}
