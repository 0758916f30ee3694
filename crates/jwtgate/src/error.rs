//! Errors for jwtgate

use crate::claims::ClaimListKind;
use thiserror::Error;

/// Outcome codes shared with the encoding and decoding engines
///
/// Validators only ever produce [`ErrorCode::Success`], [`ErrorCode::NullArgument`]
/// and [`ErrorCode::InvalidArgument`]. The remaining members are raised by the
/// engines downstream of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Success,
    NullArgument,
    InvalidArgument,
    OutOfMemory,
    Overflow,
    SignatureCreationFailure,
    Sha2Failure,
    KeyParseFailure,
    Base64Failure,
    WrongKeyType,
    RngSeedFailure,
    DecodeFailedInvalidTokenFormat,
    DecodeFailedMissingSignature,
    UnsupportedAlgorithm,
}

impl ErrorCode {
    /// Every member, in ascending numeric order
    pub const ALL: [ErrorCode; 14] = [
        ErrorCode::Success,
        ErrorCode::NullArgument,
        ErrorCode::InvalidArgument,
        ErrorCode::OutOfMemory,
        ErrorCode::Overflow,
        ErrorCode::SignatureCreationFailure,
        ErrorCode::Sha2Failure,
        ErrorCode::KeyParseFailure,
        ErrorCode::Base64Failure,
        ErrorCode::WrongKeyType,
        ErrorCode::RngSeedFailure,
        ErrorCode::DecodeFailedInvalidTokenFormat,
        ErrorCode::DecodeFailedMissingSignature,
        ErrorCode::UnsupportedAlgorithm,
    ];

    /// Numeric code as exchanged with the engines
    pub const fn code(&self) -> i32 {
        match self {
            ErrorCode::Success => 0,
            ErrorCode::NullArgument => 100,
            ErrorCode::InvalidArgument => 200,
            ErrorCode::OutOfMemory => 300,
            ErrorCode::Overflow => 310,
            ErrorCode::SignatureCreationFailure => 400,
            ErrorCode::Sha2Failure => 410,
            ErrorCode::KeyParseFailure => 420,
            ErrorCode::Base64Failure => 425,
            ErrorCode::WrongKeyType => 450,
            ErrorCode::RngSeedFailure => 500,
            ErrorCode::DecodeFailedInvalidTokenFormat => 600,
            ErrorCode::DecodeFailedMissingSignature => 700,
            ErrorCode::UnsupportedAlgorithm => 800,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Success => "success",
            ErrorCode::NullArgument => "null argument",
            ErrorCode::InvalidArgument => "invalid argument",
            ErrorCode::OutOfMemory => "out of memory",
            ErrorCode::Overflow => "overflow",
            ErrorCode::SignatureCreationFailure => "signature creation failure",
            ErrorCode::Sha2Failure => "SHA-2 failure",
            ErrorCode::KeyParseFailure => "key parse failure",
            ErrorCode::Base64Failure => "base64 failure",
            ErrorCode::WrongKeyType => "wrong key type",
            ErrorCode::RngSeedFailure => "random generator seed failure",
            ErrorCode::DecodeFailedInvalidTokenFormat => "decode failed: invalid token format",
            ErrorCode::DecodeFailedMissingSignature => "decode failed: missing signature",
            ErrorCode::UnsupportedAlgorithm => "unsupported algorithm",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.code())
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = i32;

    fn try_from(code: i32) -> std::result::Result<Self, i32> {
        ErrorCode::ALL
            .into_iter()
            .find(|candidate| candidate.code() == code)
            .ok_or(code)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// jwtgate Errors
///
/// One variant per violated request invariant. [`Error::code`] folds each of
/// them onto the closed [`ErrorCode`] set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============================================================================
    // Absent Arguments
    // ============================================================================
    #[error("Required argument '{field}' is absent")]
    NullArgument { field: &'static str },

    #[error("Claim #{index} in {list} claims has no value but type requires one")]
    ClaimValueMissing { list: ClaimListKind, index: usize },

    // ============================================================================
    // Invalid Arguments
    // ============================================================================
    #[error("Argument '{field}' resolves to zero length")]
    EmptyValue { field: &'static str },

    #[error("Key too large: {size} bytes (maximum: {max} bytes)")]
    KeyTooLarge { size: usize, max: usize },

    #[error("Declared length of '{field}' is {declared} bytes but only {available} are present")]
    LengthOutOfBounds {
        field: &'static str,
        declared: usize,
        available: usize,
    },

    #[error("Additional {list} claims are present but declare a count of zero")]
    ClaimListEmpty { list: ClaimListKind },

    #[error("Additional {list} claims declare {declared} entries but hold {available}")]
    ClaimCountMismatch {
        list: ClaimListKind,
        declared: usize,
        available: usize,
    },

    #[error("Claim #{index} in {list} claims has an empty key")]
    ClaimKeyEmpty { list: ClaimListKind, index: usize },

    #[error("Claim #{index} in {list} claims declares {declared} bytes but only {available} are present")]
    ClaimLengthOutOfBounds {
        list: ClaimListKind,
        index: usize,
        declared: usize,
        available: usize,
    },

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Algorithm '{0}' is not supported")]
    AlgorithmUnsupported(String),

    #[error("The 'none' algorithm is rejected for security reasons (RFC 8725)")]
    AlgorithmNoneRejected,
}

impl Error {
    /// Outcome code reported to the engine for this error
    pub const fn code(&self) -> ErrorCode {
        match self {
            Error::NullArgument { .. } | Error::ClaimValueMissing { .. } => {
                ErrorCode::NullArgument
            }
            Error::EmptyValue { .. }
            | Error::KeyTooLarge { .. }
            | Error::LengthOutOfBounds { .. }
            | Error::ClaimListEmpty { .. }
            | Error::ClaimCountMismatch { .. }
            | Error::ClaimKeyEmpty { .. }
            | Error::ClaimLengthOutOfBounds { .. } => ErrorCode::InvalidArgument,
            Error::AlgorithmUnsupported(_) | Error::AlgorithmNoneRejected => {
                ErrorCode::UnsupportedAlgorithm
            }
        }
    }
}

impl From<&Error> for ErrorCode {
    fn from(error: &Error) -> Self {
        error.code()
    }
}

impl From<Error> for ErrorCode {
    fn from(error: Error) -> Self {
        error.code()
    }
}

/// Result type alias for jwtgate operations
pub type Result<T> = std::result::Result<T, Error>;
