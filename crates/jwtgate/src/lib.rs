//! Structural validation gate for JWT encoding and decoding requests.
//!
//! Callers describe a token to produce ([`EncodingRequest`]) or to verify
//! ([`DecodingRequest`]) and run it through the matching validator before any
//! cryptographic work happens. A request that does not validate to
//! [`ErrorCode::Success`] must not reach the engine.
//!
//! ```
//! use jwtgate::{EncodingRequest, EncodingRequestValidator, ErrorCode, RequestValidator};
//!
//! let mut out = String::new();
//! let mut out_length = 0;
//! let request = EncodingRequest::new()
//!     .secret_key("test key")
//!     .output(&mut out, &mut out_length);
//!
//! assert_eq!(EncodingRequestValidator::validate(Some(&request)), ErrorCode::Success);
//! ```

mod error;

// Internal modules
pub(crate) mod algorithm;
pub(crate) mod claims;
pub(crate) mod length;
pub(crate) mod limits;
pub(crate) mod request;
pub(crate) mod validator;

// Public Interface
pub use algorithm::Algorithm;
pub use claims::{Claim, ClaimList, ClaimListKind, ClaimType};
pub use error::{Error, ErrorCode, Result};
pub use length::Length;
pub use limits::MAX_KEY_SIZE;
pub use request::{DecodingOptions, DecodingRequest, EncodingRequest};
pub use validator::{DecodingRequestValidator, EncodingRequestValidator, RequestValidator};
