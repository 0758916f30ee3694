use crate::error::{Error, ErrorCode, Result};
use crate::length::Length;
use crate::limits::MAX_KEY_SIZE;
use crate::request::{DecodingRequest, EncodingRequest};

/// Structural gate in front of an encoding or decoding engine
///
/// Implementations are stateless: every method inspects the request it is
/// given and nothing else. Checks run in a fixed order and the first failure
/// wins. Absent-argument checks always precede anything that reads through a
/// present argument.
pub trait RequestValidator {
    /// Request kind this validator accepts
    type Request<'a>;

    /// Name used in log events
    const NAME: &'static str;

    /// Check the request, returning the first violated invariant
    fn check(request: Option<&Self::Request<'_>>) -> Result<()>;

    /// Every violated invariant, in check order
    ///
    /// The first element is the error [`RequestValidator::check`] returns. An
    /// empty vector means the request is well-formed.
    fn violations(request: Option<&Self::Request<'_>>) -> Vec<Error>;

    /// Validate the request and report the outcome code
    ///
    /// The engine must not proceed unless this returns [`ErrorCode::Success`].
    fn validate(request: Option<&Self::Request<'_>>) -> ErrorCode {
        match Self::check(request) {
            Ok(()) => ErrorCode::Success,
            Err(error) => {
                let code = error.code();
                tracing::debug!(
                    request = Self::NAME,
                    code = code.code(),
                    "Rejected request: {error}"
                );
                code
            }
        }
    }
}

/// Validator for requests to produce a token
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingRequestValidator;

/// Validator for requests to verify and parse a token
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodingRequestValidator;

impl RequestValidator for EncodingRequestValidator {
    type Request<'a> = EncodingRequest<'a>;

    const NAME: &'static str = "encoding";

    fn check(request: Option<&EncodingRequest<'_>>) -> Result<()> {
        // 1-4. Required arguments
        let request = request.ok_or(Error::NullArgument { field: "request" })?;
        let secret_key = request
            .secret_key
            .ok_or(Error::NullArgument { field: "secret_key" })?;
        if request.out.is_none() {
            return Err(Error::NullArgument { field: "out" });
        }
        if request.out_length.is_none() {
            return Err(Error::NullArgument {
                field: "out_length",
            });
        }

        // 5-7. Key length
        let key_length = require_length("secret_key", secret_key, request.secret_key_length)?;
        if key_length > MAX_KEY_SIZE {
            return Err(Error::KeyTooLarge {
                size: key_length,
                max: MAX_KEY_SIZE,
            });
        }
        require_within("secret_key", secret_key, key_length)?;

        // 8. Additional claims
        for (kind, claims) in request.claim_lists() {
            if let Some(claims) = claims {
                claims.check(kind)?;
            }
        }

        Ok(())
    }

    fn violations(request: Option<&EncodingRequest<'_>>) -> Vec<Error> {
        let Some(request) = request else {
            return vec![Error::NullArgument { field: "request" }];
        };

        let mut errors = Vec::new();
        if request.secret_key.is_none() {
            errors.push(Error::NullArgument { field: "secret_key" });
        }
        if request.out.is_none() {
            errors.push(Error::NullArgument { field: "out" });
        }
        if request.out_length.is_none() {
            errors.push(Error::NullArgument {
                field: "out_length",
            });
        }

        if let Some(secret_key) = request.secret_key {
            match require_length("secret_key", secret_key, request.secret_key_length) {
                Err(error) => errors.push(error),
                Ok(key_length) => {
                    if key_length > MAX_KEY_SIZE {
                        errors.push(Error::KeyTooLarge {
                            size: key_length,
                            max: MAX_KEY_SIZE,
                        });
                    }
                    errors.extend(require_within("secret_key", secret_key, key_length).err());
                }
            }
        }

        for (kind, claims) in request.claim_lists() {
            if let Some(claims) = claims {
                claims.collect_violations(kind, &mut errors);
            }
        }

        errors
    }
}

impl RequestValidator for DecodingRequestValidator {
    type Request<'a> = DecodingRequest<'a>;

    const NAME: &'static str = "decoding";

    fn check(request: Option<&DecodingRequest<'_>>) -> Result<()> {
        let request = request.ok_or(Error::NullArgument { field: "request" })?;
        let jwt = request.jwt.ok_or(Error::NullArgument { field: "jwt" })?;
        let verification_key = request.verification_key.ok_or(Error::NullArgument {
            field: "verification_key",
        })?;

        let jwt_length = require_length("jwt", jwt, request.jwt_length)?;
        require_within("jwt", jwt, jwt_length)?;

        // No size ceiling on verification keys
        let key_length = require_length(
            "verification_key",
            verification_key,
            request.verification_key_length,
        )?;
        require_within("verification_key", verification_key, key_length)
    }

    fn violations(request: Option<&DecodingRequest<'_>>) -> Vec<Error> {
        let Some(request) = request else {
            return vec![Error::NullArgument { field: "request" }];
        };

        let mut errors = Vec::new();
        if request.jwt.is_none() {
            errors.push(Error::NullArgument { field: "jwt" });
        }
        if request.verification_key.is_none() {
            errors.push(Error::NullArgument {
                field: "verification_key",
            });
        }

        let fields = [
            ("jwt", request.jwt, request.jwt_length),
            (
                "verification_key",
                request.verification_key,
                request.verification_key_length,
            ),
        ];
        for (field, bytes, length) in fields {
            if let Some(bytes) = bytes {
                if let Err(error) = require_length(field, bytes, length)
                    .and_then(|resolved| require_within(field, bytes, resolved))
                {
                    errors.push(error);
                }
            }
        }

        errors
    }
}

/// Resolve a declared length, rejecting fields that resolve to nothing
fn require_length(field: &'static str, bytes: &[u8], length: Length) -> Result<usize> {
    match length.resolve(bytes) {
        0 => Err(Error::EmptyValue { field }),
        resolved => Ok(resolved),
    }
}

/// Reject explicit lengths that run past the bytes they describe
fn require_within(field: &'static str, bytes: &[u8], resolved: usize) -> Result<()> {
    if resolved > bytes.len() {
        return Err(Error::LengthOutOfBounds {
            field,
            declared: resolved,
            available: bytes.len(),
        });
    }
    Ok(())
}
