//! Caller-assembled encoding and decoding requests
//!
//! Requests borrow everything they describe. They are built right before a
//! single validation call and handed to the engine afterwards; the gate never
//! retains them.

use crate::algorithm::Algorithm;
use crate::claims::{ClaimList, ClaimListKind};
use crate::length::Length;

/// Description of a token to produce
///
/// All fields start out absent. Fill them directly or through the builder
/// methods, then pass the request to
/// [`EncodingRequestValidator`](crate::EncodingRequestValidator).
#[derive(Debug, Default)]
pub struct EncodingRequest<'a> {
    pub algorithm: Algorithm,

    /// Secret (HMAC) or private key material
    pub secret_key: Option<&'a [u8]>,
    pub secret_key_length: Length,

    /// Password for an encrypted private key
    pub secret_key_password: Option<&'a [u8]>,

    /// Issuer (iss)
    pub issuer: Option<&'a str>,
    /// Subject (sub)
    pub subject: Option<&'a str>,
    /// Audience (aud)
    pub audience: Option<&'a str>,
    /// JWT ID (jti)
    pub jwt_id: Option<&'a str>,
    /// Expiration Time (exp), seconds since Unix epoch
    pub expiration: Option<i64>,
    /// Not Before (nbf), seconds since Unix epoch
    pub not_before: Option<i64>,
    /// Issued At (iat), seconds since Unix epoch
    pub issued_at: Option<i64>,

    pub additional_header_claims: Option<ClaimList<'a>>,
    pub additional_payload_claims: Option<ClaimList<'a>>,

    /// Destination the engine writes the encoded token to
    pub out: Option<&'a mut String>,
    /// Destination the engine writes the token length to
    pub out_length: Option<&'a mut usize>,
}

impl<'a> EncodingRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field to its absent state
    pub fn init(&mut self) {
        *self = Self::default();
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the key material with an inferred length
    pub fn secret_key<K: AsRef<[u8]> + ?Sized>(mut self, key: &'a K) -> Self {
        self.secret_key = Some(key.as_ref());
        self
    }

    pub fn secret_key_length(mut self, length: impl Into<Length>) -> Self {
        self.secret_key_length = length.into();
        self
    }

    pub fn secret_key_password<P: AsRef<[u8]> + ?Sized>(mut self, password: &'a P) -> Self {
        self.secret_key_password = Some(password.as_ref());
        self
    }

    pub fn issuer(mut self, issuer: &'a str) -> Self {
        self.issuer = Some(issuer);
        self
    }

    pub fn subject(mut self, subject: &'a str) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn audience(mut self, audience: &'a str) -> Self {
        self.audience = Some(audience);
        self
    }

    pub fn jwt_id(mut self, jwt_id: &'a str) -> Self {
        self.jwt_id = Some(jwt_id);
        self
    }

    pub fn expiration(mut self, timestamp: i64) -> Self {
        self.expiration = Some(timestamp);
        self
    }

    pub fn not_before(mut self, timestamp: i64) -> Self {
        self.not_before = Some(timestamp);
        self
    }

    pub fn issued_at(mut self, timestamp: i64) -> Self {
        self.issued_at = Some(timestamp);
        self
    }

    pub fn header_claims(mut self, claims: ClaimList<'a>) -> Self {
        self.additional_header_claims = Some(claims);
        self
    }

    pub fn payload_claims(mut self, claims: ClaimList<'a>) -> Self {
        self.additional_payload_claims = Some(claims);
        self
    }

    /// Set both output destinations
    pub fn output(mut self, out: &'a mut String, out_length: &'a mut usize) -> Self {
        self.out = Some(out);
        self.out_length = Some(out_length);
        self
    }

    /// Both additional claim lists, header first
    pub fn claim_lists(&self) -> [(ClaimListKind, Option<&ClaimList<'a>>); 2] {
        [
            (
                ClaimListKind::Header,
                self.additional_header_claims.as_ref(),
            ),
            (
                ClaimListKind::Payload,
                self.additional_payload_claims.as_ref(),
            ),
        ]
    }
}

/// Settings the decoding engine applies after signature verification
///
/// The gate carries these through untouched; trust decisions happen
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodingOptions<'a> {
    /// Expected issuer (iss)
    pub validate_iss: Option<&'a str>,
    /// Expected subject (sub)
    pub validate_sub: Option<&'a str>,
    /// Expected audience (aud)
    pub validate_aud: Option<&'a str>,
    /// Expected JWT ID (jti)
    pub validate_jti: Option<&'a str>,
    /// Expected header type (typ)
    pub validate_typ: Option<&'a str>,
    pub validate_exp: bool,
    pub validate_nbf: bool,
    pub validate_iat: bool,
    pub exp_tolerance_seconds: u8,
    pub nbf_tolerance_seconds: u8,
    pub iat_tolerance_seconds: u8,
}

impl<'a> DecodingOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require_issuer(mut self, issuer: &'a str) -> Self {
        self.validate_iss = Some(issuer);
        self
    }

    pub fn require_subject(mut self, subject: &'a str) -> Self {
        self.validate_sub = Some(subject);
        self
    }

    pub fn require_audience(mut self, audience: &'a str) -> Self {
        self.validate_aud = Some(audience);
        self
    }

    pub fn require_jwt_id(mut self, jwt_id: &'a str) -> Self {
        self.validate_jti = Some(jwt_id);
        self
    }

    pub fn require_type(mut self, typ: &'a str) -> Self {
        self.validate_typ = Some(typ);
        self
    }

    /// Enable expiration validation with a tolerance
    pub fn exp(mut self, tolerance_seconds: u8) -> Self {
        self.validate_exp = true;
        self.exp_tolerance_seconds = tolerance_seconds;
        self
    }

    /// Enable not-before validation with a tolerance
    pub fn nbf(mut self, tolerance_seconds: u8) -> Self {
        self.validate_nbf = true;
        self.nbf_tolerance_seconds = tolerance_seconds;
        self
    }

    /// Enable issued-at validation with a tolerance
    pub fn iat(mut self, tolerance_seconds: u8) -> Self {
        self.validate_iat = true;
        self.iat_tolerance_seconds = tolerance_seconds;
        self
    }
}

/// Description of a token to verify and parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodingRequest<'a> {
    pub algorithm: Algorithm,

    /// Encoded token text
    pub jwt: Option<&'a [u8]>,
    pub jwt_length: Length,

    /// Secret (HMAC) or public key material
    pub verification_key: Option<&'a [u8]>,
    pub verification_key_length: Length,

    pub options: DecodingOptions<'a>,
}

impl<'a> DecodingRequest<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field to its absent state
    pub fn init(&mut self) {
        *self = Self::default();
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn jwt<T: AsRef<[u8]> + ?Sized>(mut self, jwt: &'a T) -> Self {
        self.jwt = Some(jwt.as_ref());
        self
    }

    pub fn jwt_length(mut self, length: impl Into<Length>) -> Self {
        self.jwt_length = length.into();
        self
    }

    pub fn verification_key<K: AsRef<[u8]> + ?Sized>(mut self, key: &'a K) -> Self {
        self.verification_key = Some(key.as_ref());
        self
    }

    pub fn verification_key_length(mut self, length: impl Into<Length>) -> Self {
        self.verification_key_length = length.into();
        self
    }

    pub fn options(mut self, options: DecodingOptions<'a>) -> Self {
        self.options = options;
        self
    }
}
