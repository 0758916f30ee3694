//! Additional header and payload claims
//!
//! Claims are injected into a token by the encoding engine. The gate only
//! checks their structure; serializing values by their [`ClaimType`] is left
//! to the engine.

use crate::error::{Error, Result};
use crate::length::Length;

/// How the engine reinterprets a claim's value bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClaimType {
    #[default]
    String,
    Integer,
    Number,
    Boolean,
    Null,
    Array,
    Object,
    Other,
}

impl ClaimType {
    /// Wire tag exchanged with the engine
    pub const fn as_u8(&self) -> u8 {
        match self {
            ClaimType::String => 0,
            ClaimType::Integer => 1,
            ClaimType::Number => 2,
            ClaimType::Boolean => 3,
            ClaimType::Null => 4,
            ClaimType::Array => 5,
            ClaimType::Object => 6,
            ClaimType::Other => 7,
        }
    }

    /// Whether a claim of this type may omit its value bytes
    pub const fn permits_absent_value(&self) -> bool {
        matches!(self, ClaimType::Null)
    }
}

impl TryFrom<u8> for ClaimType {
    type Error = u8;

    fn try_from(tag: u8) -> std::result::Result<Self, u8> {
        match tag {
            0 => Ok(ClaimType::String),
            1 => Ok(ClaimType::Integer),
            2 => Ok(ClaimType::Number),
            3 => Ok(ClaimType::Boolean),
            4 => Ok(ClaimType::Null),
            5 => Ok(ClaimType::Array),
            6 => Ok(ClaimType::Object),
            7 => Ok(ClaimType::Other),
            tag => Err(tag),
        }
    }
}

/// Which additional claim list of an encoding request is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimListKind {
    Header,
    Payload,
}

impl std::fmt::Display for ClaimListKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimListKind::Header => write!(f, "header"),
            ClaimListKind::Payload => write!(f, "payload"),
        }
    }
}

/// A single header or payload field to inject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Claim<'a> {
    pub key: &'a [u8],
    pub key_length: Length,
    /// Raw value bytes; may be absent only for [`ClaimType::Null`]
    pub value: Option<&'a [u8]>,
    pub value_length: Length,
    pub claim_type: ClaimType,
}

impl<'a> Claim<'a> {
    pub const fn new(key: &'a [u8], value: Option<&'a [u8]>, claim_type: ClaimType) -> Self {
        Self {
            key,
            key_length: Length::Infer,
            value,
            value_length: Length::Infer,
            claim_type,
        }
    }

    /// String claim with both lengths inferred
    pub const fn string(key: &'a str, value: &'a str) -> Self {
        Self::new(key.as_bytes(), Some(value.as_bytes()), ClaimType::String)
    }

    /// Claim whose value is already JSON text of the given type (e.g. `"42"`, `"[1,2]"`)
    pub const fn raw(key: &'a str, value: &'a str, claim_type: ClaimType) -> Self {
        Self::new(key.as_bytes(), Some(value.as_bytes()), claim_type)
    }

    /// Null claim without value bytes
    pub const fn null(key: &'a str) -> Self {
        Self::new(key.as_bytes(), None, ClaimType::Null)
    }

    pub fn key_length(mut self, length: impl Into<Length>) -> Self {
        self.key_length = length.into();
        self
    }

    pub fn value_length(mut self, length: impl Into<Length>) -> Self {
        self.value_length = length.into();
        self
    }

    /// Check the claim invariants
    ///
    /// `list` and `index` locate the claim in error reports.
    pub fn check(&self, list: ClaimListKind, index: usize) -> Result<()> {
        let key_length = self.key_length.resolve(self.key);
        if key_length == 0 {
            return Err(Error::ClaimKeyEmpty { list, index });
        }
        if key_length > self.key.len() {
            return Err(Error::ClaimLengthOutOfBounds {
                list,
                index,
                declared: key_length,
                available: self.key.len(),
            });
        }

        match self.value {
            None if !self.claim_type.permits_absent_value() => {
                Err(Error::ClaimValueMissing { list, index })
            }
            Some(value) if !self.value_length.fits(value) => Err(Error::ClaimLengthOutOfBounds {
                list,
                index,
                declared: self.value_length.resolve(value),
                available: value.len(),
            }),
            _ => Ok(()),
        }
    }
}

/// Ordered claims plus the count the caller declares for them
///
/// Leaving a list absent on the request means "no claims". A present list
/// must declare at least one claim, and never more than it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimList<'a> {
    pub claims: &'a [Claim<'a>],
    pub count: usize,
}

impl<'a> ClaimList<'a> {
    /// List declaring every claim it holds
    pub const fn new(claims: &'a [Claim<'a>]) -> Self {
        Self {
            claims,
            count: claims.len(),
        }
    }

    /// List with an explicitly declared count
    pub const fn with_count(claims: &'a [Claim<'a>], count: usize) -> Self {
        Self { claims, count }
    }

    pub const fn len(&self) -> usize {
        self.count
    }

    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The declared claims, bounded by what the list actually holds
    pub fn iter(&self) -> impl Iterator<Item = &'a Claim<'a>> {
        self.claims.iter().take(self.count)
    }

    /// Check the list, stopping at the first violation
    pub fn check(&self, list: ClaimListKind) -> Result<()> {
        if self.count == 0 {
            return Err(Error::ClaimListEmpty { list });
        }
        if self.count > self.claims.len() {
            return Err(Error::ClaimCountMismatch {
                list,
                declared: self.count,
                available: self.claims.len(),
            });
        }
        self.iter()
            .enumerate()
            .try_for_each(|(index, claim)| claim.check(list, index))
    }

    /// Collect every violation of the list into `errors`
    pub(crate) fn collect_violations(&self, list: ClaimListKind, errors: &mut Vec<Error>) {
        if self.count == 0 {
            errors.push(Error::ClaimListEmpty { list });
            return;
        }
        if self.count > self.claims.len() {
            errors.push(Error::ClaimCountMismatch {
                list,
                declared: self.count,
                available: self.claims.len(),
            });
        }
        errors.extend(
            self.iter()
                .enumerate()
                .filter_map(|(index, claim)| claim.check(list, index).err()),
        );
    }
}
