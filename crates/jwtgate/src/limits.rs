//! Size limit constants for request validation

/// Maximum length for signing key material (8KB)
/// Bounds the buffers the signing primitive allocates for key parsing.
/// Verification keys are not subject to this ceiling.
pub const MAX_KEY_SIZE: usize = 8192;
