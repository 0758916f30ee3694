//! Encoding request validation
//!
//! Walks the encoding gate through every absent-argument and invalid-argument
//! case, the key size boundary, and the additional claim list rules.

use jwtgate::*;

const TEST_KEY: &str = "test key";

fn header_claims() -> [Claim<'static>; 1] {
    [Claim::string("kid", "some-key-id-here-012345")]
}

fn payload_claims() -> [Claim<'static>; 1] {
    [Claim::string("tst", "some-test-claim-here-012345")]
}

fn validate(request: &EncodingRequest<'_>) -> ErrorCode {
    EncodingRequestValidator::validate(Some(request))
}

// ============================================================================
// Absent Arguments
// ============================================================================

#[test]
fn test_absent_request() {
    assert_eq!(
        EncodingRequestValidator::validate(None),
        ErrorCode::NullArgument
    );
}

#[test]
fn test_default_request() {
    let request = EncodingRequest::default();
    assert_eq!(validate(&request), ErrorCode::NullArgument);

    let mut request = EncodingRequest::new().secret_key(TEST_KEY);
    request.init();
    assert_eq!(validate(&request), ErrorCode::NullArgument);
}

#[test]
fn test_absent_secret_key() {
    let mut out = String::new();
    let mut out_length = 0;
    let mut request = EncodingRequest::new().output(&mut out, &mut out_length);
    request.secret_key = None;
    assert_eq!(validate(&request), ErrorCode::NullArgument);
}

#[test]
fn test_absent_out() {
    let mut out_length = 0;
    let request = EncodingRequest {
        secret_key: Some(TEST_KEY.as_bytes()),
        out_length: Some(&mut out_length),
        ..Default::default()
    };
    assert_eq!(validate(&request), ErrorCode::NullArgument);
}

#[test]
fn test_absent_out_length() {
    let mut out = String::new();
    let request = EncodingRequest {
        secret_key: Some(TEST_KEY.as_bytes()),
        out: Some(&mut out),
        ..Default::default()
    };
    assert_eq!(validate(&request), ErrorCode::NullArgument);
}

#[test]
fn test_inferred_key_without_outputs() {
    let request = EncodingRequest::new()
        .secret_key(TEST_KEY)
        .secret_key_length(0);
    assert_eq!(validate(&request), ErrorCode::NullArgument);
    assert_eq!(
        EncodingRequestValidator::check(Some(&request)),
        Err(Error::NullArgument { field: "out" })
    );
}

// ============================================================================
// Key Length
// ============================================================================

#[test]
fn test_explicit_key_length() {
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key(TEST_KEY)
        .secret_key_length(TEST_KEY.len())
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&request), ErrorCode::Success);
}

#[test]
fn test_inferred_key_length_matches_explicit() {
    for key in ["k", TEST_KEY, "a much longer secret key for HS512 signing"] {
        let (mut out, mut out_length) = (String::new(), 0);
        let inferred = EncodingRequest::new()
            .secret_key(key)
            .secret_key_length(0)
            .output(&mut out, &mut out_length);
        let inferred = EncodingRequestValidator::check(Some(&inferred));

        let (mut out, mut out_length) = (String::new(), 0);
        let explicit = EncodingRequest::new()
            .secret_key(key)
            .secret_key_length(key.len())
            .output(&mut out, &mut out_length);
        let explicit = EncodingRequestValidator::check(Some(&explicit));

        assert_eq!(inferred, explicit, "key {key:?}");
        assert_eq!(inferred, Ok(()));
    }
}

#[test]
fn test_forced_zero_key_length() {
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key(TEST_KEY)
        .secret_key_length(Length::Exact(0))
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&request), ErrorCode::InvalidArgument);
}

#[test]
fn test_empty_key() {
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key("")
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&request), ErrorCode::InvalidArgument);
}

#[test]
fn test_key_with_embedded_zero_bytes() {
    let key = [0x00u8, 0x13, 0x00, 0x37];
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key(&key)
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&request), ErrorCode::Success);
}

#[test]
fn test_max_key_size_boundary() {
    let key = vec![b'k'; MAX_KEY_SIZE + 1];

    let mut out = String::new();
    let mut out_length = 0;
    let at_limit = EncodingRequest::new()
        .secret_key(&key[..MAX_KEY_SIZE])
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&at_limit), ErrorCode::Success);

    let mut out = String::new();
    let mut out_length = 0;
    let over_limit = EncodingRequest::new()
        .secret_key(&key[..])
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&over_limit), ErrorCode::InvalidArgument);
    assert_eq!(
        EncodingRequestValidator::check(Some(&over_limit)),
        Err(Error::KeyTooLarge {
            size: MAX_KEY_SIZE + 1,
            max: MAX_KEY_SIZE
        })
    );
}

#[test]
fn test_declared_length_over_max() {
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key(TEST_KEY)
        .secret_key_length(MAX_KEY_SIZE + 1)
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&request), ErrorCode::InvalidArgument);
}

// ============================================================================
// Additional Claims
// ============================================================================

#[test]
fn test_absent_claim_lists() {
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key(TEST_KEY)
        .output(&mut out, &mut out_length);
    assert!(request.additional_header_claims.is_none());
    assert!(request.additional_payload_claims.is_none());
    assert_eq!(validate(&request), ErrorCode::Success);
}

#[test]
fn test_header_claims_with_zero_count() {
    let claims = header_claims();
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key(TEST_KEY)
        .header_claims(ClaimList::with_count(&claims, 0))
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&request), ErrorCode::InvalidArgument);
}

#[test]
fn test_payload_claims_with_zero_count() {
    let claims = payload_claims();
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key(TEST_KEY)
        .payload_claims(ClaimList::with_count(&claims, 0))
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&request), ErrorCode::InvalidArgument);
}

#[test]
fn test_claims_with_positive_count() {
    let header = header_claims();
    let payload = payload_claims();
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .algorithm(Algorithm::HS512)
        .secret_key(TEST_KEY)
        .issuer("jwtgate")
        .subject("user-12345")
        .audience("my-app")
        .expiration(1_735_689_600)
        .issued_at(1_704_067_200)
        .header_claims(ClaimList::new(&header))
        .payload_claims(ClaimList::new(&payload))
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&request), ErrorCode::Success);
}

#[test]
fn test_claim_count_beyond_claims() {
    let claims = payload_claims();
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key(TEST_KEY)
        .payload_claims(ClaimList::with_count(&claims, 2))
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&request), ErrorCode::InvalidArgument);
}

#[test]
fn test_typed_claims() {
    let claims = [
        Claim::raw("cnt", "42", ClaimType::Integer),
        Claim::raw("pi", "3.14", ClaimType::Number),
        Claim::raw("ok", "true", ClaimType::Boolean),
        Claim::raw("tags", r#"["a","b"]"#, ClaimType::Array),
        Claim::raw("ctx", r#"{"k":1}"#, ClaimType::Object),
        Claim::null("nil"),
    ];
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key(TEST_KEY)
        .payload_claims(ClaimList::new(&claims))
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&request), ErrorCode::Success);
}

#[test]
fn test_claim_with_empty_key() {
    let claims = [Claim::string("", "value")];
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key(TEST_KEY)
        .header_claims(ClaimList::new(&claims))
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&request), ErrorCode::InvalidArgument);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_violations_lead_with_check_error() {
    let claims = header_claims();
    let key = vec![0u8; MAX_KEY_SIZE + 10];
    let mut out = String::new();
    let requests = [
        EncodingRequest::default(),
        EncodingRequest::new().secret_key(""),
        EncodingRequest::new()
            .secret_key(&key[..])
            .header_claims(ClaimList::with_count(&claims, 0)),
        EncodingRequest {
            secret_key: Some(TEST_KEY.as_bytes()),
            out: Some(&mut out),
            ..Default::default()
        },
    ];

    for request in &requests {
        let violations = EncodingRequestValidator::violations(Some(request));
        let first = EncodingRequestValidator::check(Some(request)).unwrap_err();
        assert_eq!(violations.first(), Some(&first));
    }
}

#[test]
fn test_no_violations_on_success() {
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key(TEST_KEY)
        .output(&mut out, &mut out_length);
    assert!(EncodingRequestValidator::violations(Some(&request)).is_empty());
}

#[test]
fn test_validation_leaves_request_untouched() {
    let mut out = String::from("previous");
    let mut out_length = 8;
    let request = EncodingRequest::new()
        .secret_key(TEST_KEY)
        .output(&mut out, &mut out_length);
    assert_eq!(validate(&request), ErrorCode::Success);
    drop(request);

    assert_eq!(out, "previous");
    assert_eq!(out_length, 8);
}
