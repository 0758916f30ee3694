//! Run with
//!
//! ```not_rust
//! cargo run --example gate -- <jwt> <verification key>
//! ```

use jwtgate::{
    Claim, ClaimList, DecodingOptions, DecodingRequest, DecodingRequestValidator, EncodingRequest,
    EncodingRequestValidator, RequestValidator,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("jwtgate=debug,{}=debug", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let jwt = args.next().unwrap_or_default();
    let key = args.next().unwrap_or_default();

    let request = DecodingRequest::new()
        .jwt(&jwt)
        .verification_key(&key)
        .options(DecodingOptions::new().exp(30));
    let code = DecodingRequestValidator::validate(Some(&request));
    if code.is_success() {
        tracing::debug!("decoding request accepted");
    } else {
        tracing::warn!("decoding request rejected: {code}");
    }

    // The same key, reused for signing, with one claim list left empty by mistake
    let header = [Claim::string("kid", "some-key-id-here-012345")];
    let mut out = String::new();
    let mut out_length = 0;
    let request = EncodingRequest::new()
        .secret_key(&key)
        .header_claims(ClaimList::with_count(&header, 0))
        .output(&mut out, &mut out_length);
    for violation in EncodingRequestValidator::violations(Some(&request)) {
        tracing::warn!(code = %violation.code(), "{violation}");
    }
}
