//! Property tests for header generation and verification.

use hooksign_crypto::{
    generate_header, generate_payload_string, verify_header, verify_header_with_tolerance,
    SignatureErrorKind, Verifier,
};
use proptest::prelude::*;
use serde_json::json;

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

proptest! {
    #[test]
    fn generated_headers_verify(
        payload in ".*",
        secret in proptest::collection::vec(any::<u8>(), 0..64),
        timestamp in 0i64..4_000_000_000,
    ) {
        let header = generate_header(&payload, &secret, Some(timestamp));
        let result = Verifier::new()
            .tolerance(300)
            .at(timestamp + 300)
            .verify(&payload, header.as_str(), &secret);
        prop_assert!(result.is_ok());
    }

    #[test]
    fn generation_is_deterministic(
        payload in ".*",
        secret in "[a-f0-9]{0,40}",
        timestamp in any::<i64>(),
    ) {
        prop_assert_eq!(
            generate_header(&payload, &secret, Some(timestamp)),
            generate_header(&payload, &secret, Some(timestamp))
        );
    }

    #[test]
    fn flipping_a_signature_character_is_detected(
        payload in ".{0,64}",
        index in 0usize..64,
    ) {
        let header = generate_header(&payload, "secret", Some(1_000));
        let (prefix, signature) = header.split_once(",v1=").unwrap();

        let mut forged: Vec<char> = signature.chars().collect();
        forged[index] = if forged[index] == '0' { '1' } else { '0' };
        let forged = format!("{prefix},v1={}", forged.into_iter().collect::<String>());

        let err = verify_header_with_tolerance(&payload, forged, "secret", 0).unwrap_err();
        prop_assert_eq!(err.signature_kind(), Some(SignatureErrorKind::SignatureMismatch));
    }

    #[test]
    fn canonical_payload_is_stable(text in ".*", number in any::<i32>()) {
        let payload = json!({ "text": text, "number": number, "list": [text.clone()] });
        let first = generate_payload_string(&payload).unwrap();

        prop_assert!(!first.contains('\r'));
        prop_assert_eq!(first, generate_payload_string(&payload).unwrap());
    }
}

#[test]
fn stale_header_needs_disabled_tolerance() {
    let header = generate_header("body", "secret", Some(now() - 301));

    let err = verify_header("body", header.as_str(), "secret").unwrap_err();
    assert_eq!(err.signature_kind(), Some(SignatureErrorKind::TimestampExpired));
    assert!(verify_header_with_tolerance("body", header.as_str(), "secret", 0).is_ok());
    assert!(verify_header_with_tolerance("body", header.as_str(), "secret", -1).is_ok());
}

#[test]
fn fresh_header_verifies_with_default_tolerance() {
    let header = generate_header("body", "secret", None);
    assert!(verify_header("body", header, "secret").is_ok());
}
