use super::*;

// =============================================================
// Callback fragment parsing
// =============================================================

#[test]
fn parse_fragment_extracts_tokens() {
    let tokens = parse_fragment("#access_token=at-1&expires_in=3600&refresh_token=rt-1&token_type=bearer")
        .expect("tokens");
    assert_eq!(tokens.access_token, "at-1");
    assert_eq!(tokens.refresh_token, "rt-1");
    assert_eq!(tokens.expires_in, Some(3600));
}

#[test]
fn parse_fragment_accepts_missing_hash_prefix() {
    let tokens = parse_fragment("access_token=a&refresh_token=r").expect("tokens");
    assert_eq!(tokens.access_token, "a");
    assert_eq!(tokens.expires_in, None);
}

#[test]
fn parse_fragment_ignores_unknown_and_malformed_pairs() {
    let tokens = parse_fragment("#access_token=a&junk&provider_token=x&refresh_token=r").expect("tokens");
    assert_eq!(tokens.access_token, "a");
    assert_eq!(tokens.refresh_token, "r");
}

#[test]
fn parse_fragment_rejects_missing_refresh_token() {
    assert!(parse_fragment("#access_token=a&expires_in=10").is_err());
}

#[test]
fn parse_fragment_prefers_error_description() {
    let err = parse_fragment("#error=access_denied&error_description=User+denied%20access")
        .expect_err("error");
    assert_eq!(err, "User denied access");
}

#[test]
fn parse_fragment_falls_back_to_error_code() {
    let err = parse_fragment("#error=server_error").expect_err("error");
    assert_eq!(err, "server_error");
}

// =============================================================
// Expiry check
// =============================================================

#[test]
fn is_expired_false_without_recorded_expiry() {
    assert!(!is_expired(None, 1_000_000));
}

#[test]
fn is_expired_false_well_before_expiry() {
    assert!(!is_expired(Some(2_000), 1_000));
}

#[test]
fn is_expired_true_inside_safety_margin() {
    // 30 seconds left is inside the 60 second margin.
    assert!(is_expired(Some(1_030), 1_000));
}

#[test]
fn is_expired_true_after_expiry() {
    assert!(is_expired(Some(500), 1_000));
}

// =============================================================
// Percent decoding
// =============================================================

#[test]
fn decode_component_handles_invalid_escape() {
    assert_eq!(decode_component("50%25+off%ZZ"), "50% off%ZZ");
}

#[test]
fn parse_fragment_decodes_multibyte_error_description() {
    let err = parse_fragment("#error=server_error&error_description=caf%C3%A9+closed")
        .expect_err("error");
    assert_eq!(err, "café closed");
}
