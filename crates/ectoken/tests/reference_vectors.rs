//! Tokens issued by other v3 implementations must decrypt bit-exactly.

use ectoken::{decrypt, decrypt_bytes, ErrorKind};

const KEY: &str = "GF8PHCp3xy5ypSaJKmPMH2M4";
const PARAMS: &str = "ec_expire=1257642471&ec_clientip=11.22.33.1";

/// Issued by the customer portal for [`KEY`] and [`PARAMS`].
const PORTAL_TOKEN: &str =
    "yfuuiWuy8LMiNR1Au3b9-LSNln-X5W-enqvNBlhlpwQspOoLlMX4fIecVLTQJTLMGET14FtLxmp8U6zaDSq5eD-gYMHz9V0";

#[test]
fn portal_token_decrypts() {
    assert_eq!(decrypt(KEY, PORTAL_TOKEN, false).unwrap(), PARAMS);
}

#[test]
fn portal_token_decrypts_verbose() {
    assert_eq!(decrypt(KEY, PORTAL_TOKEN, true).unwrap(), PARAMS);
}

#[test]
fn portal_token_with_trailing_newline_decrypts() {
    assert_eq!(decrypt(KEY, &format!("{PORTAL_TOKEN}\n"), false).unwrap(), PARAMS);
    assert_eq!(decrypt(KEY, &format!("{PORTAL_TOKEN}\r\n"), false).unwrap(), PARAMS);
}

#[test]
fn portal_token_payload_layout() {
    let raw = ectoken::codec::decode(PORTAL_TOKEN).unwrap();
    assert_eq!(raw.len(), 12 + PARAMS.len() + 16);
    assert_eq!(decrypt_bytes(KEY, PORTAL_TOKEN, false).unwrap(), PARAMS.as_bytes());
}

#[test]
fn portal_token_rejects_other_key() {
    let err = decrypt("GF8PHCp3xy5ypSaJKmPMH2M5", PORTAL_TOKEN, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Authentication);
}

#[test]
fn portal_token_rejects_truncation() {
    let truncated = &PORTAL_TOKEN[..PORTAL_TOKEN.len() - 4];
    let err = decrypt(KEY, truncated, false).unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::Authentication | ErrorKind::Format
    ));
}

#[test]
fn garbage_token_rejected() {
    let err = decrypt(KEY, "yfuuiWuy8LMiNR1Au3b9-LSNln-X5W-", false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn twenty_four_char_garbage_rejected() {
    // 24 characters decode to 18 bytes, below the nonce + tag minimum.
    let err = decrypt(KEY, "abcdefghijklmnopqrstuvwx", false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[test]
fn non_base64_token_rejected() {
    let err = decrypt(KEY, "this is not a token!", false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
}
