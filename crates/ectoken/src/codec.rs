//! URL-safe text encoding of wire payloads.
//!
//! # Transform
//!
//! ```text
//! encode: base64(standard) → strip '=' → '+' ⇒ '-' → '/' ⇒ '_'
//! decode: drop CR/LF → '-' ⇒ '+' → '_' ⇒ '/' → re-pad to a multiple of 4 → base64(standard)
//! ```
//!
//! Padding is restored from `len % 4`: a remainder of 2 takes `==`, 3 takes `=`,
//! and 0 or 1 take nothing (a remainder of 1 can never decode and is rejected by
//! the base64 layer).

use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD},
        DecodePaddingMode,
    },
    Engine as _,
};
use thiserror::Error;

use crate::payload::MIN_LEN;

/// Standard alphabet decoder that ignores non-zero bits in the final symbol,
/// so tokens from lenient issuers still decode.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Errors produced while turning token text back into a wire payload.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The text is not base64 after reversing the URL-safe substitution.
    #[error("invalid base64: {0}")]
    InvalidBase64(#[source] base64::DecodeError),

    /// The decoded payload cannot hold a nonce and a tag.
    #[error("payload is {len} bytes, expected at least {MIN_LEN}")]
    TooShort {
        /// Decoded payload length.
        len: usize,
    },
}

/// Encode `bytes` as unpadded URL-safe text.
pub fn encode(bytes: &[u8]) -> String {
    STANDARD
        .encode(bytes)
        .chars()
        .filter_map(|c| match c {
            '=' => None,
            '+' => Some('-'),
            '/' => Some('_'),
            other => Some(other),
        })
        .collect()
}

/// Decode text produced by [`encode`] (or any unpadded URL-safe base64).
///
/// Carriage returns and line feeds are skipped wherever they appear, so a
/// token read with its trailing newline still decodes.
///
/// # Errors
///
/// Returns [`FormatError::InvalidBase64`] if the text contains characters
/// outside the alphabet or has an impossible length.
pub fn decode(text: &str) -> Result<Vec<u8>, FormatError> {
    let mut standard: String = text
        .chars()
        .filter_map(|c| match c {
            '\r' | '\n' => None,
            '-' => Some('+'),
            '_' => Some('/'),
            other => Some(other),
        })
        .collect();

    match standard.len() % 4 {
        2 => standard.push_str("=="),
        3 => standard.push('='),
        _ => {}
    }

    LENIENT_STANDARD
        .decode(standard)
        .map_err(FormatError::InvalidBase64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_substitutes_and_strips_padding() {
        // 0xfb 0xff → "+/8=" in standard base64.
        assert_eq!(encode(&[0xfb, 0xff]), "-_8");
        assert_eq!(encode(b"f"), "Zg");
        assert_eq!(encode(b"fo"), "Zm8");
        assert_eq!(encode(b"foo"), "Zm9v");
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn decode_restores_padding() {
        assert_eq!(decode("Zg").unwrap(), b"f");
        assert_eq!(decode("Zm8").unwrap(), b"fo");
        assert_eq!(decode("Zm9v").unwrap(), b"foo");
        assert_eq!(decode("-_8").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn decode_accepts_standard_alphabet_too() {
        assert_eq!(decode("+/8").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn decode_allows_trailing_bits() {
        // "Zh" carries non-zero bits past the single encoded byte.
        assert_eq!(decode("Zh").unwrap(), b"f");
    }

    #[test]
    fn decode_rejects_remainder_one() {
        assert!(matches!(decode("Zm9vY"), Err(FormatError::InvalidBase64(_))));
    }

    #[test]
    fn decode_skips_line_breaks() {
        assert_eq!(decode("Zg\n").unwrap(), b"f");
        assert_eq!(decode("Zm9v\r\n").unwrap(), b"foo");
        assert_eq!(decode("Zm\n9v").unwrap(), b"foo");
        // Padding is computed after line breaks are dropped.
        assert_eq!(decode("Zm8\r\n").unwrap(), b"fo");
    }

    #[test]
    fn decode_rejects_foreign_characters() {
        assert!(decode("Zm9v!!").is_err());
        assert!(decode("Zm 9v").is_err());
    }

    #[test]
    fn round_trip_every_length_up_to_64() {
        for len in 0..=64usize {
            let bytes: Vec<u8> = (0..len).map(|i| (i * 37 + 11) as u8).collect();
            let text = encode(&bytes);
            assert!(!text.contains(&['+', '/', '='][..]));
            assert_eq!(decode(&text).unwrap(), bytes);
        }
    }
}
