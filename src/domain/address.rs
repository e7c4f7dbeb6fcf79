//! Blockchain address checksum normalization

use regex::Regex;
use sha3::{Digest, Keccak256};
use std::sync::OnceLock;

/// Regex for a hex account address: 0x followed by 40 hex digits
fn address_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap())
}

/// Normalize an address to its canonical checksum casing (EIP-55).
///
/// The casing of each hex letter is taken from the Keccak-256 digest of the
/// lowercased hex body: a letter is uppercased when the digest nibble at the
/// same position is >= 8. Returns `None` for anything that is not a
/// 0x-prefixed 40-digit hex string; callers fall back to the raw input.
pub fn to_checksum_address(address: &str) -> Option<String> {
    if !address_regex().is_match(address) {
        return None;
    }

    let body = address[2..].to_lowercase();
    let digest = Keccak256::digest(body.as_bytes());

    let mut checksummed = String::with_capacity(42);
    checksummed.push_str("0x");
    for (i, ch) in body.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            digest[i / 2] >> 4
        } else {
            digest[i / 2] & 0x0f
        };
        if ch.is_ascii_alphabetic() && nibble >= 8 {
            checksummed.push(ch.to_ascii_uppercase());
        } else {
            checksummed.push(ch);
        }
    }

    Some(checksummed)
}

#[cfg(test)]
mod tests {
    use super::*;

    // EIP-55 reference vectors
    #[test]
    fn test_all_caps_vectors() {
        assert_eq!(
            to_checksum_address("0x52908400098527886e0f7030069857d2e4169ee7").unwrap(),
            "0x52908400098527886E0F7030069857D2E4169EE7"
        );
        assert_eq!(
            to_checksum_address("0x8617e340b3d01fa5f11f306f4090fd50e238070d").unwrap(),
            "0x8617E340B3D01FA5F11F306F4090FD50E238070D"
        );
    }

    #[test]
    fn test_all_lower_vectors() {
        assert_eq!(
            to_checksum_address("0xde709f2102306220921060314715629080e2fb77").unwrap(),
            "0xde709f2102306220921060314715629080e2fb77"
        );
        assert_eq!(
            to_checksum_address("0x27b1fdb04752bbc536007a920d24acb045561c26").unwrap(),
            "0x27b1fdb04752bbc536007a920d24acb045561c26"
        );
    }

    #[test]
    fn test_mixed_case_vectors() {
        assert_eq!(
            to_checksum_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
        assert_eq!(
            to_checksum_address("0xfb6916095ca1df60bb79ce92ce3ea74c37c5d359").unwrap(),
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
        );
        assert_eq!(
            to_checksum_address("0xdbf03b407c01e7cd3cbea99509d93f8dddc8c6fb").unwrap(),
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB"
        );
        assert_eq!(
            to_checksum_address("0xd1220a0cf47c7b9be7a2e6ba89f429762e7b9adb").unwrap(),
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb"
        );
    }

    #[test]
    fn test_recasing_is_idempotent() {
        let checksummed = to_checksum_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").unwrap();
        assert_eq!(
            to_checksum_address(&checksummed).unwrap(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(to_checksum_address("").is_none());
        assert!(to_checksum_address("0xABC").is_none());
        assert!(to_checksum_address("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").is_none());
        assert!(to_checksum_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaeg").is_none());
        assert!(to_checksum_address("tz1KqTpEZ7Yob7QbPE4Hy4Wo8fHG8LhKxZSx").is_none());
    }
}
