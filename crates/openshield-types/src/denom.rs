//! Denomination grammar for OpenShield
//!
//! Every transactable amount carries a denomination. The grammar is
//! `[a-z][a-z0-9/:]{2,127}`: a lowercase ASCII letter followed by 2 to 127
//! lowercase letters, digits, slashes or colons. The slash and colon forms
//! cover IBC-style and channel-scoped denominations.

use crate::error::{Result, TypesError};

/// Minimum denomination length (leading letter plus two more characters)
pub const MIN_DENOM_LEN: usize = 3;

/// Maximum denomination length
pub const MAX_DENOM_LEN: usize = 128;

/// Check a denomination against the grammar
pub fn is_valid_denom(denom: &str) -> bool {
    let bytes = denom.as_bytes();
    if bytes.len() < MIN_DENOM_LEN || bytes.len() > MAX_DENOM_LEN {
        return false;
    }
    if !bytes[0].is_ascii_lowercase() {
        return false;
    }
    bytes[1..]
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'/' || *b == b':')
}

/// Validate a denomination, returning the offending string on failure
pub fn validate_denom(denom: &str) -> Result<()> {
    if is_valid_denom(denom) {
        Ok(())
    } else {
        Err(TypesError::InvalidDenom {
            denom: denom.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_standard_denoms() {
        assert!(is_valid_denom("ushield"));
        assert!(is_valid_denom("uatom"));
        assert!(is_valid_denom("ibc/27394fb092d2eccd56123c74f36e4c1f"));
        assert!(is_valid_denom("pool:7:share"));
        assert!(is_valid_denom("abc"));
    }

    #[test]
    fn test_rejects_bad_denoms() {
        assert!(!is_valid_denom(""));
        assert!(!is_valid_denom("ab"));
        assert!(!is_valid_denom("Ushield"));
        assert!(!is_valid_denom("1shield"));
        assert!(!is_valid_denom("u shield"));
        assert!(!is_valid_denom("ushield!"));
        assert!(!is_valid_denom(&"a".repeat(MAX_DENOM_LEN + 1)));
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        assert!(is_valid_denom(&"a".repeat(MIN_DENOM_LEN)));
        assert!(is_valid_denom(&"a".repeat(MAX_DENOM_LEN)));
        assert!(!is_valid_denom(&"a".repeat(MIN_DENOM_LEN - 1)));
    }

    #[test]
    fn test_validate_denom_reports_input() {
        let err = validate_denom("BAD").unwrap_err();
        assert_eq!(
            err,
            TypesError::InvalidDenom {
                denom: "BAD".to_string()
            }
        );
    }
}
