//! Cell value normalization.
//!
//! Survey cells either hold one value or a comma-separated list
//! ("Dutch, Turkish"). Components are trimmed and internal whitespace runs
//! collapse to a single space, so multi-word identifiers like
//! "at the bank" keep their spacing and still match the reference lists.

use langweb_core::constants::VALUE_SEPARATOR;
use langweb_core::types::collections::SmallVec4;

/// Split a raw cell into normalized components. Empty components are dropped,
/// so `"Dutch, , Turkish"` yields two entries and an all-whitespace cell
/// yields none.
pub fn normalize(raw: &str) -> SmallVec4<String> {
    raw.split(VALUE_SEPARATOR)
        .map(normalize_id)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Normalize a single identifier: trim plus internal whitespace collapse.
/// Never splits on the value separator; record keys are identities.
pub fn normalize_id(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_value_is_trimmed() {
        assert_eq!(normalize(" Dutch ").as_slice(), ["Dutch"]);
    }

    #[test]
    fn test_multi_value_splits_and_trims() {
        assert_eq!(
            normalize("Dutch, Turkish,Kurmanji").as_slice(),
            ["Dutch", "Turkish", "Kurmanji"]
        );
    }

    #[test]
    fn test_internal_whitespace_collapses() {
        assert_eq!(normalize("at  the   bank").as_slice(), ["at the bank"]);
        assert_eq!(normalize_id("\tat the bank "), "at the bank");
    }

    #[test]
    fn test_empty_components_dropped() {
        assert_eq!(normalize("Dutch, , Turkish").as_slice(), ["Dutch", "Turkish"]);
        assert!(normalize("  ,  ").is_empty());
        assert!(normalize("").is_empty());
    }
}
