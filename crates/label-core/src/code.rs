//! Product code derivation
//!
//! A product code has the shape `<thickness>/<quality-code>/<dimension-code>`,
//! e.g. `18.5/02/05`. Unknown qualities and dimensions fall back to the raw
//! text so a code can always be produced once all three inputs are present.

use crate::tables::{find_dimension_code, find_quality_match};

/// Strip all whitespace from a dimension string (`"1250 x 2500"` → `"1250x2500"`)
pub fn normalize_dimension(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Replace the decimal comma of a thickness with a dot (`"18,5"` → `"18.5"`)
///
/// Only the first comma is replaced.
pub fn normalize_thickness(thickness: &str) -> String {
    thickness.replacen(',', ".", 1)
}

/// Resolve a quality text to its short code, or keep the text verbatim
pub fn quality_code(quality: &str) -> &str {
    find_quality_match(quality)
        .map(|entry| entry.value)
        .unwrap_or(quality)
}

/// Derive the product code for a thickness/quality/dimension triple
///
/// Returns an empty string when any input is empty; that is the
/// "incomplete" state, not an error. `dimension` is expected to be
/// normalized already (see [`normalize_dimension`]).
pub fn derive_product_code(thickness: &str, quality: &str, dimension: &str) -> String {
    if thickness.is_empty() || quality.is_empty() || dimension.is_empty() {
        return String::new();
    }

    format!(
        "{}/{}/{}",
        normalize_thickness(thickness),
        quality_code(quality),
        find_dimension_code(dimension)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_dimension() {
        assert_eq!(normalize_dimension("1250 x 2500"), "1250x2500");
        assert_eq!(normalize_dimension(" 1250\tx\n2500 "), "1250x2500");
        assert_eq!(normalize_dimension(""), "");
    }

    #[test]
    fn test_normalize_dimension_idempotent() {
        for raw in ["1250 x 2500", "a b c", "   ", "1525x1525"] {
            let once = normalize_dimension(raw);
            assert_eq!(normalize_dimension(&once), once);
        }
    }

    #[test]
    fn test_derive_known_codes() {
        assert_eq!(derive_product_code("18", "B/BB", "1250x2500"), "18/02/05");
        assert_eq!(derive_product_code("18,5", "B/BB", "1250x2500"), "18.5/02/05");
    }

    #[test]
    fn test_derive_unknown_dimension_falls_back() {
        assert_eq!(
            derive_product_code("18", "B/BB", "9999x9999"),
            "18/02/9999x9999"
        );
    }

    #[test]
    fn test_derive_unknown_quality_falls_back() {
        assert_eq!(derive_product_code("12", "F1/W1", "1525x1525"), "12/F1/W1/02");
    }

    #[test]
    fn test_derive_quality_case_insensitive() {
        assert_eq!(
            derive_product_code("9", "bb/cp", "1220x2440"),
            derive_product_code("9", "BB/CP", "1220x2440")
        );
    }

    #[test]
    fn test_derive_quality_by_code() {
        assert_eq!(derive_product_code("9", "05", "1220x2440"), "9/05/03");
    }

    #[test]
    fn test_derive_incomplete_is_empty() {
        assert_eq!(derive_product_code("", "B/BB", "1250x2500"), "");
        assert_eq!(derive_product_code("18", "", "1250x2500"), "");
        assert_eq!(derive_product_code("18", "B/BB", ""), "");
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = derive_product_code("21", "CP/C", "2150x3850");
        let b = derive_product_code("21", "CP/C", "2150x3850");
        assert_eq!(a, b);
        assert_eq!(a, "21/18/27");
    }
}
