//! Remembered label presets

use crate::form::FormState;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Set of remembered form presets, deduplicated by full structural equality
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RememberedLabels {
    entries: Vec<FormState>,
}

impl RememberedLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored entries, dropping duplicates
    pub fn from_entries(entries: Vec<FormState>) -> Self {
        let mut set = Self::new();
        for entry in entries {
            set.remember(entry);
        }
        set
    }

    /// Add a preset unless an identical one is already stored
    ///
    /// Returns `true` if the preset was added.
    pub fn remember(&mut self, preset: FormState) -> bool {
        if self.entries.contains(&preset) {
            return false;
        }
        self.entries.push(preset);
        true
    }

    /// Remove every entry equal to `preset`
    ///
    /// Returns `true` if anything was removed.
    pub fn remove(&mut self, preset: &FormState) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry != preset);
        self.entries.len() != before
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[FormState] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in display order (see [`compare_presets`])
    pub fn sorted(&self) -> Vec<&FormState> {
        let mut sorted: Vec<&FormState> = self.entries.iter().collect();
        sorted.sort_by(|a, b| compare_presets(a, b));
        sorted
    }
}

/// Display order of presets
///
/// By type literal (unset first, then EXT, then MR), then by numeric
/// thickness ascending; thicknesses that do not start with a number go last.
pub fn compare_presets(a: &FormState, b: &FormState) -> Ordering {
    let type_a = a.plywood_type.map(|t| t.as_str()).unwrap_or("");
    let type_b = b.plywood_type.map(|t| t.as_str()).unwrap_or("");

    type_a.cmp(type_b).then_with(|| {
        match (
            parse_leading_float(&a.thickness),
            parse_leading_float(&b.thickness),
        ) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        }
    })
}

/// Parse the longest leading decimal number, ignoring leading whitespace
///
/// `"18mm"` → 18, `"6.5"` → 6.5, `"18,5"` → 18, `"abc"` → `None`.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start || has_digits {
            has_digits |= frac_end > frac_start;
            end = frac_end;
        }
    }

    if !has_digits {
        return None;
    }
    s[..end].trim_end_matches('.').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::PlywoodType;

    fn preset(thickness: &str, plywood_type: Option<PlywoodType>) -> FormState {
        FormState {
            thickness: thickness.to_string(),
            dimension: "1250x2500".to_string(),
            quality: "B/BB".to_string(),
            product_code: String::new(),
            plywood_type,
            quantity_display: String::new(),
        }
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("18"), Some(18.0));
        assert_eq!(parse_leading_float("6.5"), Some(6.5));
        assert_eq!(parse_leading_float("18mm"), Some(18.0));
        assert_eq!(parse_leading_float(" 18,5"), Some(18.0));
        assert_eq!(parse_leading_float(".5"), Some(0.5));
        assert_eq!(parse_leading_float("12."), Some(12.0));
        assert_eq!(parse_leading_float("abc"), None);
        assert_eq!(parse_leading_float(""), None);
        assert_eq!(parse_leading_float("."), None);
    }

    #[test]
    fn test_remember_dedups() {
        let mut set = RememberedLabels::new();
        assert!(set.remember(preset("18", Some(PlywoodType::Ext))));
        assert!(!set.remember(preset("18", Some(PlywoodType::Ext))));
        assert!(set.remember(preset("18", Some(PlywoodType::Mr))));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_from_entries_dedups() {
        let set = RememberedLabels::from_entries(vec![
            preset("9", None),
            preset("9", None),
        ]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_sorted_order() {
        let set = RememberedLabels::from_entries(vec![
            preset("18", Some(PlywoodType::Mr)),
            preset("abc", Some(PlywoodType::Ext)),
            preset("21", Some(PlywoodType::Ext)),
            preset("6.5", Some(PlywoodType::Ext)),
            preset("3", Some(PlywoodType::Mr)),
        ]);
        let order: Vec<(&str, Option<PlywoodType>)> = set
            .sorted()
            .iter()
            .map(|p| (p.thickness.as_str(), p.plywood_type))
            .collect();
        assert_eq!(
            order,
            vec![
                ("6.5", Some(PlywoodType::Ext)),
                ("21", Some(PlywoodType::Ext)),
                ("abc", Some(PlywoodType::Ext)),
                ("3", Some(PlywoodType::Mr)),
                ("18", Some(PlywoodType::Mr)),
            ]
        );
    }

    #[test]
    fn test_unset_type_sorts_first() {
        let set = RememberedLabels::from_entries(vec![
            preset("9", Some(PlywoodType::Ext)),
            preset("9", None),
        ]);
        assert_eq!(set.sorted()[0].plywood_type, None);
    }

    #[test]
    fn test_remove() {
        let mut set = RememberedLabels::from_entries(vec![preset("9", None), preset("12", None)]);
        assert!(set.remove(&preset("9", None)));
        assert!(!set.remove(&preset("9", None)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serde_transparent() {
        let set = RememberedLabels::from_entries(vec![preset("9", None)]);
        let json = serde_json::to_string(&set).unwrap();
        assert!(json.starts_with('['));
        let back: RememberedLabels = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
