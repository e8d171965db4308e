//! Integration tests for label-core
//!
//! These follow a label from raw input through code derivation to the queue.

use chrono::NaiveDate;
use label_core::{
    derive_product_code, fold_rows, normalize_dimension, parse_model_output, FormField,
    LabelForm, PlywoodType, PrintQueue, RememberedLabels,
};
use pretty_assertions::assert_eq;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

#[test]
fn test_manual_entry_end_to_end() {
    let dimension = normalize_dimension("1250 x 2500");
    assert_eq!(dimension, "1250x2500");
    assert_eq!(derive_product_code("18,5", "B/BB", &dimension), "18.5/02/05");

    let mut form = LabelForm::new();
    form.set_field(FormField::Thickness, "18,5");
    form.set_field(FormField::Quality, "B/BB");
    form.set_field(FormField::Dimension, "1250 x 2500");
    form.set_field(FormField::Quantity, "45 pcs");
    form.set_type(Some(PlywoodType::Mr));

    let label = form.finalize(today()).unwrap();
    assert_eq!(label.thickness(), "18.5");
    assert_eq!(label.product_code(), "18.5/02/05");
    assert_eq!(label.plywood_type(), PlywoodType::Mr);
    assert_eq!(label.issued_date(), "19.10.2026");

    let mut queue = PrintQueue::new();
    queue.push(label);
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_unset_type_is_rejected() {
    let mut form = LabelForm::new();
    form.set_field(FormField::Thickness, "18");
    form.set_type(None);
    assert!(form.finalize(today()).is_err());
}

#[test]
fn test_extraction_end_to_end() {
    let raw = r#"```json
[
  {"thickness": "18", "dimension": "1250 x 2500", "dq": "B/BB", "type": "EXT", "quantityForDisplay": "50 pcs", "numberOfLabels": 2},
  {"thickness": "21", "dimension": "2150x3850", "dq": "cp/c", "type": "", "quantityForDisplay": "30 pcs", "numberOfLabels": -3},
  {"thickness": "9", "dimension": "9999x9999", "dq": "Unknown", "type": "XYZ", "quantityForDisplay": "", "numberOfLabels": 0.4}
]
```"#;

    let rows = parse_model_output(raw).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].label_count, 1);
    assert_eq!(rows[2].plywood_type, None);
    assert_eq!(rows[2].label_count, 0);

    let outcome = fold_rows(&rows, Some(PlywoodType::Mr), today());
    assert_eq!(outcome.fallback_type, PlywoodType::Ext);
    assert!(outcome.type_substituted);
    assert_eq!(outcome.skipped, 1);

    let codes: Vec<&str> = outcome.labels.iter().map(|l| l.product_code()).collect();
    assert_eq!(codes, vec!["18/02/05", "18/02/05", "21/18/27"]);
    assert_eq!(outcome.labels[2].plywood_type(), PlywoodType::Ext);

    let mut form = LabelForm::new();
    form.populate(outcome.first_item.clone().unwrap());
    assert_eq!(form.state().product_code, "18/02/05");
}

#[test]
fn test_presets_round_trip_through_json() {
    let mut form = LabelForm::new();
    form.set_field(FormField::Thickness, "12");
    form.set_field(FormField::Quality, "WG");
    form.set_field(FormField::Dimension, "1525x1525");

    let mut presets = RememberedLabels::new();
    presets.remember(form.state().clone());
    presets.remember(form.state().clone());

    let json = serde_json::to_string(&presets).unwrap();
    let restored: RememberedLabels = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, presets);
    assert_eq!(restored.len(), 1);

    let mut other = LabelForm::new();
    other.load_preset(restored.sorted()[0]);
    assert!(other.is_manual());
    assert_eq!(other.state().product_code, "12/09/02");
}
