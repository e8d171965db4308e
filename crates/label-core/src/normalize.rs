//! Normalization of AI-extracted line items
//!
//! The model output is untrusted: it may be fenced in a code block, may be a
//! single object instead of an array, and any field may have the wrong type.
//! Parsing goes through `serde_json::Value` first, then every row is coerced
//! by a total function so no row can fail on its own.

use crate::code::{derive_product_code, normalize_dimension};
use crate::form::{type_or_empty, FormState, PlywoodType};
use crate::label::{format_issued_date, Label};
use crate::ExtractError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Keys accepted for each row field, preferred key first
const THICKNESS_KEYS: &[&str] = &["thickness"];
const DIMENSION_KEYS: &[&str] = &["dimension"];
const QUALITY_KEYS: &[&str] = &["dq", "quality"];
const TYPE_KEYS: &[&str] = &["type"];
const QUANTITY_KEYS: &[&str] = &["quantityForDisplay", "quantityDisplay", "quantity"];
const LABEL_COUNT_KEYS: &[&str] = &["numberOfLabels", "labelCount"];

/// One normalized row of order data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub thickness: String,
    /// Normalized `WIDTHxLENGTH`
    pub dimension: String,
    pub quality: String,
    #[serde(rename = "type")]
    #[serde(default, with = "type_or_empty")]
    pub plywood_type: Option<PlywoodType>,
    pub quantity_display: String,
    /// Number of labels to print for this row
    pub label_count: u32,
}

impl LineItem {
    /// Product code for this row, empty when any input is missing
    pub fn product_code(&self) -> String {
        derive_product_code(&self.thickness, &self.quality, &self.dimension)
    }
}

/// Strip a surrounding Markdown code fence (```` ```json ... ``` ````)
///
/// Text without a complete fence is returned trimmed but otherwise unchanged.
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.len() < 6 || !trimmed.starts_with("```") || !trimmed.ends_with("```") {
        return trimmed;
    }

    let body = &trimmed[3..trimmed.len() - 3];
    // Optional language tag directly after the opening fence
    let body = body.trim_start_matches(|c: char| c.is_alphanumeric() || c == '_');
    let body = body.trim();

    if body.is_empty() {
        trimmed
    } else {
        body
    }
}

/// Parse raw model output into normalized line items
///
/// Errors carry the (fence-stripped) raw payload for diagnostics.
pub fn parse_model_output(raw: &str) -> std::result::Result<Vec<LineItem>, ExtractError> {
    let json = strip_code_fence(raw);

    let value: Value = serde_json::from_str(json).map_err(|e| ExtractError::Parse {
        message: e.to_string(),
        raw: json.to_string(),
    })?;

    normalize_rows(value, json)
}

/// Coerce a parsed response into line items
///
/// An array is taken as-is. A lone object that looks like a row (has a
/// `thickness` or `dimension` key) is adapted into a one-element array.
pub fn normalize_rows(value: Value, raw: &str) -> std::result::Result<Vec<LineItem>, ExtractError> {
    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(obj) if obj.contains_key("thickness") || obj.contains_key("dimension") => {
            warn!("AI response was a single object, adapting it to a one-row array");
            vec![Value::Object(obj)]
        }
        Value::Object(_) => {
            return Err(ExtractError::UnexpectedShape {
                reason: "object does not appear to be a single line item".to_string(),
                raw: raw.to_string(),
            })
        }
        _ => {
            return Err(ExtractError::UnexpectedShape {
                reason: "expected an array of line items".to_string(),
                raw: raw.to_string(),
            })
        }
    };

    Ok(rows.iter().map(normalize_row).collect())
}

/// Coerce one loosely-typed row; never fails
pub fn normalize_row(value: &Value) -> LineItem {
    let empty = Map::new();
    let obj = value.as_object().unwrap_or(&empty);

    let quantity_display = string_field(obj, QUANTITY_KEYS);
    let label_count = coerce_label_count(lookup(obj, LABEL_COUNT_KEYS), &quantity_display);

    LineItem {
        thickness: string_field(obj, THICKNESS_KEYS),
        dimension: normalize_dimension(&string_field(obj, DIMENSION_KEYS)),
        quality: string_field(obj, QUALITY_KEYS),
        plywood_type: lookup(obj, TYPE_KEYS)
            .and_then(Value::as_str)
            .and_then(PlywoodType::parse),
        quantity_display,
        label_count,
    }
}

/// Coerce a label count
///
/// Positive numbers are truncated toward zero, anything else becomes 1. A
/// count that truncates to zero is promoted to 1 when a quantity is present.
pub fn coerce_label_count(value: Option<&Value>, quantity_display: &str) -> u32 {
    let count = match value.and_then(Value::as_f64) {
        Some(n) if n.is_finite() && n > 0.0 => n.trunc().min(u32::MAX as f64) as u32,
        _ => 1,
    };

    if count == 0 && !quantity_display.is_empty() {
        1
    } else {
        count
    }
}

fn lookup<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}

fn string_field(obj: &Map<String, Value>, keys: &[&str]) -> String {
    lookup(obj, keys)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// Result of folding extracted rows into queued labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldOutcome {
    /// Labels to append to the print queue, in row order
    pub labels: Vec<Label>,
    /// Form contents for the first row, if any row was extracted
    pub first_item: Option<FormState>,
    /// Type used for rows that did not state one
    pub fallback_type: PlywoodType,
    /// Whether any row needed the fallback type
    pub type_substituted: bool,
    /// Rows that contributed no labels
    pub skipped: usize,
    /// Number of rows analyzed
    pub rows: usize,
}

impl FoldOutcome {
    /// User-facing summary of the fold
    pub fn status_message(&self) -> String {
        if self.rows == 0 {
            return "No line items could be extracted from the PDF. Please check the document content or try manual entry.".to_string();
        }

        if self.labels.is_empty() {
            return format!(
                "PDF analyzed with {} item(s). No labels were added to the queue. This could be due to missing critical data for all extracted items, or if all items had zero packs. The form has been populated with the first item's details for review.",
                self.rows
            );
        }

        let mut msg = format!(
            "{} label(s) from {} PDF item(s) added to the print queue.",
            self.labels.len(),
            self.rows
        );
        if self.type_substituted {
            msg.push_str(&format!(
                " Plywood Type for items not specified in the PDF was set to '{}'. Please verify.",
                self.fallback_type
            ));
        }
        if self.skipped > 0 {
            msg.push_str(&format!(
                " {} item(s) were skipped because they had no labels to print.",
                self.skipped
            ));
        }
        msg.push_str(" Please verify DQ values; they were mapped where possible using the full DQ list.");
        msg
    }
}

/// Fold normalized rows into labels
///
/// Rows without a type use the first row's type, else `current_type`, else
/// EXT. A row adds `label_count` copies of its label; rows with a zero
/// count are skipped and counted.
pub fn fold_rows(
    rows: &[LineItem],
    current_type: Option<PlywoodType>,
    issued: NaiveDate,
) -> FoldOutcome {
    let fallback_type = rows
        .first()
        .and_then(|row| row.plywood_type)
        .or(current_type)
        .unwrap_or(PlywoodType::Ext);

    let first_item = rows.first().map(|row| FormState {
        thickness: row.thickness.clone(),
        dimension: row.dimension.clone(),
        quality: row.quality.clone(),
        product_code: row.product_code(),
        plywood_type: Some(fallback_type),
        quantity_display: row.quantity_display.clone(),
    });

    let date = format_issued_date(issued);
    let mut labels = Vec::new();
    let mut skipped = 0;
    let mut type_substituted = false;

    for row in rows {
        if row.plywood_type.is_none() {
            type_substituted = true;
        }
        let plywood_type = row.plywood_type.unwrap_or(fallback_type);

        if row.label_count == 0 {
            warn!(
                thickness = %row.thickness,
                dimension = %row.dimension,
                "Skipping line item with no labels to print"
            );
            skipped += 1;
            continue;
        }

        let label = Label::build(
            &row.thickness,
            &row.dimension,
            &row.quality,
            &row.product_code(),
            plywood_type,
            &row.quantity_display,
            &date,
        );
        for _ in 0..row.label_count {
            labels.push(label.clone());
        }
    }

    debug!(
        rows = rows.len(),
        labels = labels.len(),
        skipped,
        "Folded extracted rows"
    );

    FoldOutcome {
        labels,
        first_item,
        fallback_type,
        type_substituted,
        skipped,
        rows: rows.len(),
    }
}
