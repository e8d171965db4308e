//! WASM bindings for the plywood label tool
//!
//! This crate provides JavaScript-friendly API for:
//! - Product code derivation and reference tables
//! - Normalizing AI extraction output and folding it into labels
//! - Rendering print HTML for labels and the queue verification list
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { deriveProductCode, parseModelOutput, foldRows, renderLabels } from 'plylabel-wasm';
//!
//! await init();
//!
//! deriveProductCode("18,5", "B/BB", "1250x2500"); // "18.5/02/05"
//!
//! const rows = parseModelOutput(responseText);
//! const fold = foldRows(rows, "EXT", "2026-10-19");
//! const html = renderLabels(fold.labels, null, "A5 Landscape", 2);
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use label_core::tables::{FREQUENTLY_USED_QUALITIES, PREDEFINED_THICKNESS_VALUES};
use label_core::{FormState, Label, LineItem, PlywoodType, RememberedLabels, ALL_QUALITIES};
use label_template::{LabelLayout, PrintFormat, PrintRenderer, SheetArrangement};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_date(date: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| format!("Invalid date '{date}': {e}"))
}

fn parse_timestamp(at: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(at, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| format!("Invalid timestamp '{at}': {e}"))
}

/// Derive `<thickness>/<quality code>/<dimension code>`
///
/// @returns "" when any input is empty
#[wasm_bindgen(js_name = deriveProductCode)]
pub fn derive_product_code(thickness: &str, quality: &str, dimension: &str) -> String {
    label_core::derive_product_code(thickness, quality, dimension)
}

/// Remove all whitespace from a dimension string
#[wasm_bindgen(js_name = normalizeDimension)]
pub fn normalize_dimension(dimension: &str) -> String {
    label_core::normalize_dimension(dimension)
}

/// Display text for a quality code or text (unknown input is returned as-is)
#[wasm_bindgen(js_name = qualityDisplayText)]
pub fn quality_display_text(code_or_text: &str) -> String {
    label_core::quality_display_text(code_or_text).to_string()
}

/// Quality options for pickers
///
/// @param frequent - true for the short list, false for the full table
/// @returns Array of { display, value }
#[wasm_bindgen(js_name = qualityOptions)]
pub fn quality_options(frequent: bool) -> Result<JsValue, JsValue> {
    let options = if frequent {
        FREQUENTLY_USED_QUALITIES
    } else {
        ALL_QUALITIES
    };
    Ok(serde_wasm_bindgen::to_value(options)?)
}

/// Thickness values offered in the picker
#[wasm_bindgen(js_name = thicknessOptions)]
pub fn thickness_options() -> Vec<JsValue> {
    PREDEFINED_THICKNESS_VALUES
        .iter()
        .map(|t| JsValue::from_str(t))
        .collect()
}

/// Parse raw model output into normalized rows
///
/// @param raw - Model response text, optionally fenced
/// @returns Array of rows; throws with the raw payload on failure
#[wasm_bindgen(js_name = parseModelOutput)]
pub fn parse_model_output(raw: &str) -> Result<JsValue, JsValue> {
    let rows = label_core::parse_model_output(raw).map_err(js_error)?;
    Ok(serde_wasm_bindgen::to_value(&rows)?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FoldResult {
    labels: Vec<Label>,
    first_item: Option<FormState>,
    status: String,
    skipped: usize,
}

/// Fold normalized rows into labels
///
/// @param rows - Rows from parseModelOutput
/// @param currentType - Type currently selected in the form ("EXT", "MR" or "")
/// @param date - Issue date as YYYY-MM-DD
/// @returns { labels, firstItem, status, skipped }
#[wasm_bindgen(js_name = foldRows)]
pub fn fold_rows(rows: JsValue, current_type: &str, date: &str) -> Result<JsValue, JsValue> {
    let rows: Vec<LineItem> = serde_wasm_bindgen::from_value(rows)?;
    let issued = parse_date(date).map_err(js_error)?;

    let outcome = label_core::fold_rows(&rows, PlywoodType::parse(current_type), issued);
    let result = FoldResult {
        status: outcome.status_message(),
        skipped: outcome.skipped,
        first_item: outcome.first_item,
        labels: outcome.labels,
    };
    Ok(serde_wasm_bindgen::to_value(&result)?)
}

/// Finalize form contents into a label
///
/// @param form - Form state object
/// @param date - Issue date as YYYY-MM-DD
/// @returns Label; throws when no type is selected
#[wasm_bindgen(js_name = finalizeLabel)]
pub fn finalize_label(form: JsValue, date: &str) -> Result<JsValue, JsValue> {
    let form: FormState = serde_wasm_bindgen::from_value(form)?;
    let issued = parse_date(date).map_err(js_error)?;
    let label = label_core::finalize_label(&form, issued).map_err(js_error)?;
    Ok(serde_wasm_bindgen::to_value(&label)?)
}

/// Deduplicate and sort remembered presets for display
#[wasm_bindgen(js_name = sortPresets)]
pub fn sort_presets(presets: JsValue) -> Result<JsValue, JsValue> {
    let entries: Vec<FormState> = serde_wasm_bindgen::from_value(presets)?;
    let presets = RememberedLabels::from_entries(entries);
    Ok(serde_wasm_bindgen::to_value(&presets.sorted())?)
}

/// Render print HTML for labels, one A4 page per label
///
/// @param labels - Array of labels
/// @param layout - Layout object, or null for the initial layout
/// @param formatName - Print format name
/// @param copies - Number of copies; 2 or more puts two labels on each sheet
#[wasm_bindgen(js_name = renderLabels)]
pub fn render_labels(
    labels: JsValue,
    layout: JsValue,
    format_name: &str,
    copies: u32,
) -> Result<String, JsValue> {
    let labels: Vec<Label> = serde_wasm_bindgen::from_value(labels)?;
    let layout = read_layout(layout)?;
    render_labels_html(&labels, &layout, format_name, copies).map_err(js_error)
}

/// Render the queue verification list
///
/// @param labels - Array of labels
/// @param generatedAt - Local time as YYYY-MM-DDTHH:MM:SS
#[wasm_bindgen(js_name = renderQueueList)]
pub fn render_queue_list(labels: JsValue, generated_at: &str) -> Result<String, JsValue> {
    let labels: Vec<Label> = serde_wasm_bindgen::from_value(labels)?;
    let at = parse_timestamp(generated_at).map_err(js_error)?;
    let layout = LabelLayout::initial();
    PrintRenderer::new(&layout, PrintFormat::default_format())
        .render_queue_list(&labels, at)
        .map_err(js_error)
}

/// Build the extraction prompt for a document's text
#[wasm_bindgen(js_name = buildExtractionPrompt)]
pub fn build_extraction_prompt(document_text: &str) -> String {
    label_core::build_extraction_prompt(document_text, ALL_QUALITIES)
}

fn read_layout(layout: JsValue) -> Result<LabelLayout, JsValue> {
    if layout.is_null() || layout.is_undefined() {
        return Ok(LabelLayout::initial());
    }
    Ok(serde_wasm_bindgen::from_value(layout)?)
}

fn render_labels_html(
    labels: &[Label],
    layout: &LabelLayout,
    format_name: &str,
    copies: u32,
) -> Result<String, String> {
    let format =
        PrintFormat::find(format_name).ok_or_else(|| format!("Unknown print format: {format_name}"))?;
    PrintRenderer::new(layout, format)
        .with_arrangement(SheetArrangement::from_copies(copies))
        .render_labels(labels)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn label() -> Label {
        let form = FormState {
            thickness: "18".into(),
            dimension: "1250x2500".into(),
            quality: "B/BB".into(),
            product_code: "18/02/05".into(),
            plywood_type: Some(PlywoodType::Ext),
            quantity_display: "50 pcs".into(),
        };
        label_core::finalize_label(&form, parse_date("2026-10-19").unwrap()).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_code_helpers() {
        assert_eq!(derive_product_code("18,5", "B/BB", "1250x2500"), "18.5/02/05");
        assert_eq!(normalize_dimension(" 1250 x 2500 "), "1250x2500");
        assert_eq!(quality_display_text("02"), "B/BB");
    }

    #[wasm_bindgen_test]
    fn test_render_labels_html() {
        let html =
            render_labels_html(&[label()], &LabelLayout::initial(), "A5 Landscape", 2).unwrap();
        assert_eq!(html.matches("<div class=\"label-instance\">").count(), 2);
        assert!(render_labels_html(&[label()], &LabelLayout::initial(), "Letter", 1).is_err());
    }

    #[wasm_bindgen_test]
    fn test_parse_inputs() {
        assert!(parse_date("19.10.2026").is_err());
        assert!(parse_timestamp("2026-10-19T08:30:00").is_ok());
    }

    #[wasm_bindgen_test]
    fn test_prompt() {
        assert!(build_extraction_prompt("order").contains("order"));
    }
}
