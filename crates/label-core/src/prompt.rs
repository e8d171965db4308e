//! Extraction prompt for the generative model

use crate::tables::QualityEntry;

/// Build the instruction sent to the model for one order document
///
/// The quality table is embedded as a JSON list of `{display, value}`
/// objects so the model can map grades to codes itself.
pub fn build_extraction_prompt(document_text: &str, qualities: &[QualityEntry]) -> String {
    let options = serde_json::to_string(qualities).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"You are an assistant that extracts specific information from plywood order documents.
The document contains a table of line items. For each line item, you need to extract the following details:

1. Plywood Thickness: From a "Thickness" column (numeric value only, e.g., "18").
2. Dimension: Combine "Width" and "Length" columns into "WIDTHxLENGTH" format (e.g., "1250x2500"). Ensure no extra spaces.
3. Plywood DQ/Quality (dq):
   * Read the quality text from the document's "Quality" column (e.g., "F1/W1", "BB/CP").
   * You are provided with a list of known DQ options: {options}. This list contains objects with "display" (textual representation) and "value" (code) fields.
   * Match the extracted quality text (or its close variant, e.g., "F1/W1" for "F/W I") to a "display" field in the provided DQ options.
   * If a match is found, use the corresponding "value" (DQ code) for the "dq" field in your output (e.g., if the document says "B/BB", use code "02").
   * If no confident match is found, use the original quality text from the document for the "dq" field.
4. Plywood Type (type): Look for "EXT" or "MR". If not clearly identifiable, return an empty string "".
5. Quantity for Display (quantityForDisplay): From a "Pieces per pack" or similar column. Format as a string like "X pcs" or "X sheets" (e.g., "50 pcs").
6. Number of Labels (numberOfLabels): From a "Packs" or similar column (integer representing how many packs/labels of this item).

Return the extracted information as a JSON array, where each object in the array represents one line item.
Each object should have the keys: "thickness", "dimension", "dq", "type", "quantityForDisplay", "numberOfLabels".
If a specific piece of information for an item is not found or cannot be reliably extracted:
  - For "thickness", "dimension", "dq", "quantityForDisplay": use an empty string "".
  - For "type": use "" if not EXT/MR.
  - For "numberOfLabels": use 1 if not found or invalid.

Do not add any explanations or markdown formatting around the JSON array. Ensure the output is ONLY the JSON array.

Document Text:
---
{document_text}
---
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::ALL_QUALITIES;

    #[test]
    fn test_prompt_embeds_table_and_text() {
        let prompt = build_extraction_prompt("Sklejka 18mm B/BB 1250x2500", ALL_QUALITIES);
        assert!(prompt.contains(r#"{"display":"B/BB","value":"02"}"#));
        assert!(prompt.contains("---\nSklejka 18mm B/BB 1250x2500\n---"));
        assert!(prompt.contains("\"quantityForDisplay\", \"numberOfLabels\""));
    }
}
