//! Stored layout parsing

use crate::{LabelLayout, Result, SavedLayout, TemplateError};

/// Parse the saved-layout list from its JSON record
pub fn parse_saved_layouts(json: &str) -> Result<Vec<SavedLayout>> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

/// Parse a single layout from JSON
pub fn parse_layout(json: &str) -> Result<LabelLayout> {
    serde_json::from_str(json).map_err(|e| TemplateError::ParseError(e.to_string()))
}

/// Serialize the saved-layout list for storage
pub fn saved_layouts_to_json(layouts: &[SavedLayout]) -> Result<String> {
    Ok(serde_json::to_string(layouts)?)
}

/// Escape text for inclusion in HTML content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ElementStyle, LabelElement};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_saved_layouts() {
        let json = r#"[{
            "id": "1718000000000",
            "name": "Warehouse",
            "layout": {
                "thickness":   { "x": 50, "y": 35, "fontSize": 42 },
                "dimension":   { "x": 50, "y": 50, "fontSize": 72 },
                "dq":          { "x": 50, "y": 65, "fontSize": 42 },
                "plywoodCode": { "x": 50, "y": 75, "fontSize": 11 },
                "quantityLabel": { "x": 15, "y": 84, "fontSize": 11 },
                "quantity":    { "x": 15, "y": 91, "fontSize": 32 },
                "typeLabel":   { "x": 85, "y": 84, "fontSize": 11 },
                "type":        { "x": 80, "y": 90, "fontSize": 30 },
                "footer":      { "x": 50, "y": 98, "fontSize": 7 }
            }
        }]"#;

        let layouts = parse_saved_layouts(json).unwrap();
        assert_eq!(layouts.len(), 1);
        assert_eq!(layouts[0].name, "Warehouse");
        assert_eq!(
            layouts[0].layout.get(LabelElement::Type),
            ElementStyle::new(80.0, 90.0, 30.0)
        );
    }

    #[test]
    fn test_parse_layout_missing_element() {
        let json = r#"{ "thickness": { "x": 50, "y": 35, "fontSize": 42 } }"#;
        assert!(matches!(parse_layout(json), Err(TemplateError::ParseError(_))));
    }

    #[test]
    fn test_saved_layouts_round_trip() {
        let mut layout = LabelLayout::initial();
        layout.set(LabelElement::Footer, ElementStyle::new(50.0, 96.5, 8.0));
        let layouts = vec![
            SavedLayout {
                id: "1".into(),
                name: "A".into(),
                layout,
            },
            SavedLayout {
                id: "2".into(),
                name: "B".into(),
                layout: LabelLayout::initial(),
            },
        ];
        let json = saved_layouts_to_json(&layouts).unwrap();
        assert_eq!(parse_saved_layouts(&json).unwrap(), layouts);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("18mm"), "18mm");
        assert_eq!(
            escape_html("<b>\"A&B\"</b>"),
            "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;"
        );
    }
}
