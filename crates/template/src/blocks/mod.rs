//! Label elements
//!
//! Each printed label is made of a fixed set of absolutely positioned
//! elements. This module names them and resolves their text for a label.

use crate::schema::ContactDetails;
use crate::TemplateError;
use label_core::{quality_display_text, Label};
use std::fmt;
use std::str::FromStr;

/// A positioned element on the printed label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LabelElement {
    Thickness,
    Dimension,
    Quality,
    ProductCode,
    QuantityCaption,
    Quantity,
    TypeCaption,
    Type,
    Footer,
}

impl LabelElement {
    /// All elements in render order
    pub const ALL: [LabelElement; 9] = [
        LabelElement::Thickness,
        LabelElement::Dimension,
        LabelElement::Quality,
        LabelElement::ProductCode,
        LabelElement::QuantityCaption,
        LabelElement::Quantity,
        LabelElement::TypeCaption,
        LabelElement::Type,
        LabelElement::Footer,
    ];

    /// Key used in stored layouts
    pub fn key(&self) -> &'static str {
        match self {
            LabelElement::Thickness => "thickness",
            LabelElement::Dimension => "dimension",
            LabelElement::Quality => "dq",
            LabelElement::ProductCode => "plywoodCode",
            LabelElement::QuantityCaption => "quantityLabel",
            LabelElement::Quantity => "quantity",
            LabelElement::TypeCaption => "typeLabel",
            LabelElement::Type => "type",
            LabelElement::Footer => "footer",
        }
    }

    /// CSS class of the element (`label-` + lowercased key)
    pub fn css_class(&self) -> String {
        format!("label-{}", self.key().to_lowercase())
    }

    /// Data elements print bold; captions, code and footer do not
    pub fn is_bold(&self) -> bool {
        matches!(
            self,
            LabelElement::Thickness
                | LabelElement::Dimension
                | LabelElement::Quality
                | LabelElement::Quantity
                | LabelElement::Type
        )
    }
}

impl fmt::Display for LabelElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LabelElement {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LabelElement::ALL
            .into_iter()
            .find(|element| element.key() == s)
            .ok_or_else(|| TemplateError::LayoutError(format!("Unknown label element: {s}")))
    }
}

/// Trait for elements that can provide their text for a label
pub trait TextContent {
    /// Get the display text of this element for `label`
    fn get_text(&self, label: &Label, contact: &ContactDetails) -> String;
}

impl TextContent for LabelElement {
    fn get_text(&self, label: &Label, contact: &ContactDetails) -> String {
        match self {
            LabelElement::Thickness => format!("{}mm", label.thickness()),
            LabelElement::Dimension => label.dimension().to_string(),
            LabelElement::Quality => quality_display_text(label.quality()).to_string(),
            LabelElement::ProductCode => format!("Plywood Code: {}", label.product_code()),
            LabelElement::QuantityCaption => "Quantity:".to_string(),
            LabelElement::Quantity => label.quantity_display().to_string(),
            LabelElement::TypeCaption => "Type:".to_string(),
            LabelElement::Type => label.plywood_type().to_string(),
            LabelElement::Footer => format!(
                "{} - {}, {}, {}",
                label.issued_date(),
                contact.company,
                contact.address,
                contact.phone
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use label_core::{finalize_label, FormState, PlywoodType};

    fn label() -> Label {
        let form = FormState {
            thickness: "18".into(),
            dimension: "1250x2500".into(),
            quality: "02".into(),
            product_code: "18/02/05".into(),
            plywood_type: Some(PlywoodType::Mr),
            quantity_display: "50 pcs".into(),
        };
        finalize_label(&form, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()).unwrap()
    }

    #[test]
    fn test_element_keys_round_trip() {
        for element in LabelElement::ALL {
            assert_eq!(element.key().parse::<LabelElement>().unwrap(), element);
        }
        assert!("unknown".parse::<LabelElement>().is_err());
    }

    #[test]
    fn test_css_class() {
        assert_eq!(LabelElement::ProductCode.css_class(), "label-plywoodcode");
        assert_eq!(LabelElement::Quality.css_class(), "label-dq");
    }

    #[test]
    fn test_text_content() {
        let contact = ContactDetails::default();
        let label = label();
        assert_eq!(LabelElement::Thickness.get_text(&label, &contact), "18mm");
        assert_eq!(LabelElement::Quality.get_text(&label, &contact), "B/BB");
        assert_eq!(
            LabelElement::ProductCode.get_text(&label, &contact),
            "Plywood Code: 18/02/05"
        );
        assert_eq!(LabelElement::Type.get_text(&label, &contact), "MR");
        assert!(LabelElement::Footer
            .get_text(&label, &contact)
            .starts_with("19.10.2026 - "));
    }
}
