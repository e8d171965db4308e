//! Finalized labels

use crate::code::normalize_thickness;
use crate::form::{FormState, PlywoodType};
use crate::{LabelError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A finalized label, ready for preview and print
///
/// Labels are only built through [`finalize_label`] or the extraction fold
/// and are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    thickness: String,
    dimension: String,
    #[serde(rename = "dq")]
    quality: String,
    #[serde(rename = "plywoodCode")]
    product_code: String,
    #[serde(rename = "type")]
    plywood_type: PlywoodType,
    #[serde(rename = "quantity")]
    quantity_display: String,
    #[serde(rename = "date")]
    issued_date: String,
}

impl Label {
    pub(crate) fn build(
        thickness: &str,
        dimension: &str,
        quality: &str,
        product_code: &str,
        plywood_type: PlywoodType,
        quantity_display: &str,
        issued_date: &str,
    ) -> Self {
        Self {
            thickness: normalize_thickness(thickness),
            dimension: dimension.to_string(),
            quality: quality.to_string(),
            product_code: product_code.to_string(),
            plywood_type,
            quantity_display: quantity_display.to_string(),
            issued_date: issued_date.to_string(),
        }
    }

    /// Thickness with a dot decimal separator
    pub fn thickness(&self) -> &str {
        &self.thickness
    }

    pub fn dimension(&self) -> &str {
        &self.dimension
    }

    /// Quality as entered (text or code)
    pub fn quality(&self) -> &str {
        &self.quality
    }

    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    pub fn plywood_type(&self) -> PlywoodType {
        self.plywood_type
    }

    pub fn quantity_display(&self) -> &str {
        &self.quantity_display
    }

    /// Issue date as `DD.MM.YYYY`
    pub fn issued_date(&self) -> &str {
        &self.issued_date
    }
}

/// Format an issue date the way the printed labels show it (`19.10.2026`)
pub fn format_issued_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Turn form inputs into an immutable label
///
/// The plywood type must be resolved; an unset type is a validation failure
/// rather than a silent default.
pub fn finalize_label(form: &FormState, issued: NaiveDate) -> Result<Label> {
    let plywood_type = form.plywood_type.ok_or_else(|| {
        LabelError::Validation(
            "Please select a Plywood Type before generating a label.".to_string(),
        )
    })?;

    Ok(Label::build(
        &form.thickness,
        &form.dimension,
        &form.quality,
        &form.product_code,
        plywood_type,
        &form.quantity_display,
        &format_issued_date(issued),
    ))
}
