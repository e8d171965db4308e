//! Label form state and the product-code binding
//!
//! The form owns the free-text fields a user types in. The product code is
//! either derived from those fields (`CodeMode::Auto`) or owned by the user
//! (`CodeMode::Manual`); transitions between the two are explicit methods.

use crate::code::{derive_product_code, normalize_dimension};
use crate::label::{finalize_label, Label};
use crate::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plywood glue type
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlywoodType {
    /// Exterior
    #[serde(rename = "EXT")]
    Ext,
    /// Moisture resistant
    #[serde(rename = "MR")]
    Mr,
}

impl PlywoodType {
    /// All types in display order
    pub const ALL: [PlywoodType; 2] = [PlywoodType::Ext, PlywoodType::Mr];

    /// The literal used in forms, storage and print output
    pub fn as_str(&self) -> &'static str {
        match self {
            PlywoodType::Ext => "EXT",
            PlywoodType::Mr => "MR",
        }
    }

    /// Parse the exact literal (`"EXT"` or `"MR"`); anything else is unset
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "EXT" => Some(PlywoodType::Ext),
            "MR" => Some(PlywoodType::Mr),
            _ => None,
        }
    }
}

impl fmt::Display for PlywoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlywoodType {
    type Err = crate::LabelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| {
            crate::LabelError::Validation(format!("Unknown plywood type '{s}', expected EXT or MR"))
        })
    }
}

/// Serde adapter storing an unset type as an empty string
pub mod type_or_empty {
    use super::PlywoodType;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<PlywoodType>,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(value.map(|t| t.as_str()).unwrap_or(""))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Option<PlywoodType>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(PlywoodType::parse))
    }
}

/// Raw form inputs; also the shape of a remembered preset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(default)]
    pub thickness: String,

    /// Normalized `WIDTHxLENGTH`
    #[serde(default)]
    pub dimension: String,

    /// Quality text or code
    #[serde(rename = "dq")]
    #[serde(default)]
    pub quality: String,

    #[serde(rename = "plywoodCode")]
    #[serde(default)]
    pub product_code: String,

    #[serde(rename = "type")]
    #[serde(default, with = "type_or_empty")]
    pub plywood_type: Option<PlywoodType>,

    #[serde(rename = "quantity")]
    #[serde(default)]
    pub quantity_display: String,
}

impl FormState {
    /// The blank form shown on startup and after a reset
    pub fn initial() -> Self {
        Self {
            plywood_type: Some(PlywoodType::Ext),
            ..Default::default()
        }
    }

    /// Product code derived from the current fields
    pub fn derived_code(&self) -> String {
        derive_product_code(&self.thickness, &self.quality, &self.dimension)
    }
}

/// Editable text fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Thickness,
    Dimension,
    Quality,
    Quantity,
}

/// Who owns the product code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CodeMode {
    /// Recomputed on every relevant field change
    #[default]
    Auto,
    /// User-owned; field changes leave it alone
    Manual,
}

/// Form inputs plus the code binding state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelForm {
    state: FormState,
    mode: CodeMode,
}

impl Default for LabelForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelForm {
    /// Create a form in its initial state (type EXT, automatic code)
    pub fn new() -> Self {
        Self {
            state: FormState::initial(),
            mode: CodeMode::Auto,
        }
    }

    /// Current field values
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Current code mode
    pub fn mode(&self) -> CodeMode {
        self.mode
    }

    /// Whether the product code is user-owned
    pub fn is_manual(&self) -> bool {
        self.mode == CodeMode::Manual
    }

    /// Update a text field; dimensions are normalized on entry
    pub fn set_field(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Thickness => self.state.thickness = value.to_string(),
            FormField::Dimension => self.state.dimension = normalize_dimension(value),
            FormField::Quality => self.state.quality = value.to_string(),
            FormField::Quantity => self.state.quantity_display = value.to_string(),
        }
        self.refresh_code();
    }

    /// Set or clear the plywood type
    pub fn set_type(&mut self, plywood_type: Option<PlywoodType>) {
        self.state.plywood_type = plywood_type;
    }

    /// Direct edit of the code field; takes ownership away from derivation
    pub fn edit_code(&mut self, code: &str) {
        self.state.product_code = code.to_string();
        self.mode = CodeMode::Manual;
    }

    /// Toggle manual mode; leaving it recomputes (or clears) the code at once
    pub fn set_manual(&mut self, manual: bool) {
        if manual {
            self.mode = CodeMode::Manual;
        } else {
            self.mode = CodeMode::Auto;
            self.refresh_code();
        }
    }

    /// Load a remembered preset; its stored code is authoritative
    pub fn load_preset(&mut self, preset: &FormState) {
        let mut state = preset.clone();
        state.plywood_type = state.plywood_type.or(Some(PlywoodType::Ext));
        self.state = state;
        self.mode = CodeMode::Manual;
    }

    /// Replace every field at once and resume automatic derivation
    pub fn populate(&mut self, mut state: FormState) {
        state.dimension = normalize_dimension(&state.dimension);
        self.state = state;
        self.mode = CodeMode::Auto;
        self.refresh_code();
    }

    /// Back to the initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Build an immutable label from the current fields
    pub fn finalize(&self, issued: NaiveDate) -> Result<Label> {
        finalize_label(&self.state, issued)
    }

    fn refresh_code(&mut self) {
        if self.mode == CodeMode::Auto {
            self.state.product_code = self.state.derived_code();
        }
    }
}
