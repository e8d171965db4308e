//! Layout, print format and contact schema types

use crate::blocks::LabelElement;
use crate::{Result, TemplateError};
use serde::{Deserialize, Serialize};

/// Identifier of the built-in layout
pub const INITIAL_LAYOUT_ID: &str = "initial";

/// Position and size of one label element
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ElementStyle {
    /// Horizontal center, percent of label width from the left
    pub x: f64,

    /// Vertical center, percent of label height from the top
    pub y: f64,

    /// Font size in points
    #[serde(rename = "fontSize")]
    pub font_size: f64,
}

impl ElementStyle {
    pub const fn new(x: f64, y: f64, font_size: f64) -> Self {
        Self { x, y, font_size }
    }
}

/// Element positions for one label layout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LabelLayout {
    pub thickness: ElementStyle,
    pub dimension: ElementStyle,
    #[serde(rename = "dq")]
    pub quality: ElementStyle,
    #[serde(rename = "plywoodCode")]
    pub product_code: ElementStyle,
    #[serde(rename = "quantityLabel")]
    pub quantity_caption: ElementStyle,
    pub quantity: ElementStyle,
    #[serde(rename = "typeLabel")]
    pub type_caption: ElementStyle,
    #[serde(rename = "type")]
    pub plywood_type: ElementStyle,
    pub footer: ElementStyle,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self::initial()
    }
}

impl LabelLayout {
    /// The built-in layout
    pub const fn initial() -> Self {
        Self {
            thickness: ElementStyle::new(50.0, 35.0, 42.0),
            dimension: ElementStyle::new(50.0, 50.0, 72.0),
            quality: ElementStyle::new(50.0, 65.0, 42.0),
            product_code: ElementStyle::new(50.0, 75.0, 11.0),
            quantity_caption: ElementStyle::new(15.0, 84.0, 11.0),
            quantity: ElementStyle::new(15.0, 91.0, 32.0),
            type_caption: ElementStyle::new(85.0, 84.0, 11.0),
            plywood_type: ElementStyle::new(85.0, 91.0, 32.0),
            footer: ElementStyle::new(50.0, 98.0, 7.0),
        }
    }

    /// Style of one element
    pub fn get(&self, element: LabelElement) -> ElementStyle {
        match element {
            LabelElement::Thickness => self.thickness,
            LabelElement::Dimension => self.dimension,
            LabelElement::Quality => self.quality,
            LabelElement::ProductCode => self.product_code,
            LabelElement::QuantityCaption => self.quantity_caption,
            LabelElement::Quantity => self.quantity,
            LabelElement::TypeCaption => self.type_caption,
            LabelElement::Type => self.plywood_type,
            LabelElement::Footer => self.footer,
        }
    }

    /// Replace the style of one element
    pub fn set(&mut self, element: LabelElement, style: ElementStyle) {
        let slot = match element {
            LabelElement::Thickness => &mut self.thickness,
            LabelElement::Dimension => &mut self.dimension,
            LabelElement::Quality => &mut self.quality,
            LabelElement::ProductCode => &mut self.product_code,
            LabelElement::QuantityCaption => &mut self.quantity_caption,
            LabelElement::Quantity => &mut self.quantity,
            LabelElement::TypeCaption => &mut self.type_caption,
            LabelElement::Type => &mut self.plywood_type,
            LabelElement::Footer => &mut self.footer,
        };
        *slot = style;
    }

    /// All elements with their styles, in render order
    pub fn elements(&self) -> impl Iterator<Item = (LabelElement, ElementStyle)> + '_ {
        LabelElement::ALL
            .into_iter()
            .map(move |element| (element, self.get(element)))
    }
}

/// A user-saved layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedLayout {
    pub id: String,
    pub name: String,
    pub layout: LabelLayout,
}

/// Saved layouts plus the designated default
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutLibrary {
    layouts: Vec<SavedLayout>,
    default_id: Option<String>,
}

impl LayoutLibrary {
    pub fn new(layouts: Vec<SavedLayout>, default_id: Option<String>) -> Self {
        Self {
            layouts,
            default_id,
        }
    }

    pub fn layouts(&self) -> &[SavedLayout] {
        &self.layouts
    }

    pub fn default_id(&self) -> Option<&str> {
        self.default_id.as_deref()
    }

    pub fn find(&self, id: &str) -> Option<&SavedLayout> {
        self.layouts.iter().find(|saved| saved.id == id)
    }

    /// Save a copy of `layout` under `name`
    ///
    /// Blank names are rejected; the name is stored trimmed.
    pub fn save(&mut self, id: &str, name: &str, layout: &LabelLayout) -> Result<&SavedLayout> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TemplateError::LayoutError(
                "Please enter a name for the layout.".to_string(),
            ));
        }

        self.layouts.push(SavedLayout {
            id: id.to_string(),
            name: name.to_string(),
            layout: *layout,
        });
        let idx = self.layouts.len() - 1;
        Ok(&self.layouts[idx])
    }

    /// Layout for an id; `"initial"` is the built-in layout
    pub fn select(&self, id: &str) -> Option<LabelLayout> {
        if id == INITIAL_LAYOUT_ID {
            return Some(LabelLayout::initial());
        }
        self.find(id).map(|saved| saved.layout)
    }

    /// Mark a saved layout as the default
    pub fn set_default(&mut self, id: &str) -> Result<()> {
        if id == INITIAL_LAYOUT_ID || self.find(id).is_none() {
            return Err(TemplateError::LayoutError(
                "Please select a saved layout to set as default.".to_string(),
            ));
        }
        self.default_id = Some(id.to_string());
        Ok(())
    }

    pub fn clear_default(&mut self) {
        self.default_id = None;
    }

    /// Delete a saved layout, clearing the default if it pointed there
    pub fn delete(&mut self, id: &str) -> Result<SavedLayout> {
        let idx = self
            .layouts
            .iter()
            .position(|saved| saved.id == id)
            .ok_or_else(|| {
                TemplateError::LayoutError("Please select a saved layout to delete.".to_string())
            })?;

        if self.default_id.as_deref() == Some(id) {
            self.default_id = None;
        }
        Ok(self.layouts.remove(idx))
    }

    /// Layout to activate on startup: the default if it still exists
    pub fn startup_layout(&self) -> (String, LabelLayout) {
        self.default_id
            .as_deref()
            .and_then(|id| self.find(id))
            .map(|saved| (saved.id.clone(), saved.layout))
            .unwrap_or_else(|| (INITIAL_LAYOUT_ID.to_string(), LabelLayout::initial()))
    }
}

/// Physical label format
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrintFormat {
    pub name: &'static str,
    /// Printed width in millimetres
    pub print_width_mm: f64,
    /// Printed height in millimetres
    pub print_height_mm: f64,
    /// Preview width in pixels
    pub screen_width_px: u32,
    /// Preview height in pixels
    pub screen_height_px: u32,
    pub description: &'static str,
}

/// Available print formats; the first is the default
pub const PRINT_FORMATS: &[PrintFormat] = &[
    PrintFormat {
        name: "A5 Landscape",
        print_width_mm: 210.0,
        print_height_mm: 148.0,
        screen_width_px: 700,
        screen_height_px: 495,
        description: "Standard A5 Landscape (210mm x 148mm)",
    },
    PrintFormat {
        name: "A5 Portrait",
        print_width_mm: 148.0,
        print_height_mm: 210.0,
        screen_width_px: 495,
        screen_height_px: 700,
        description: "Standard A5 Portrait (148mm x 210mm)",
    },
    PrintFormat {
        name: "Small Label (10x7cm)",
        print_width_mm: 100.0,
        print_height_mm: 70.0,
        screen_width_px: 450,
        screen_height_px: 315,
        description: "Small Label (100mm x 70mm)",
    },
];

impl PrintFormat {
    /// Look up a format by its exact name
    pub fn find(name: &str) -> Option<&'static PrintFormat> {
        PRINT_FORMATS.iter().find(|format| format.name == name)
    }

    /// The default format (A5 Landscape)
    pub fn default_format() -> &'static PrintFormat {
        &PRINT_FORMATS[0]
    }

    /// CSS aspect ratio of the preview, `4 / 3` for degenerate sizes
    pub fn aspect_ratio(&self) -> String {
        if self.print_height_mm == 0.0 {
            return "4 / 3".to_string();
        }
        format!("{} / {}", self.print_width_mm, self.print_height_mm)
    }
}

/// How many label instances share one A4 sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetArrangement {
    Single,
    #[default]
    Double,
}

impl SheetArrangement {
    /// Two per sheet for two or more copies, otherwise one
    pub fn from_copies(copies: u32) -> Self {
        if copies >= 2 {
            SheetArrangement::Double
        } else {
            SheetArrangement::Single
        }
    }

    pub fn per_sheet(&self) -> usize {
        match self {
            SheetArrangement::Single => 1,
            SheetArrangement::Double => 2,
        }
    }
}

/// Issuer details printed in the label footer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactDetails {
    pub company: String,
    pub address: String,
    pub phone: String,
}

impl Default for ContactDetails {
    fn default() -> Self {
        Self {
            company: "Firma Handlowa Smętek Oddział Włocławek".to_string(),
            address: "ul. Barska 12 Włocławek 87-800".to_string(),
            phone: "Tel.: 54 411 19 16".to_string(),
        }
    }
}
