//! Print HTML rendering

use crate::blocks::{LabelElement, TextContent};
use crate::parser::escape_html;
use crate::schema::*;
use crate::{Result, TemplateError};
use chrono::NaiveDateTime;
use label_core::{quality_display_text, Label};
use std::fmt::Write as _;

/// Default label background image
pub const DEFAULT_BACKGROUND_URL: &str = "https://i.postimg.cc/hPtq0y0h/etykieta.png";

/// Renders labels into printable A4 HTML documents
pub struct PrintRenderer<'a> {
    /// Element positions
    layout: &'a LabelLayout,
    /// Physical size of one label instance
    format: &'a PrintFormat,
    arrangement: SheetArrangement,
    contact: ContactDetails,
    background_url: String,
}

impl<'a> PrintRenderer<'a> {
    /// Create a renderer with the default contact details and background
    pub fn new(layout: &'a LabelLayout, format: &'a PrintFormat) -> Self {
        Self {
            layout,
            format,
            arrangement: SheetArrangement::default(),
            contact: ContactDetails::default(),
            background_url: DEFAULT_BACKGROUND_URL.to_string(),
        }
    }

    /// Set how many label instances are printed per sheet
    pub fn with_arrangement(mut self, arrangement: SheetArrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    /// Set the footer contact details
    pub fn with_contact(mut self, contact: ContactDetails) -> Self {
        self.contact = contact;
        self
    }

    /// Set the label background image URL
    pub fn with_background(mut self, url: impl Into<String>) -> Self {
        self.background_url = url.into();
        self
    }

    /// Render a single label as a one-page document
    pub fn render_label(&self, label: &Label) -> String {
        let page = format!(
            "<div class=\"print-container\">{}</div>",
            self.page_content(label)
        );
        self.document("Print Label", &page)
    }

    /// Render every label, one page each, breaking pages between them
    pub fn render_labels(&self, labels: &[Label]) -> Result<String> {
        if labels.is_empty() {
            return Err(TemplateError::RenderError(
                "Print queue is empty. Add labels to the queue first.".to_string(),
            ));
        }

        let last = labels.len() - 1;
        let mut pages = String::new();
        for (i, label) in labels.iter().enumerate() {
            let page_break = if i == last {
                ""
            } else {
                " style=\"page-break-after: always;\""
            };
            let _ = writeln!(
                pages,
                "<div class=\"print-container\"{}>{}</div>",
                page_break,
                self.page_content(label)
            );
        }

        Ok(self.document("Print All Labels", &pages))
    }

    /// Render the queue verification list
    pub fn render_queue_list(&self, labels: &[Label], generated_at: NaiveDateTime) -> Result<String> {
        if labels.is_empty() {
            return Err(TemplateError::RenderError(
                "Print queue is empty. Add labels to the queue first to print a list.".to_string(),
            ));
        }

        let mut items = String::new();
        for (i, label) in labels.iter().enumerate() {
            let _ = writeln!(
                items,
                concat!(
                    "<li><div class=\"item-number\">{}.</div><div class=\"item-content\">",
                    "<div class=\"details-line\"><span class=\"details-line-key\">Grubość i Wymiar:</span> ",
                    "<span class=\"details-value\">{}mm x {}</span></div>",
                    "<div class=\"other-info-line\">",
                    "<span class=\"info-segment\"><span class=\"label-key\">DQ:</span> {}</span>",
                    "<span class=\"info-segment\"><span class=\"label-key\">Kod:</span> {}</span>",
                    "<span class=\"info-segment\"><span class=\"label-key\">Typ:</span> {}</span>",
                    "<span class=\"info-segment\"><span class=\"label-key\">Ilość:</span> {}</span>",
                    "</div></div></li>"
                ),
                i + 1,
                escape_html(label.thickness()),
                escape_html(label.dimension()),
                escape_html(quality_display_text(label.quality())),
                escape_html(label.product_code()),
                label.plywood_type(),
                escape_html(label.quantity_display()),
            );
        }

        Ok(format!(
            concat!(
                "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n",
                "<title>Print Queue Verification List</title>\n<style>{}</style>\n</head>\n<body>\n",
                "<h1>Plywood Label Queue - Verification List</h1>\n",
                "<p class=\"meta-info\">Generated on: {} | Total labels in queue: {}</p>\n",
                "<ul>\n{}</ul>\n",
                "<button class=\"print-button\" onclick=\"window.print()\">Print This List</button>\n",
                "</body>\n</html>\n"
            ),
            QUEUE_LIST_STYLES,
            format_generated_at(generated_at),
            labels.len(),
            items
        ))
    }

    /// Stylesheet for one label instance and its positioned elements
    pub fn label_styles(&self) -> String {
        let mut css = format!(
            concat!(
                ".label-instance {{ width: {}mm; height: {}mm; ",
                "background-image: url('{}'); background-size: 100% 100%; ",
                "background-repeat: no-repeat; box-sizing: border-box; overflow: hidden; ",
                "position: relative; font-family: Arial, sans-serif; }}\n"
            ),
            self.format.print_width_mm,
            self.format.print_height_mm,
            escape_html(&self.background_url)
        );

        for (element, style) in self.layout.elements() {
            let weight = if element.is_bold() { "bold" } else { "normal" };
            let _ = write!(
                css,
                concat!(
                    ".{} {{ position: absolute; left: {}%; top: {}%; font-size: {}pt; ",
                    "transform: translate(-50%, -50%); line-height: 1; margin: 0; padding: 0; ",
                    "white-space: nowrap; color: black !important; text-align: center; ",
                    "font-family: Arial, sans-serif; font-weight: {}; }}\n"
                ),
                element.css_class(),
                style.x,
                style.y,
                style.font_size,
                weight
            );
        }

        css
    }

    /// Markup of one label instance
    fn instance(&self, label: &Label) -> String {
        let mut html = String::from("<div class=\"label-instance\">");
        for element in LabelElement::ALL {
            let text = escape_html(&element.get_text(label, &self.contact));
            let class = element.css_class();
            let _ = match element {
                LabelElement::Footer => write!(html, "<div class=\"{class}\"><p>{text}</p></div>"),
                LabelElement::QuantityCaption | LabelElement::TypeCaption => {
                    write!(html, "<span class=\"{class}\">{text}</span>")
                }
                _ => write!(html, "<p class=\"{class}\">{text}</p>"),
            };
        }
        html.push_str("</div>");
        html
    }

    /// Label instances for one A4 page
    fn page_content(&self, label: &Label) -> String {
        let instance = self.instance(label);
        instance.repeat(self.arrangement.per_sheet())
    }

    fn document(&self, title: &str, body: &str) -> String {
        let justify = match self.arrangement {
            SheetArrangement::Single => "center",
            SheetArrangement::Double => "space-around",
        };
        format!(
            concat!(
                "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n",
                "@page {{ size: A4 portrait; margin: 5mm; }}\n",
                "body {{ margin: 0; padding: 0; font-family: Arial, sans-serif; ",
                "-webkit-print-color-adjust: exact; print-color-adjust: exact; }}\n",
                ".print-container {{ width: 100%; height: calc(100vh - 10mm); display: flex; ",
                "flex-direction: column; justify-content: {}; align-items: center; ",
                "box-sizing: border-box; }}\n",
                "{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n"
            ),
            title,
            justify,
            self.label_styles(),
            body
        )
    }
}

/// Polish locale timestamp, e.g. `19.10.2026, 14:05:09`
fn format_generated_at(at: NaiveDateTime) -> String {
    at.format("%d.%m.%Y, %H:%M:%S").to_string()
}

const QUEUE_LIST_STYLES: &str = concat!(
    "body { font-family: Arial, sans-serif; margin: 20px; color: #333; font-size: 14pt; }\n",
    "h1 { font-size: 18pt; margin-bottom: 10px; color: #111; }\n",
    "p.meta-info { font-size: 12pt; margin-bottom: 15px; color: #555; }\n",
    "ul { list-style-type: none; padding-left: 0; }\n",
    "li { display: flex; align-items: flex-start; padding: 8px 0; border-bottom: 1px solid #ddd; ",
    "line-height: 1.5; page-break-inside: avoid; }\n",
    "li:last-child { border-bottom: none; }\n",
    ".item-number { margin-right: 10px; min-width: 1.5em; }\n",
    ".item-content { flex-grow: 1; }\n",
    ".details-line { margin-bottom: 6px; }\n",
    ".details-line-key { font-weight: bold; margin-right: 0.5em; }\n",
    ".details-value { font-size: 1.285em; font-weight: 600; }\n",
    ".other-info-line .info-segment { display: inline-block; margin-right: 1em; margin-bottom: 0.3em; }\n",
    ".other-info-line .label-key { font-weight: bold; }\n",
    ".print-button { display: block; margin: 30px auto 15px; padding: 12px 20px; color: white; ",
    "background-color: #007bff; border: none; border-radius: 5px; cursor: pointer; }\n",
    "@media print { body { margin: 10mm; color: black !important; } .print-button { display: none; } }\n",
);
