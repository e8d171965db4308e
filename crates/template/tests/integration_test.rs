//! Integration tests for layouts and print rendering

use chrono::NaiveDate;
use label_core::{fold_rows, parse_model_output, PrintQueue};
use label_template::{
    parse_saved_layouts, saved_layouts_to_json, ContactDetails, ElementStyle, LabelElement,
    LabelLayout, LayoutLibrary, PrintFormat, PrintRenderer, SheetArrangement, INITIAL_LAYOUT_ID,
};
use pretty_assertions::assert_eq;

fn queue() -> PrintQueue {
    let raw = r#"[
        {"thickness": "18", "dimension": "1250x2500", "dq": "B/BB", "type": "MR", "quantityForDisplay": "50 pcs", "numberOfLabels": 1},
        {"thickness": "21", "dimension": "2150x3850", "dq": "cp/c", "type": "MR", "quantityForDisplay": "30 pcs", "numberOfLabels": 1}
    ]"#;
    let rows = parse_model_output(raw).unwrap();
    let outcome = fold_rows(&rows, None, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());

    let mut queue = PrintQueue::new();
    queue.extend(outcome.labels);
    queue
}

#[test]
fn test_layout_library_persists_through_json() {
    let mut layout = LabelLayout::initial();
    layout.set(LabelElement::Quantity, ElementStyle::new(20.0, 90.0, 28.0));

    let mut library = LayoutLibrary::default();
    library.save("1718000000000", "Narrow quantity", &layout).unwrap();
    library.set_default("1718000000000").unwrap();

    let json = saved_layouts_to_json(library.layouts()).unwrap();
    let restored = LayoutLibrary::new(
        parse_saved_layouts(&json).unwrap(),
        library.default_id().map(str::to_string),
    );

    let (id, active) = restored.startup_layout();
    assert_eq!(id, "1718000000000");
    assert_eq!(active.get(LabelElement::Quantity).font_size, 28.0);
    assert_eq!(restored.select(INITIAL_LAYOUT_ID), Some(LabelLayout::initial()));
}

#[test]
fn test_render_queue_document() {
    let queue = queue();
    let layout = LabelLayout::initial();
    let contact = ContactDetails {
        company: "Test Timber".into(),
        address: "1 Mill Road".into(),
        phone: "Tel.: 000".into(),
    };

    let html = PrintRenderer::new(&layout, PrintFormat::find("A5 Portrait").unwrap())
        .with_arrangement(SheetArrangement::from_copies(1))
        .with_contact(contact)
        .with_background("https://example.test/bg.png")
        .render_labels(queue.labels())
        .unwrap();

    assert!(html.contains("@page { size: A4 portrait; margin: 5mm; }"));
    assert!(html.contains("width: 148mm; height: 210mm;"));
    assert!(html.contains("url('https://example.test/bg.png')"));
    assert_eq!(html.matches("<div class=\"label-instance\">").count(), 2);
    assert_eq!(html.matches("page-break-after: always").count(), 1);
    assert!(html.contains("<p>19.10.2026 - Test Timber, 1 Mill Road, Tel.: 000</p>"));
    assert!(html.contains("<p class=\"label-dq\">CP/C</p>"));
}

#[test]
fn test_render_queue_list() {
    let queue = queue();
    let layout = LabelLayout::initial();
    let generated_at = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(8, 30, 0)
        .unwrap();

    let html = PrintRenderer::new(&layout, PrintFormat::default_format())
        .render_queue_list(queue.labels(), generated_at)
        .unwrap();

    assert!(html.contains("Generated on: 19.10.2026, 08:30:00 | Total labels in queue: 2"));
    assert!(html.contains("<div class=\"item-number\">2.</div>"));
    assert!(html.contains("<span class=\"details-value\">21mm x 2150x3850</span>"));
    assert!(html.contains("<span class=\"label-key\">Kod:</span> 21/18/27"));
    assert!(html.contains("<span class=\"label-key\">Typ:</span> MR"));
}

#[test]
fn test_render_queue_list_empty() {
    let layout = LabelLayout::initial();
    let renderer = PrintRenderer::new(&layout, PrintFormat::default_format());
    let at = NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert!(renderer.render_queue_list(&[], at).is_err());
}
