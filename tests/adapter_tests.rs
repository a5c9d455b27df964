//! The adapter's state-plumbing surface: cursor, margins, fonts, options,
//! and output.

use vellum::{
    Color, Dimension, DocumentAdapter, DocumentOptions, Op, PageBackend, RecordingBackend,
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn doc() -> DocumentAdapter<RecordingBackend> {
    DocumentAdapter::new(RecordingBackend::new())
}

#[test]
fn cursor_round_trips_in_local_coordinates() {
    init();
    let mut doc = doc();
    assert_eq!((doc.cursor_x(), doc.cursor_y()), (0.0, 0.0));

    doc.set_cursor_xy(Dimension::Pt(12.0), Dimension::Pt(34.0));
    assert_eq!((doc.cursor_x(), doc.cursor_y()), (12.0, 34.0));
    assert_eq!((doc.backend().x(), doc.backend().y()), (22.0, 44.0));

    doc.set_cursor_x(Dimension::Percent(50.0));
    assert_eq!(doc.cursor_x(), 95.0);
}

#[test]
fn margins_read_back_through_the_adapter() {
    init();
    let mut doc = doc();
    doc.set_left_margin(15.0);
    doc.set_top_margin(20.0);
    assert_eq!(doc.left_margin(), 15.0);
    assert_eq!(doc.top_margin(), 20.0);
    assert_eq!(doc.right_margin(), 10.0);
    assert_eq!(doc.bottom_margin(), 10.0);
}

#[test]
fn changing_the_left_margin_moves_the_local_origin() {
    init();
    let mut doc = doc();
    doc.set_cursor_x(Dimension::Pt(5.0));
    doc.set_left_margin(20.0);
    // The absolute cursor did not move; its local reading did.
    assert_eq!(doc.backend().x(), 15.0);
    assert_eq!(doc.cursor_x(), -5.0);
}

#[test]
fn font_and_color_setters_pass_through_translated() {
    init();
    let mut doc = doc();
    doc.set_font("Courier", "underline bold", 9.0);
    doc.set_text_color(Color::new(0, 0, 255));
    doc.set_draw_color(Color::gray(128));
    doc.set_fill_color(Color::WHITE);
    doc.set_line_width(0.8);
    doc.set_auto_page_break(true, 12.0);

    assert_eq!(
        doc.backend().ops(),
        &[
            Op::SetFont { family: "Courier".to_string(), style: "BU".to_string(), size: 9.0 },
            Op::SetTextColor(Color::new(0, 0, 255)),
            Op::SetDrawColor(Color::gray(128)),
            Op::SetFillColor(Color::WHITE),
            Op::SetLineWidth(0.8),
            Op::SetAutoPageBreak { enabled: true, margin: 12.0 },
        ]
    );
}

#[test]
fn new_line_emits_one_break_per_line() {
    init();
    let mut doc = doc();
    doc.new_line(3).unwrap();
    assert_eq!(
        doc.backend().ops(),
        &[
            Op::LineBreak { height: None },
            Op::LineBreak { height: None },
            Op::LineBreak { height: None },
        ]
    );
}

#[test]
fn output_returns_the_recorded_document() {
    init();
    let mut doc = doc();
    doc.p("hello", None).unwrap();
    let bytes = doc.to_bytes().unwrap();
    let rendered = String::from_utf8(bytes).unwrap();
    assert!(rendered.contains("MultiCell"));
    assert!(rendered.contains("hello"));
}

#[test]
fn options_round_trip_through_construction() {
    init();
    let options: DocumentOptions = serde_json::from_str(
        r#"{ "orientation": "portrait", "margins": [5.0, 5.0, 8.0, 8.0] }"#,
    )
    .unwrap();
    let doc = DocumentAdapter::with_options(RecordingBackend::new(), &options).unwrap();
    assert_eq!(doc.left_margin(), 5.0);
    assert_eq!(doc.top_margin(), 8.0);
}
