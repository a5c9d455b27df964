//! Builds a small letter against the recording backend and prints the
//! drawing operations it produced.
//!
//! Run with `RUST_LOG=debug` to see the adapter's dispatch logging too.

use vellum::{
    Dimension, DocumentAdapter, DocumentError, DocumentOptions, RecordingBackend, Region, Style,
    Stylesheet,
};

fn main() -> Result<(), DocumentError> {
    env_logger::init();

    let options = DocumentOptions {
        margins: Some([20.0, 20.0, 25.0, 25.0]),
        ..DocumentOptions::default()
    };
    let mut doc = DocumentAdapter::with_options(RecordingBackend::new(), &options)?;

    doc.add_stylesheet(
        Stylesheet::new()
            .with_rule("h1", Style::new().with("text-color", "#003366"))
            .with_rule(".total", Style::new().with("border", true).with("font-style", "bold")),
    );

    doc.h1("Acme Corp", None)?;
    doc.p("12 Example Road, Springfield", None)?;
    doc.new_line(1)?;

    doc.p("Dear customer,", None)?;
    doc.p("Please find your order summary below.", None)?;
    doc.new_line(1)?;

    // A two-column summary row: description cell, then an amount cell that
    // stays on the same line and right-aligns its text.
    let row = Style::new().with("cursor-placement", "top-right");
    doc.cell(Region::sized(140, 8), "Widget, blue", Some(&row))?;
    doc.cell_classed(
        &[".align-right"],
        Region::sized(Dimension::Auto, 8),
        "120.00",
        Some(&Style::new().with("cursor-placement", "newline")),
    )?;

    doc.cell(Region::sized(140, 8), "Total", Some(&row))?;
    doc.cell_classed(
        &[".align-right", ".total"],
        Region::sized(Dimension::Auto, 8),
        "120.00",
        None,
    )?;

    doc.new_line(2)?;
    doc.p("Kind regards,", None)?;
    doc.p("Acme Corp", None)?;

    for op in doc.backend().ops() {
        println!("{op:?}");
    }
    Ok(())
}
