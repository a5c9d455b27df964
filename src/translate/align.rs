use vellum_style::{attr, Style};

/// Alignment code: `"L"`/`"C"`/`"R"`, or `""` when unset or unrecognized,
/// which means "backend default" rather than "left".
pub fn translate(style: &Style) -> &'static str {
    match style.get_str(attr::ALIGN) {
        Some("left") => "L",
        Some("center") => "C",
        Some("right") => "R",
        _ => "",
    }
}
