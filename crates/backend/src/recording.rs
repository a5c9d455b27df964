//! A deterministic in-memory backend for tests and demos.
//!
//! Records every call as an [`Op`] and simulates the cursor bookkeeping the
//! contract documents: `ln` placement for single-line cells, the fixed
//! bottom-left landing of `multi_cell`, and cursor reset on `add_page`.
//! Text flow is not modelled; `write` records without moving the cursor.

use crate::error::BackendError;
use crate::traits::PageBackend;
use crate::types::PageSpec;
use vellum_types::{Color, Point, Size};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    SetFont { family: String, style: String, size: f32 },
    SetDrawColor(Color),
    SetFillColor(Color),
    SetTextColor(Color),
    SetLineWidth(f32),
    Cell { w: f32, h: f32, text: String, border: String, ln: u8, align: String, fill: bool, link: String },
    MultiCell { w: f32, h: f32, text: String, border: String, align: String, fill: bool },
    Rect { x: f32, y: f32, w: f32, h: f32, style: String },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Image { path: String, x: f32, y: f32, w: f32, h: f32, format: String, link: String },
    Write { line_height: f32, text: String, link: String },
    AddPage { orientation: String, size: PageSpec },
    LineBreak { height: Option<f32> },
    SetAutoPageBreak { enabled: bool, margin: f32 },
}

/// A4 in millimetres, the conventional default unit of the original backend.
const A4_MM: Size = Size { width: 210.0, height: 297.0 };
const DEFAULT_MARGIN: f32 = 10.0;

pub struct RecordingBackend {
    ops: Vec<Op>,
    size: Size,
    cursor: Point,
    left_margin: f32,
    right_margin: f32,
    top_margin: f32,
    bottom_margin: f32,
    page: u32,
    last_cell_height: f32,
}

impl Default for RecordingBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::with_size(A4_MM)
    }

    pub fn with_size(size: Size) -> Self {
        Self {
            ops: Vec::new(),
            size,
            cursor: Point::new(DEFAULT_MARGIN, DEFAULT_MARGIN),
            left_margin: DEFAULT_MARGIN,
            right_margin: DEFAULT_MARGIN,
            top_margin: DEFAULT_MARGIN,
            bottom_margin: DEFAULT_MARGIN,
            page: 1,
            last_cell_height: 0.0,
        }
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn last_op(&self) -> Option<&Op> {
        self.ops.last()
    }

    /// Recorded ops of the drawing kind only (state setters filtered out).
    pub fn draw_ops(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| {
                !matches!(
                    op,
                    Op::SetFont { .. }
                        | Op::SetDrawColor(_)
                        | Op::SetFillColor(_)
                        | Op::SetTextColor(_)
                        | Op::SetLineWidth(_)
                        | Op::SetAutoPageBreak { .. }
                )
            })
            .collect()
    }
}

impl PageBackend for RecordingBackend {
    fn set_font(&mut self, family: &str, style_code: &str, size: f32) {
        self.ops.push(Op::SetFont {
            family: family.to_string(),
            style: style_code.to_string(),
            size,
        });
    }

    fn set_draw_color(&mut self, color: Color) {
        self.ops.push(Op::SetDrawColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.ops.push(Op::SetFillColor(color));
    }

    fn set_text_color(&mut self, color: Color) {
        self.ops.push(Op::SetTextColor(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.ops.push(Op::SetLineWidth(width));
    }

    fn cell(
        &mut self,
        w: f32,
        h: f32,
        text: &str,
        border_code: &str,
        ln: u8,
        align_code: &str,
        fill: bool,
        link: &str,
    ) -> Result<(), BackendError> {
        self.ops.push(Op::Cell {
            w,
            h,
            text: text.to_string(),
            border: border_code.to_string(),
            ln,
            align: align_code.to_string(),
            fill,
            link: link.to_string(),
        });
        self.last_cell_height = h;
        match ln {
            0 => self.cursor.x += w,
            1 => {
                self.cursor.x = self.left_margin;
                self.cursor.y += h;
            }
            _ => self.cursor.y += h,
        }
        Ok(())
    }

    fn multi_cell(
        &mut self,
        w: f32,
        h: f32,
        text: &str,
        border_code: &str,
        align_code: &str,
        fill: bool,
    ) -> Result<(), BackendError> {
        self.ops.push(Op::MultiCell {
            w,
            h,
            text: text.to_string(),
            border: border_code.to_string(),
            align: align_code.to_string(),
            fill,
        });
        self.last_cell_height = h;
        // A multi-line cell always lands bottom-left: back to the left
        // margin, below the drawn block. Wrapping is not simulated, so the
        // block is taken to be one h tall.
        self.cursor.x = self.left_margin;
        self.cursor.y += h;
        Ok(())
    }

    fn rect(
        &mut self,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        style_code: &str,
    ) -> Result<(), BackendError> {
        self.ops.push(Op::Rect { x, y, w, h, style: style_code.to_string() });
        Ok(())
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), BackendError> {
        self.ops.push(Op::Line { x1, y1, x2, y2 });
        Ok(())
    }

    fn image(
        &mut self,
        path: &str,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        format: &str,
        link: &str,
    ) -> Result<(), BackendError> {
        self.ops.push(Op::Image {
            path: path.to_string(),
            x,
            y,
            w,
            h,
            format: format.to_string(),
            link: link.to_string(),
        });
        Ok(())
    }

    fn write(&mut self, line_height: f32, text: &str, link: &str) -> Result<(), BackendError> {
        self.ops.push(Op::Write {
            line_height,
            text: text.to_string(),
            link: link.to_string(),
        });
        Ok(())
    }

    fn add_page(&mut self, orientation_code: &str, size: &PageSpec) -> Result<(), BackendError> {
        self.ops.push(Op::AddPage {
            orientation: orientation_code.to_string(),
            size: size.clone(),
        });
        let base = match size {
            PageSpec::Auto => self.size,
            PageSpec::Named(_) => A4_MM,
            PageSpec::Custom { width, height } => Size::new(*width, *height),
        };
        let portrait = Size::new(base.width.min(base.height), base.width.max(base.height));
        self.size = match orientation_code {
            "L" => portrait.flipped(),
            _ => portrait,
        };
        self.page += 1;
        self.cursor = Point::new(self.left_margin, self.top_margin);
        Ok(())
    }

    fn line_break(&mut self, height: Option<f32>) -> Result<(), BackendError> {
        self.ops.push(Op::LineBreak { height });
        self.cursor.x = self.left_margin;
        self.cursor.y += height.unwrap_or(self.last_cell_height);
        Ok(())
    }

    fn x(&self) -> f32 {
        self.cursor.x
    }

    fn y(&self) -> f32 {
        self.cursor.y
    }

    fn set_x(&mut self, x: f32) {
        self.cursor.x = x;
    }

    fn set_y(&mut self, y: f32) {
        self.cursor.y = y;
    }

    fn page_width(&self) -> f32 {
        self.size.width
    }

    fn page_height(&self) -> f32 {
        self.size.height
    }

    fn current_page(&self) -> u32 {
        self.page
    }

    fn left_margin(&self) -> f32 {
        self.left_margin
    }

    fn right_margin(&self) -> f32 {
        self.right_margin
    }

    fn top_margin(&self) -> f32 {
        self.top_margin
    }

    fn bottom_margin(&self) -> f32 {
        self.bottom_margin
    }

    fn set_left_margin(&mut self, margin: f32) {
        self.left_margin = margin;
    }

    fn set_right_margin(&mut self, margin: f32) {
        self.right_margin = margin;
    }

    fn set_top_margin(&mut self, margin: f32) {
        self.top_margin = margin;
    }

    fn set_bottom_margin(&mut self, margin: f32) {
        self.bottom_margin = margin;
    }

    fn set_auto_page_break(&mut self, enabled: bool, margin: f32) {
        self.ops.push(Op::SetAutoPageBreak { enabled, margin });
    }

    fn output(&mut self) -> Result<Vec<u8>, BackendError> {
        let mut out = String::new();
        for op in &self.ops {
            out.push_str(&format!("{:?}\n", op));
        }
        Ok(out.into_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_ln_codes_move_the_cursor() {
        let mut backend = RecordingBackend::new();
        let start = Point::new(backend.x(), backend.y());

        backend.cell(30.0, 10.0, "a", "0", 0, "L", false, "").unwrap();
        assert_eq!((backend.x(), backend.y()), (start.x + 30.0, start.y));

        backend.cell(30.0, 10.0, "b", "0", 1, "L", false, "").unwrap();
        assert_eq!((backend.x(), backend.y()), (backend.left_margin(), start.y + 10.0));

        let x_before = backend.x();
        backend.cell(30.0, 10.0, "c", "0", 2, "L", false, "").unwrap();
        assert_eq!((backend.x(), backend.y()), (x_before, start.y + 20.0));
    }

    #[test]
    fn multi_cell_always_lands_bottom_left() {
        let mut backend = RecordingBackend::new();
        backend.set_xy(50.0, 40.0);
        backend.multi_cell(60.0, 20.0, "text", "0", "L", false).unwrap();
        assert_eq!((backend.x(), backend.y()), (backend.left_margin(), 60.0));
    }

    #[test]
    fn add_page_resets_cursor_and_honours_orientation() {
        let mut backend = RecordingBackend::new();
        backend.set_xy(100.0, 200.0);

        backend.add_page("L", &PageSpec::Auto).unwrap();
        assert_eq!(backend.current_page(), 2);
        assert_eq!((backend.page_width(), backend.page_height()), (297.0, 210.0));
        assert_eq!((backend.x(), backend.y()), (10.0, 10.0));

        backend.add_page("P", &PageSpec::Custom { width: 100.0, height: 200.0 }).unwrap();
        assert_eq!((backend.page_width(), backend.page_height()), (100.0, 200.0));
    }

    #[test]
    fn line_break_reuses_the_last_cell_height() {
        let mut backend = RecordingBackend::new();
        backend.cell(30.0, 12.0, "a", "0", 0, "L", false, "").unwrap();
        let y = backend.y();
        backend.line_break(None).unwrap();
        assert_eq!((backend.x(), backend.y()), (backend.left_margin(), y + 12.0));
    }
}
