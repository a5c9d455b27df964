use crate::error::BackendError;
use crate::types::PageSpec;
use vellum_types::Color;

/// The stateful page-drawing canvas the layout engine draws against.
///
/// All coordinates are absolute page units; the cursor, margins, and page
/// geometry are backend state. Parameter order of the drawing primitives is
/// part of the contract and must not be rearranged by implementations:
/// `cell(w, h, text, border_code, ln, align_code, fill, link)` and
/// `multi_cell(w, h, text, border_code, align_code, fill)`.
///
/// Code parameters carry the backend's literal vocabulary: border codes are
/// `"0"` (none), `"1"` (all edges) or a combination of `B`/`L`/`R`/`T`;
/// alignment is `""`/`"L"`/`"C"`/`"R"`; `ln` is the post-draw cursor
/// placement (0 = right of the cell, 1 = start of the next line, 2 = below);
/// rectangle style codes combine `D` (draw outline) and `F` (fill).
pub trait PageBackend {
    // --- Drawing state ---

    fn set_font(&mut self, family: &str, style_code: &str, size: f32);
    fn set_draw_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_text_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f32);

    // --- Primitives ---

    #[allow(clippy::too_many_arguments)]
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
    ) -> Result<(), BackendError>;

    fn multi_cell(
        &mut self,
        w: f32,
        h: f32,
        text: &str,
        border_code: &str,
        align_code: &str,
        fill: bool,
    ) -> Result<(), BackendError>;

    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, style_code: &str)
    -> Result<(), BackendError>;

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), BackendError>;

    #[allow(clippy::too_many_arguments)]
    fn image(
        &mut self,
        path: &str,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        format: &str,
        link: &str,
    ) -> Result<(), BackendError>;

    /// Flowing text: advances the cursor by the backend's own text-flow
    /// rules (line wrapping, automatic page breaks).
    fn write(&mut self, line_height: f32, text: &str, link: &str) -> Result<(), BackendError>;

    /// Starts a new page. Empty orientation code keeps the current
    /// orientation; `PageSpec::Auto` keeps the current size.
    fn add_page(&mut self, orientation_code: &str, size: &PageSpec) -> Result<(), BackendError>;

    /// Moves the cursor to the start of the next line. `None` reuses the
    /// height of the last printed cell.
    fn line_break(&mut self, height: Option<f32>) -> Result<(), BackendError>;

    // --- Cursor ---

    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn set_x(&mut self, x: f32);
    fn set_y(&mut self, y: f32);
    fn set_xy(&mut self, x: f32, y: f32) {
        self.set_x(x);
        self.set_y(y);
    }

    // --- Page geometry ---

    fn page_width(&self) -> f32;
    fn page_height(&self) -> f32;
    fn current_page(&self) -> u32;

    fn left_margin(&self) -> f32;
    fn right_margin(&self) -> f32;
    fn top_margin(&self) -> f32;
    fn bottom_margin(&self) -> f32;

    fn set_left_margin(&mut self, margin: f32);
    fn set_right_margin(&mut self, margin: f32);
    fn set_top_margin(&mut self, margin: f32);
    fn set_bottom_margin(&mut self, margin: f32);

    fn set_auto_page_break(&mut self, enabled: bool, margin: f32);

    // --- Output ---

    /// Finalizes the document and returns its bytes.
    fn output(&mut self) -> Result<Vec<u8>, BackendError>;
}
