//! The document adapter: styled drawing operations over a page backend.

use crate::error::DocumentError;
use crate::layout::CursorLayoutEngine;
use crate::options::{DocumentOptions, SizeOption};
use crate::resolver::StyleResolver;
use crate::translate::{
    align, border, cursor, fill, font, line, multiline, orientation, page_size, rect,
};
use vellum_backend::PageBackend;
use vellum_style::{attr, Dimension, Style, Stylesheet};
use vellum_types::Color;

/// The geometry of a cell in local coordinates. `Auto` positions start at
/// the cursor; `Auto` extents fill to the far margin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Region {
    pub x: Dimension,
    pub y: Dimension,
    pub w: Dimension,
    pub h: Dimension,
}

impl Region {
    pub fn new(
        x: impl Into<Dimension>,
        y: impl Into<Dimension>,
        w: impl Into<Dimension>,
        h: impl Into<Dimension>,
    ) -> Self {
        Region { x: x.into(), y: y.into(), w: w.into(), h: h.into() }
    }

    /// A region anchored at a position, extents filling to the far margins.
    pub fn at(x: impl Into<Dimension>, y: impl Into<Dimension>) -> Self {
        Region { x: x.into(), y: y.into(), ..Region::default() }
    }

    /// A region at the cursor with explicit extents.
    pub fn sized(w: impl Into<Dimension>, h: impl Into<Dimension>) -> Self {
        Region { w: w.into(), h: h.into(), ..Region::default() }
    }
}

/// Drives a [`PageBackend`] through styled, margin-relative drawing calls.
///
/// Composes three collaborators: the backend (exclusively owned), the
/// [`StyleResolver`] holding the cascade, and the [`CursorLayoutEngine`]
/// resolving geometry. Every operation pushes the full drawing state its
/// translators govern; state left behind by one call (draw color, line
/// width) remains visible to later raw primitives.
pub struct DocumentAdapter<B: PageBackend> {
    backend: B,
    resolver: StyleResolver,
    layout: CursorLayoutEngine,
}

impl<B: PageBackend> DocumentAdapter<B> {
    /// An adapter over a backend, seeded with the default stylesheet.
    pub fn new(backend: B) -> Self {
        DocumentAdapter {
            backend,
            resolver: StyleResolver::new(),
            layout: CursorLayoutEngine::new(),
        }
    }

    /// Validates the options and applies the adapter-level ones: margins,
    /// then automatic page breaking at the bottom margin. Backend
    /// construction options (orientation, unit, size, compression) are
    /// translated here so invalid values fail up front.
    pub fn with_options(backend: B, options: &DocumentOptions) -> Result<Self, DocumentError> {
        options.to_backend_config()?;
        let mut adapter = Self::new(backend);
        if let Some([left, right, top, bottom]) = options.margins {
            adapter.backend.set_left_margin(left);
            adapter.backend.set_right_margin(right);
            adapter.backend.set_top_margin(top);
            adapter.backend.set_bottom_margin(bottom);
        }
        let break_margin = adapter.backend.bottom_margin();
        adapter.backend.set_auto_page_break(true, break_margin);
        Ok(adapter)
    }

    /// Layers a stylesheet on top of the current rules.
    pub fn add_stylesheet(&mut self, sheet: Stylesheet) {
        self.resolver.add_stylesheet(sheet);
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    // --- Cells ---

    /// Draws a styled cell: cascade `["body", "cell"]` plus the inline
    /// style.
    pub fn cell(
        &mut self,
        region: Region,
        text: &str,
        style: Option<&Style>,
    ) -> Result<(), DocumentError> {
        self.draw_cell(&["body", "cell"], region, text, style)
    }

    /// Draws a named element ("p", "h1", ...): the tag's rule cascades on
    /// top of the cell defaults.
    pub fn element(
        &mut self,
        tag: &str,
        region: Region,
        text: &str,
        style: Option<&Style>,
    ) -> Result<(), DocumentError> {
        self.draw_cell(&["body", "cell", tag], region, text, style)
    }

    /// Draws a cell with extra selectors (modifier classes such as
    /// `.align-right`) cascading after the cell defaults.
    pub fn cell_classed(
        &mut self,
        selectors: &[&str],
        region: Region,
        text: &str,
        style: Option<&Style>,
    ) -> Result<(), DocumentError> {
        let mut cascade = vec!["body", "cell"];
        cascade.extend_from_slice(selectors);
        self.draw_cell(&cascade, region, text, style)
    }

    pub fn p(&mut self, text: &str, style: Option<&Style>) -> Result<(), DocumentError> {
        self.element("p", Region::default(), text, style)
    }

    pub fn h1(&mut self, text: &str, style: Option<&Style>) -> Result<(), DocumentError> {
        self.element("h1", Region::default(), text, style)
    }

    pub fn h2(&mut self, text: &str, style: Option<&Style>) -> Result<(), DocumentError> {
        self.element("h2", Region::default(), text, style)
    }

    fn draw_cell(
        &mut self,
        selectors: &[&str],
        region: Region,
        text: &str,
        inline: Option<&Style>,
    ) -> Result<(), DocumentError> {
        let style = self.resolver.resolve(selectors, inline);

        let x = self.layout.resolve_x(&self.backend, region.x);
        let y = self.layout.resolve_y(&self.backend, region.y);
        let w = self.layout.resolve_w(&self.backend, region.w, x);
        let h = self.layout.resolve_h(&self.backend, region.h, y);
        log::trace!("cell geometry: local ({x}, {y}) {w}x{h}");

        font::apply(&mut self.backend, &style);
        border::apply(&mut self.backend, &style);
        fill::apply(&mut self.backend, &style);

        let border_code = border::translate(&style);
        let align_code = align::translate(&style);
        let filled = fill::translate(&style);
        let link = style.str_or(attr::LINK, "").to_string();

        self.layout.move_to(&mut self.backend, x, y);

        if multiline::translate(&style) {
            log::debug!("multi-line cell {w}x{h}: {text:?}");
            self.backend.multi_cell(w, h, text, border_code.code(), align_code, filled)?;
            // The backend always lands bottom-left after a multi-line draw;
            // other placements are applied as a post-draw correction.
            match cursor::translate(&style, cursor::LN_BOTTOM_LEFT)? {
                cursor::LN_TOP_RIGHT => self.layout.move_to(&mut self.backend, x + w, y),
                cursor::LN_NEWLINE => self.layout.move_to_x(&mut self.backend, 0.0),
                _ => {}
            }
        } else {
            let ln = cursor::translate(&style, cursor::LN_TOP_RIGHT)?;
            log::debug!("cell {w}x{h} ln={ln}: {text:?}");
            self.backend.cell(w, h, text, border_code.code(), ln, align_code, filled, &link)?;
        }
        Ok(())
    }

    // --- Flowing text ---

    /// Flowing text: only the font translator applies; the backend's own
    /// text-flow rules move the cursor.
    pub fn write(
        &mut self,
        line_height: f32,
        text: &str,
        link: &str,
        style: Option<&Style>,
    ) -> Result<(), DocumentError> {
        if let Some(style) = style {
            font::apply(&mut self.backend, style);
        }
        self.backend.write(line_height, text, link)?;
        Ok(())
    }

    // --- Shapes and images ---

    /// A rectangle in local coordinates. The style decides outline vs fill.
    pub fn rectangle(
        &mut self,
        x: Dimension,
        y: Dimension,
        w: Dimension,
        h: Dimension,
        style: &Style,
    ) -> Result<(), DocumentError> {
        let x = self.layout.resolve_x(&self.backend, x);
        let y = self.layout.resolve_y(&self.backend, y);
        let w = self.layout.resolve_w(&self.backend, w, x);
        let h = self.layout.resolve_h(&self.backend, h, y);
        let code = rect::apply(&mut self.backend, style);
        let abs_x = x + self.backend.left_margin();
        let abs_y = y + self.backend.top_margin();
        self.backend.rect(abs_x, abs_y, w, h, &code)?;
        Ok(())
    }

    /// A straight line between two local positions.
    pub fn line(
        &mut self,
        x1: Dimension,
        y1: Dimension,
        x2: Dimension,
        y2: Dimension,
        style: &Style,
    ) -> Result<(), DocumentError> {
        let x1 = self.layout.resolve_x(&self.backend, x1) + self.backend.left_margin();
        let y1 = self.layout.resolve_y(&self.backend, y1) + self.backend.top_margin();
        let x2 = self.layout.resolve_x(&self.backend, x2) + self.backend.left_margin();
        let y2 = self.layout.resolve_y(&self.backend, y2) + self.backend.top_margin();
        line::apply(&mut self.backend, style);
        self.backend.line(x1, y1, x2, y2)?;
        Ok(())
    }

    /// Places an image at a local position. `Auto` extents defer to the
    /// image's natural size (backend convention: 0).
    #[allow(clippy::too_many_arguments)]
    pub fn image(
        &mut self,
        path: &str,
        x: Dimension,
        y: Dimension,
        w: Dimension,
        h: Dimension,
        format: &str,
        link: &str,
    ) -> Result<(), DocumentError> {
        let x = self.layout.resolve_x(&self.backend, x) + self.backend.left_margin();
        let y = self.layout.resolve_y(&self.backend, y) + self.backend.top_margin();
        let w = w.resolve_against(self.layout.inner_width(&self.backend)).unwrap_or(0.0);
        let h = h.resolve_against(self.layout.inner_height(&self.backend)).unwrap_or(0.0);
        self.backend.image(path, x, y, w, h, format, link)?;
        Ok(())
    }

    // --- Pages and lines ---

    /// Starts a new page. Both values translate before the backend is
    /// touched, so an unsupported value aborts without a page being added.
    pub fn add_page(
        &mut self,
        orientation: Option<&str>,
        size: Option<&SizeOption>,
    ) -> Result<(), DocumentError> {
        let orientation_code = orientation::translate(orientation)?;
        let spec = page_size::translate(size)?;
        log::debug!("add page: orientation={orientation_code:?} size={spec:?}");
        self.backend.add_page(orientation_code, &spec)?;
        Ok(())
    }

    /// Moves the cursor down `n` lines of the backend's current line height.
    pub fn new_line(&mut self, n: u32) -> Result<(), DocumentError> {
        for _ in 0..n {
            self.backend.line_break(None)?;
        }
        Ok(())
    }

    // --- Cursor, local coordinates ---

    pub fn cursor_x(&self) -> f32 {
        self.layout.cursor_x(&self.backend)
    }

    pub fn cursor_y(&self) -> f32 {
        self.layout.cursor_y(&self.backend)
    }

    pub fn set_cursor_x(&mut self, x: Dimension) {
        let x = self.layout.resolve_x(&self.backend, x);
        self.layout.move_to_x(&mut self.backend, x);
    }

    pub fn set_cursor_y(&mut self, y: Dimension) {
        let y = self.layout.resolve_y(&self.backend, y);
        self.layout.move_to_y(&mut self.backend, y);
    }

    pub fn set_cursor_xy(&mut self, x: Dimension, y: Dimension) {
        self.set_cursor_x(x);
        self.set_cursor_y(y);
    }

    // --- Backend state plumbing ---

    /// Sets the current font; the style is a plain-language string
    /// ("bold italic") translated to the backend's marker codes.
    pub fn set_font(&mut self, family: &str, style: &str, size: f32) {
        self.backend.set_font(family, &font::translate(style), size);
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.backend.set_draw_color(color);
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.backend.set_fill_color(color);
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.backend.set_text_color(color);
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.backend.set_line_width(width);
    }

    pub fn set_auto_page_break(&mut self, enabled: bool, margin: f32) {
        self.backend.set_auto_page_break(enabled, margin);
    }

    pub fn left_margin(&self) -> f32 {
        self.backend.left_margin()
    }

    pub fn right_margin(&self) -> f32 {
        self.backend.right_margin()
    }

    pub fn top_margin(&self) -> f32 {
        self.backend.top_margin()
    }

    pub fn bottom_margin(&self) -> f32 {
        self.backend.bottom_margin()
    }

    pub fn set_left_margin(&mut self, margin: f32) {
        self.backend.set_left_margin(margin);
    }

    pub fn set_right_margin(&mut self, margin: f32) {
        self.backend.set_right_margin(margin);
    }

    pub fn set_top_margin(&mut self, margin: f32) {
        self.backend.set_top_margin(margin);
    }

    pub fn set_bottom_margin(&mut self, margin: f32) {
        self.backend.set_bottom_margin(margin);
    }

    pub fn width(&self) -> f32 {
        self.backend.page_width()
    }

    pub fn height(&self) -> f32 {
        self.backend.page_height()
    }

    pub fn page(&self) -> u32 {
        self.backend.current_page()
    }

    // --- Output ---

    /// Finalizes the document and returns its bytes.
    pub fn to_bytes(&mut self) -> Result<Vec<u8>, DocumentError> {
        Ok(self.backend.output()?)
    }

    /// Finalizes the document and writes it to a file.
    pub fn save(&mut self, path: &str) -> Result<(), DocumentError> {
        let bytes = self.backend.output()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
