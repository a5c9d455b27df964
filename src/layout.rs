//! Geometry resolution between local (margin-relative) coordinates and the
//! backend's absolute page units.

use vellum_backend::PageBackend;
use vellum_style::Dimension;

/// Resolves dimensions against the inner box and translates between local
/// and absolute coordinates.
///
/// The inner box is the page minus both margins on each axis; its origin,
/// local (0, 0), sits at (left margin, top margin). All percentages resolve
/// against the inner span of their axis, and `Auto` means "current cursor"
/// for positions and "fill to the far margin" for extents.
#[derive(Debug, Clone, Copy, Default)]
pub struct CursorLayoutEngine;

impl CursorLayoutEngine {
    pub fn new() -> Self {
        CursorLayoutEngine
    }

    pub fn inner_width<B: PageBackend>(&self, backend: &B) -> f32 {
        backend.page_width() - backend.left_margin() - backend.right_margin()
    }

    pub fn inner_height<B: PageBackend>(&self, backend: &B) -> f32 {
        backend.page_height() - backend.top_margin() - backend.bottom_margin()
    }

    /// The cursor in local coordinates.
    pub fn cursor_x<B: PageBackend>(&self, backend: &B) -> f32 {
        backend.x() - backend.left_margin()
    }

    pub fn cursor_y<B: PageBackend>(&self, backend: &B) -> f32 {
        backend.y() - backend.top_margin()
    }

    /// Moves the cursor to a local position.
    pub fn move_to<B: PageBackend>(&self, backend: &mut B, x: f32, y: f32) {
        let abs_x = x + backend.left_margin();
        let abs_y = y + backend.top_margin();
        backend.set_xy(abs_x, abs_y);
    }

    pub fn move_to_x<B: PageBackend>(&self, backend: &mut B, x: f32) {
        let abs_x = x + backend.left_margin();
        backend.set_x(abs_x);
    }

    pub fn move_to_y<B: PageBackend>(&self, backend: &mut B, y: f32) {
        let abs_y = y + backend.top_margin();
        backend.set_y(abs_y);
    }

    /// A local x position; `Auto` is the current cursor.
    pub fn resolve_x<B: PageBackend>(&self, backend: &B, x: Dimension) -> f32 {
        x.resolve_against(self.inner_width(backend)).unwrap_or_else(|| self.cursor_x(backend))
    }

    /// A local y position; `Auto` is the current cursor.
    pub fn resolve_y<B: PageBackend>(&self, backend: &B, y: Dimension) -> f32 {
        y.resolve_against(self.inner_height(backend)).unwrap_or_else(|| self.cursor_y(backend))
    }

    /// A width starting at local `x`; `Auto` fills to the right margin.
    pub fn resolve_w<B: PageBackend>(&self, backend: &B, w: Dimension, x: f32) -> f32 {
        w.resolve_against(self.inner_width(backend)).unwrap_or_else(|| self.inner_width(backend) - x)
    }

    /// A height starting at local `y`; `Auto` fills to the bottom margin.
    pub fn resolve_h<B: PageBackend>(&self, backend: &B, h: Dimension, y: f32) -> f32 {
        h.resolve_against(self.inner_height(backend))
            .unwrap_or_else(|| self.inner_height(backend) - y)
    }
}
