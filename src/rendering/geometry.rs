//! Pixel layout of the board inside the drawing surface.
//!
//! Everything is snapped to whole pixels so cell edges never land on
//! sub-pixel positions.

/// Board layout for one frame. Recomputed whenever the surface may have
/// changed size, which in practice means every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_len: f32,
    pub board_len: f32,
    pub line: f32,
    pub side: usize,
}

impl BoardGeometry {
    /// Fit an N×N board centered in a `width`×`height` surface. The square
    /// side is the shorter surface edge; a surface too small for the border
    /// yields zero-sized cells.
    pub fn compute(width: f32, height: f32, line: f32, side: usize) -> Self {
        let side = side.max(1);
        let size = width.min(height).max(0.0);
        let cell_len = ((size - 2.0 * line) / side as f32).floor().max(0.0);
        let board_len = cell_len * side as f32 + 2.0 * line;

        Self {
            origin_x: ((width - board_len) / 2.0).floor(),
            origin_y: ((height - board_len) / 2.0).floor(),
            cell_len,
            board_len,
            line,
            side,
        }
    }

    /// Top-left corner of the first cell
    fn inner_origin(&self) -> (f32, f32) {
        (self.origin_x + self.line, self.origin_y + self.line)
    }

    /// Screen rectangle (x, y, w, h) of a cell
    pub fn cell_rect(&self, x: usize, y: usize) -> (f32, f32, f32, f32) {
        let (ix, iy) = self.inner_origin();
        (
            ix + x as f32 * self.cell_len,
            iy + y as f32 * self.cell_len,
            self.cell_len,
            self.cell_len,
        )
    }

    /// Cell under a screen position, if any
    pub fn cell_at(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if self.cell_len <= 0.0 {
            return None;
        }
        let (ix, iy) = self.inner_origin();
        let (rx, ry) = (px - ix, py - iy);
        if rx < 0.0 || ry < 0.0 {
            return None;
        }
        let (x, y) = (
            (rx / self.cell_len).floor() as usize,
            (ry / self.cell_len).floor() as usize,
        );
        (x < self.side && y < self.side).then_some((x, y))
    }
}
