//! Drawing surfaces.

use super::color::Rgb;
use super::wave::Point;

/// Something a wave can be painted on.
///
/// Coordinates are logical pixels with the origin at the top left.
pub trait Surface {
    /// Drawable width in pixels.
    fn width(&self) -> u32;

    /// Drawable height in pixels.
    fn height(&self) -> u32;

    /// Sets the drawable size.
    fn resize(&mut self, width: u32, height: u32);

    /// Erases everything.
    fn clear(&mut self);

    /// Fills a closed polygon (even-odd rule) with `color` at opacity `alpha`.
    fn fill_polygon(&mut self, outline: &[Point], color: Rgb, alpha: f64);
}

/// Surface backed by a coarse grid of colored cells.
///
/// The logical pixel size is mapped onto `cols` × `rows` cells; a cell is
/// painted when its center falls inside the polygon. Terminal front ends
/// use one cell per character.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    cols: u16,
    rows: u16,
    background: Rgb,
    cells: Vec<Rgb>,
}

impl RasterSurface {
    /// Creates a cleared surface.
    pub fn new(width: u32, height: u32, cols: u16, rows: u16, background: Rgb) -> Self {
        Self {
            width,
            height,
            cols,
            rows,
            background,
            cells: vec![background; usize::from(cols) * usize::from(rows)],
        }
    }

    /// Grid columns.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Grid rows.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Color used by [`Surface::clear`].
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Color of one cell, or `None` outside the grid.
    pub fn cell(&self, col: u16, row: u16) -> Option<Rgb> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells
            .get(usize::from(row) * usize::from(self.cols) + usize::from(col))
            .copied()
    }

    fn cell_center(&self, col: u16, row: u16) -> Point {
        Point::new(
            (f64::from(col) + 0.5) * f64::from(self.width) / f64::from(self.cols),
            (f64::from(row) + 0.5) * f64::from(self.height) / f64::from(self.rows),
        )
    }
}

/// X coordinates where the horizontal line at `y` crosses the outline, sorted.
fn crossings(outline: &[Point], y: f64) -> Vec<f64> {
    let mut xs: Vec<f64> = outline
        .iter()
        .zip(outline.iter().cycle().skip(1))
        .filter(|(a, b)| (a.y <= y && y < b.y) || (b.y <= y && y < a.y))
        .map(|(a, b)| a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y))
        .collect();
    xs.sort_by(f64::total_cmp);
    xs
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn clear(&mut self) {
        self.cells.fill(self.background);
    }

    fn fill_polygon(&mut self, outline: &[Point], color: Rgb, alpha: f64) {
        if outline.len() < 3 || self.cols == 0 {
            return;
        }
        for row in 0..self.rows {
            let y = self.cell_center(0, row).y;
            let xs = crossings(outline, y);
            for col in 0..self.cols {
                let x = self.cell_center(col, row).x;
                let inside = xs.chunks_exact(2).any(|span| span[0] <= x && x < span[1]);
                if inside {
                    let idx = usize::from(row) * usize::from(self.cols) + usize::from(col);
                    self.cells[idx] = self.cells[idx].blend(color, alpha);
                }
            }
        }
    }
}
