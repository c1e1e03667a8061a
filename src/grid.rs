//! Bordered random grid construction and serialization.

use std::fmt;
use std::io::{self, Write};

use crate::ports::RandomSource;

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open cell, rendered as `.`. Every border cell is open.
    Open,
    /// Blocked cell, rendered as `*`.
    Blocked,
}

impl Cell {
    /// Pick the interior cell for a uniform draw: blocked when `draw > threshold`.
    #[must_use]
    pub fn from_draw(draw: f64, threshold: f64) -> Self {
        if draw > threshold {
            Self::Blocked
        } else {
            Self::Open
        }
    }

    /// The ASCII byte written to the grid file.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Open => b'.',
            Self::Blocked => b'*',
        }
    }
}

/// Dimensions and threshold of a grid to generate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Number of columns, border included.
    pub width: usize,
    /// Number of rows, border included.
    pub height: usize,
    /// Probability that an interior cell is open.
    pub threshold: f64,
}

/// A rectangular grid with an open border and a random interior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid, drawing one value per interior cell in row-major order.
    ///
    /// Dimensions below 2 are not rejected here; they yield a grid made
    /// only of border cells.
    pub fn generate(spec: &GridSpec, source: &mut dyn RandomSource) -> Self {
        let GridSpec { width, height, threshold } = *spec;
        let mut cells = Vec::with_capacity(width.saturating_mul(height));

        for row in 0..height {
            let border_row = row == 0 || row + 1 == height;
            for col in 0..width {
                if border_row || col == 0 || col + 1 == width {
                    cells.push(Cell::Open);
                } else {
                    cells.push(Cell::from_draw(source.next_unit(), threshold));
                }
            }
        }

        Self { width, height, cells }
    }

    /// Iterate the rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Number of blocked cells in the whole grid.
    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Blocked).count()
    }

    /// Number of interior (non-border) cells.
    #[must_use]
    pub fn interior_count(&self) -> usize {
        self.width.saturating_sub(2).saturating_mul(self.height.saturating_sub(2))
    }

    /// Write the `<width> <height>` header followed by one line per row.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the sink.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        writeln!(sink, "{} {}", self.width, self.height)?;
        let mut line = Vec::with_capacity(self.width.saturating_add(1));
        for row in self.rows() {
            line.clear();
            line.extend(row.iter().map(|c| c.as_byte()));
            line.push(b'\n');
            sink.write_all(&line)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{}", char::from(cell.as_byte()))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
