// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A flat, row-major two-dimensional table.
//!
//! Used for the energy field and for the cumulative-energy and
//! back-pointer tables of the seam search.  One allocation per table,
//! never one per cell.

use std::ops::{Index, IndexMut};

/// An addressable width×height field of plain values, addressed as
/// `(x, y)` the way `image` addresses pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

/// One energy value per pixel of a specific grid snapshot.
pub type EnergyMatrix = Matrix<f64>;

impl<P: Default + Copy> Matrix<P> {
    /// A matrix with every cell set to `P::default()`.
    pub fn new(width: u32, height: u32) -> Self {
        Matrix {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  Returns `None` if the
    /// vector's length doesn't match the dimensions.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() == width as usize * height as usize {
            Some(Matrix {
                width,
                height,
                cells,
            })
        } else {
            None
        }
    }

    /// Build a matrix from a slice of equal-length rows.
    pub fn from_rows<R: AsRef<[P]>>(rows: &[R]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.iter().any(|r| r.as_ref().len() != width) {
            return None;
        }
        let cells = rows.iter().flat_map(|r| r.as_ref().iter().copied()).collect();
        Matrix::from_vec(width as u32, height as u32, cells)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The cells in row-major order.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    /// A single row.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// A copy with rows and columns exchanged.  Seam search never needs
    /// one, it reads through a `Flipper`; this is the reference that
    /// view is checked against.
    pub fn transpose(&self) -> Self {
        let mut flipped = Matrix::new(self.height, self.width);
        for y in 0..self.height {
            for x in 0..self.width {
                flipped[(y, x)] = self[(x, y)];
            }
        }
        flipped
    }

    // Keep the index math in this one place and nowhere else.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Matrix<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        &self.cells[self.get_index(x, y)]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Matrix<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
