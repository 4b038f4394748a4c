// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the seam of least energy
//!
//! A forward dynamic program over the energy field: every cell learns
//! the cheapest way to reach it from the top row through one of the
//! three cells above it, and remembers which one that was.  The seam is
//! then read back from the cheapest cell on the bottom row.
//!
//! Only the top-to-bottom walk exists.  Left-to-right seams run the
//! same walk over a [`Flipper`].

use crate::error::{CarveError, Result};
use crate::flipper::{EnergyView, Flipper};
use crate::matrix::EnergyMatrix;

/// One index per row (or, flipped, per column) naming the pixel to
/// remove.  Neighboring entries never differ by more than one.
pub type Seam = Vec<u32>;

/// This trait defines how we get seams out of an energy field.
pub trait SeamFinder {
    /// A top-to-bottom seam: one x coordinate per row.
    fn find_vertical_seam(&self) -> Result<Seam>;

    /// A left-to-right seam: one y coordinate per column.
    fn find_horizontal_seam(&self) -> Result<Seam>;
}

impl SeamFinder for EnergyMatrix {
    fn find_vertical_seam(&self) -> Result<Seam> {
        find_seam(self)
    }

    fn find_horizontal_seam(&self) -> Result<Seam> {
        find_seam(&Flipper::new(self))
    }
}

/// Given an energy field, return the list of x-coordinates that, when
/// mapped with the range (0..height), give the XY coordinates of each
/// pixel in the cheapest connected top-to-bottom path.
///
/// Among predecessors of equal cost the left one wins over the middle,
/// and the middle over the right.  Among equally cheap bottom cells the
/// leftmost wins.  The result is fully determined by the input.
pub fn find_seam<V: EnergyView>(energy: &V) -> Result<Seam> {
    let (width, height) = energy.dimensions();
    if width == 0 || height == 0 {
        return Err(CarveError::DegenerateGrid { width, height });
    }
    let (w, h) = (width as usize, height as usize);
    let maxwidth = width - 1;

    // Two parallel row-major tables: the cheapest cost of reaching a
    // cell, and the column above it that cost came through.
    let mut cumulative = vec![0.0f64; w * h];
    let mut parents = vec![0u32; w * h];

    for x in 0..width {
        cumulative[x as usize] = energy.energy_at(x, 0);
    }

    for y in 1..height {
        let (above, here) = cumulative.split_at_mut(y as usize * w);
        let above = &above[(y as usize - 1) * w..];
        for x in 0..width {
            let (xl, xr) = (x.saturating_sub(1), (x + 1).min(maxwidth));
            let (left, middle, right) = (above[xl as usize], above[x as usize], above[xr as usize]);
            let least = left.min(middle).min(right);
            let parent = if left == least {
                xl
            } else if middle == least {
                x
            } else {
                xr
            };
            here[x as usize] = least + energy.energy_at(x, y);
            parents[y as usize * w + x as usize] = parent;
        }
    }

    // The leftmost cheapest cell of the bottom row anchors the seam.
    let bottom = &cumulative[(h - 1) * w..];
    let mut seam_col = bottom
        .iter()
        .enumerate()
        .fold(0, |best, (x, &e)| if e < bottom[best] { x } else { best }) as u32;

    // Working backwards, collect the x coordinates of the seam, then
    // reverse them into row order.
    let mut seam = Vec::with_capacity(h);
    for y in (0..h).rev() {
        seam.push(seam_col);
        seam_col = parents[y * w + seam_col as usize];
    }
    seam.reverse();
    Ok(seam)
}
