// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the length of its color gradient: the RGB
//! distance between its left and right neighbors, combined with the
//! distance between the neighbors above and below.
//!
//! Pixels on the border don't sample outside the grid or wrap around.
//! Instead the sampling position is clamped one pixel inward, so an
//! edge pixel reuses the neighbor pair of the pixel next to it.

use crate::error::{CarveError, Result};
use crate::matrix::{EnergyMatrix, Matrix};
use crate::pixelgrid::PixelGrid;
use crate::pixelpairs::gradient_of_pair;
use image::{GrayImage, ImageBuffer, Luma};
use itertools::iproduct;
use num_traits::NumCast;

// The pair of positions sampled for `pos` along an axis `extent`
// pixels long.  Below three pixels there is no interior to clamp to,
// so the two ends of the axis are used.
#[inline]
fn sample_pair(pos: u32, extent: u32) -> (u32, u32) {
    if extent < 3 {
        (0, extent - 1)
    } else {
        let centre = pos.max(1).min(extent - 2);
        (centre - 1, centre + 1)
    }
}

/// Compute the energy of every pixel in the logical region of a grid.
///
/// The result is a pure function of the grid's current pixels and has
/// to be recomputed after every carve.
pub fn compute_energy(grid: &PixelGrid) -> Result<EnergyMatrix> {
    let (width, height) = grid.dimensions();
    if grid.is_empty() {
        return Err(CarveError::DegenerateGrid { width, height });
    }

    let mut energy = Matrix::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let (left, right) = sample_pair(x, width);
        let (up, down) = sample_pair(y, height);
        let dx = gradient_of_pair(&grid.get(left, y), &grid.get(right, y));
        let dy = gradient_of_pair(&grid.get(x, up), &grid.get(x, down));
        energy[(x, y)] = <f64 as From<_>>::from(dx + dy).sqrt();
    }
    Ok(energy)
}

/// Render an energy field as a grayscale image, scaled so the highest
/// energy is white.  A field with no energy at all renders black.
pub fn energy_to_image(energy: &EnergyMatrix) -> GrayImage {
    let max = energy.as_slice().iter().cloned().fold(0.0, f64::max);
    ImageBuffer::from_fn(energy.width(), energy.height(), |x, y| {
        if max <= 0.0 {
            return Luma([0]);
        }
        let intensity = (energy[(x, y)] / max * 255.0).floor();
        Luma([NumCast::from(intensity).unwrap_or(u8::MAX)])
    })
}
