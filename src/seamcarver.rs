// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The seam removers and the resize driver that strings energy, seam
//! search and removal together, one seam at a time.
//!
//! All width reductions happen before any height reduction.  Carving
//! them interleaved is just as valid and generally gives a different
//! picture; this crate always finishes the columns first.

use crate::energy::compute_energy;
use crate::error::{CarveError, Result};
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::SeamFinder;
use image::{GenericImageView, Pixel, RgbImage};
use std::fmt;
use tracing::{debug, info};

/// The axis being reduced.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Carve {
    Width,
    Height,
}

impl fmt::Display for Carve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Carve::Width => "width",
            Carve::Height => "height",
        })
    }
}

// A seam can only come out of an axis at least two pixels long, and
// must name one in-bounds position for every pixel across it.
fn check_seam(grid: &PixelGrid, axis: Carve, seam: &[u32]) -> Result<()> {
    let (width, height) = grid.dimensions();
    let (extent, length) = match axis {
        Carve::Width => (width, height),
        Carve::Height => (height, width),
    };
    if extent < 2 || length == 0 {
        return Err(CarveError::DegenerateGrid { width, height });
    }
    if seam.len() != length as usize || seam.iter().any(|&pos| pos >= extent) {
        return Err(CarveError::SeamMismatch {
            axis,
            length,
            bound: extent,
        });
    }
    Ok(())
}

/// Remove one pixel from every row, at the column named by the seam,
/// closing the gap by shifting the rest of the row left.  The grid
/// loses one column; the buffer is not reallocated.
///
/// The grid must be at least two columns wide and the seam must hold
/// one in-bounds column per row; otherwise nothing is touched.
pub fn remove_vertical_seam(grid: &mut PixelGrid, seam: &[u32]) -> Result<()> {
    check_seam(grid, Carve::Width, seam)?;
    for (y, &x) in seam.iter().enumerate() {
        let row = grid.row_mut(y as u32);
        row.copy_within(x as usize + 1.., x as usize);
    }
    grid.shrink_width();
    Ok(())
}

/// Remove one pixel from every column, at the row named by the seam,
/// closing the gap by shifting the rest of the column up.  The grid
/// loses one row.
pub fn remove_horizontal_seam(grid: &mut PixelGrid, seam: &[u32]) -> Result<()> {
    check_seam(grid, Carve::Height, seam)?;
    let height = grid.height();
    for (x, &seam_row) in seam.iter().enumerate() {
        let x = x as u32;
        for y in seam_row..height - 1 {
            let below = grid.get(x, y + 1);
            grid.put(x, y, below);
        }
    }
    grid.shrink_height();
    Ok(())
}

/// Recompute the energy of the current grid, find the cheapest seam
/// across the given axis and carve it out.
pub fn carve_once(grid: &mut PixelGrid, direction: Carve) -> Result<()> {
    let energy = compute_energy(grid)?;
    match direction {
        Carve::Width => {
            let seam = energy.find_vertical_seam()?;
            remove_vertical_seam(grid, &seam)?;
        }
        Carve::Height => {
            let seam = energy.find_horizontal_seam()?;
            remove_horizontal_seam(grid, &seam)?;
        }
    }
    debug!(axis = %direction, width = grid.width(), height = grid.height(), "seam removed");
    Ok(())
}

fn check_removal(axis: Carve, requested: u32, available: u32) -> Result<()> {
    if requested >= available {
        Err(CarveError::InvalidDimension {
            axis,
            requested,
            available,
        })
    } else {
        Ok(())
    }
}

/// Remove `remove_width` vertical seams and then `remove_height`
/// horizontal seams, returning the shrunken grid.
///
/// The request is checked before any work is done: fewer seams than
/// there are columns (or rows) may be removed, so that every round
/// still has two pixels to compare.  The caller's grid is never
/// touched; carving happens on a copy.
///
/// The whole energy field is recomputed every round, even though only
/// the pixels next to the last seam changed.
pub fn resize(grid: &PixelGrid, remove_width: u32, remove_height: u32) -> Result<PixelGrid> {
    let (width, height) = grid.dimensions();
    if grid.is_empty() {
        return Err(CarveError::DegenerateGrid { width, height });
    }
    check_removal(Carve::Width, remove_width, width)?;
    check_removal(Carve::Height, remove_height, height)?;

    info!(width, height, remove_width, remove_height, "carving");
    let mut scratch = grid.clone();
    for _ in 0..remove_width {
        carve_once(&mut scratch, Carve::Width)?;
    }
    for _ in 0..remove_height {
        carve_once(&mut scratch, Carve::Height)?;
    }
    info!(
        width = scratch.width(),
        height = scratch.height(),
        "carving complete"
    );
    Ok(scratch)
}

fn seams_to_remove(axis: Carve, current: u32, target: u32) -> Result<u32> {
    if target > current {
        return Err(CarveError::CannotEnlarge {
            axis,
            requested: target,
            available: current,
        });
    }
    Ok(current - target)
}

/// A struct for holding the image to be carved down to a target size.
pub struct SeamCarver<'a, I: GenericImageView> {
    image: &'a I,
}

impl<'a, I> SeamCarver<'a, I>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8> + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    /// Carve the image down to `new_width` × `new_height`.  Both must
    /// be at least one and no larger than the image.
    pub fn carve(&self, new_width: u32, new_height: u32) -> Result<RgbImage> {
        let (width, height) = self.image.dimensions();
        let remove_width = seams_to_remove(Carve::Width, width, new_width)?;
        let remove_height = seams_to_remove(Carve::Height, height, new_height)?;
        let grid = PixelGrid::from_image(self.image);
        Ok(resize(&grid, remove_width, remove_height)?.into_image())
    }
}
