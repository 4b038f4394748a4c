// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image shrinking.
//!
//! Repeatedly find the connected path of pixels with the least energy
//! running across an image and remove it, until the image is the
//! requested size.
//!
//! ```
//! use image::{Rgb, RgbImage};
//! use seamshrink::{resize, PixelGrid};
//!
//! let image = RgbImage::from_fn(8, 6, |x, _| Rgb([x as u8 * 30, 0, 0]));
//! let carved = resize(&PixelGrid::from(&image), 3, 1).unwrap();
//! assert_eq!(carved.into_image().dimensions(), (5, 5));
//! ```

pub mod error;
pub use error::{CarveError, Result};

pub mod matrix;
pub use matrix::{EnergyMatrix, Matrix};

pub mod flipper;
pub use flipper::{EnergyView, Flipper};

pub mod pixelgrid;
pub use pixelgrid::PixelGrid;

pub mod pixelpairs;

pub mod energy;
pub use energy::{compute_energy, energy_to_image};

pub mod seamfinder;
pub use seamfinder::{find_seam, Seam, SeamFinder};

pub mod seamcarver;
pub use seamcarver::{resize, Carve, SeamCarver};
