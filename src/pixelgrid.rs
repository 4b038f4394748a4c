// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid being carved.
//!
//! A fixed-capacity buffer of RGB pixels with a logical width and
//! height that only ever shrink.  Carving moves pixels around inside
//! the buffer; nothing is reallocated until the caller asks for the
//! finished image, at which point the logical region is cropped out.

use image::{GenericImageView, ImageBuffer, Pixel, Rgb, RgbImage};

/// An RGB pixel grid with shrinking logical bounds.
///
/// Pixels beyond the logical width or height are stale leftovers of
/// earlier carves and are never read.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    stride: u32,
    width: u32,
    height: u32,
    pixels: Vec<Rgb<u8>>,
}

impl PixelGrid {
    /// A black grid.
    pub fn new(width: u32, height: u32) -> Self {
        PixelGrid::from_fn(width, height, |_, _| Rgb([0, 0, 0]))
    }

    /// A grid whose pixels are produced by `f(x, y)`.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> Rgb<u8>,
    {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        PixelGrid {
            stride: width,
            width,
            height,
            pixels,
        }
    }

    /// Copy any 8-bit image into a grid, dropping alpha.
    pub fn from_image<I, P>(image: &I) -> Self
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8> + 'static,
    {
        let (width, height) = image.dimensions();
        PixelGrid::from_fn(width, height, |x, y| image.get_pixel(x, y).to_rgb())
    }

    /// The logical region as a freshly allocated image.
    pub fn to_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width, self.height, |x, y| self.get(x, y))
    }

    /// Consume the grid, cropping to the logical region.
    pub fn into_image(self) -> RgbImage {
        self.to_image()
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

    /// Whether the grid has no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The pixel at `(x, y)` of the logical region.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Rgb<u8> {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[self.get_index(x, y)]
    }

    /// Overwrite the pixel at `(x, y)` of the logical region.
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, pixel: Rgb<u8>) {
        debug_assert!(x < self.width && y < self.height);
        let index = self.get_index(x, y);
        self.pixels[index] = pixel;
    }

    /// The logical part of row `y`, for shifting in place.
    pub(crate) fn row_mut(&mut self, y: u32) -> &mut [Rgb<u8>] {
        let start = self.get_index(0, y);
        let end = start + self.width as usize;
        &mut self.pixels[start..end]
    }

    pub(crate) fn shrink_width(&mut self) {
        debug_assert!(self.width > 1);
        self.width -= 1;
    }

    pub(crate) fn shrink_height(&mut self) {
        debug_assert!(self.height > 1);
        self.height -= 1;
    }

    // The row stride is the width the buffer was allocated with, not
    // the logical width.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.stride as usize) + (x as usize)
    }
}

/// Two grids are equal when their logical regions hold the same pixels.
impl PartialEq for PixelGrid {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions()
            && (0..self.height).all(|y| (0..self.width).all(|x| self.get(x, y) == other.get(x, y)))
    }
}

impl Eq for PixelGrid {}

impl From<&RgbImage> for PixelGrid {
    fn from(image: &RgbImage) -> Self {
        PixelGrid::from_image(image)
    }
}
