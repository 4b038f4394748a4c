// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy dimensional flipper
//!
//! The seam search only ever walks top-to-bottom.  To find a
//! left-to-right seam we hand it a proxy that maps the width to the
//! original height, and vice versa, as well as every x to y and vice
//! versa.  Nothing is copied; the same routine serves both axes.

use crate::matrix::Matrix;

/// Anything the seam search can read: a width×height field of
/// non-negative energies.
pub trait EnergyView {
    /// (width, height), as `image` reports it.
    fn dimensions(&self) -> (u32, u32);

    /// The energy at column `x` of row `y`.
    fn energy_at(&self, x: u32, y: u32) -> f64;
}

impl EnergyView for Matrix<f64> {
    fn dimensions(&self) -> (u32, u32) {
        Matrix::dimensions(self)
    }

    #[inline]
    fn energy_at(&self, x: u32, y: u32) -> f64 {
        self[(x, y)]
    }
}

impl<'a, V: EnergyView + ?Sized> EnergyView for &'a V {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    #[inline]
    fn energy_at(&self, x: u32, y: u32) -> f64 {
        (**self).energy_at(x, y)
    }
}

/// A transposed view over another energy field.
pub struct Flipper<'a, V: EnergyView + ?Sized> {
    pub energy: &'a V,
}

impl<'a, V: EnergyView + ?Sized> Flipper<'a, V> {
    pub fn new(energy: &'a V) -> Self {
        Flipper { energy }
    }
}

impl<'a, V: EnergyView + ?Sized> EnergyView for Flipper<'a, V> {
    fn dimensions(&self) -> (u32, u32) {
        let (width, height) = self.energy.dimensions();
        (height, width)
    }

    #[inline]
    fn energy_at(&self, x: u32, y: u32) -> f64 {
        self.energy.energy_at(y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::EnergyMatrix;

    #[test]
    fn flipper_matches_a_real_transpose() {
        let energy = EnergyMatrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let copy = energy.transpose();
        let view = Flipper::new(&energy);
        assert_eq!(view.dimensions(), (2, 3));
        for y in 0..3 {
            for x in 0..2 {
                assert_eq!(view.energy_at(x, y), copy[(x, y)]);
            }
        }
    }

    #[test]
    fn flipping_twice_is_the_identity() {
        let energy = EnergyMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        let once = Flipper::new(&energy);
        let twice = Flipper::new(&once);
        assert_eq!(twice.dimensions(), energy.dimensions());
        assert_eq!(twice.energy_at(1, 2), 6.0);
    }
}
