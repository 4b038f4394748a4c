// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the gradient across a pixel pair
//!
//! Given two pixels, the gradient between them is the squared distance
//! between the colors that make them up:
//!
//! ```text
//! |Δ|² = (Δr)² + (Δg)² + (Δb)²
//! ```

use image::Rgb;
use std::iter::zip;

/// (Pixel, Pixel) -> squared RGB distance
#[inline]
pub fn gradient_of_pair(p1: &Rgb<u8>, p2: &Rgb<u8>) -> u32 {
    zip(p1.0.iter(), p2.0.iter())
        .map(|(&c1, &c2)| {
            let d = i32::from(c1) - i32::from(c2);
            (d * d) as u32
        })
        .sum()
}
