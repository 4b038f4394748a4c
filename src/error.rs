// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the carving engine.
//!
//! Everything here is a contract violation by the caller: the engine
//! is pure computation over in-memory data and has nothing to retry.

use crate::seamcarver::Carve;
use failure::Fail;

/// The ways a carve request can be refused.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum CarveError {
    /// More seams were requested than the axis can give up.  Each round
    /// needs at least two pixels along the carved axis.
    #[fail(
        display = "cannot remove {} seams along the {}: the image is only {} pixels",
        requested, axis, available
    )]
    InvalidDimension {
        axis: Carve,
        requested: u32,
        available: u32,
    },

    /// A target size larger than the source.  Seams are only ever
    /// removed, never inserted.
    #[fail(
        display = "cannot enlarge the {} from {} to {} pixels",
        axis, available, requested
    )]
    CannotEnlarge {
        axis: Carve,
        requested: u32,
        available: u32,
    },

    /// A grid or energy field with no pixels along some axis.
    #[fail(display = "degenerate {}x{} grid", width, height)]
    DegenerateGrid { width: u32, height: u32 },

    /// A seam that doesn't fit the grid it was handed to: the wrong
    /// length, or an entry past the end of the carved axis.
    #[fail(
        display = "a seam across the {} must have {} entries below {}",
        axis, length, bound
    )]
    SeamMismatch { axis: Carve, length: u32, bound: u32 },
}

pub type Result<T> = std::result::Result<T, CarveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_axis_and_bound() {
        let err = CarveError::InvalidDimension {
            axis: Carve::Width,
            requested: 5,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "cannot remove 5 seams along the width: the image is only 5 pixels"
        );

        let err = CarveError::CannotEnlarge {
            axis: Carve::Height,
            requested: 12,
            available: 10,
        };
        assert_eq!(err.to_string(), "cannot enlarge the height from 10 to 12 pixels");

        let err = CarveError::SeamMismatch {
            axis: Carve::Width,
            length: 3,
            bound: 4,
        };
        assert_eq!(
            err.to_string(),
            "a seam across the width must have 3 entries below 4"
        );
    }
}
