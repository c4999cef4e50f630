use std::fmt::{Display, Formatter};
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::math::{Float, Vec2, SQRT_3};

/// The type of number that will be stored in a tile's coordinates. Should probably be a signed integer.
pub type TileUnit = i32;

/// A fractional axial coordinate, before rounding to a cell.
pub type FractHex = Vec2;

/// Represents a tile's position on the hex grid, in axial `(q, r)` form.
///
/// The third cube component `s = -q - r` is never stored, only derived.
#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub q: TileUnit,
    pub r: TileUnit,
}

impl TileCoord {
    /// Shorthand for the tile at position (0, 0).
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a new coordinate from a q and an r component, at the position (q, r, -q - r).
    #[inline]
    #[must_use]
    pub const fn new(q: TileUnit, r: TileUnit) -> Self {
        Self { q, r }
    }

    #[inline]
    #[must_use]
    pub const fn s(self) -> TileUnit {
        -self.q - self.r
    }

    /// Rounds a fractional axial coordinate to the nearest valid cell.
    ///
    /// Works in cube coordinates (`x = q`, `z = r`, `y = -x - z`): each
    /// component is rounded independently, then the one with the largest
    /// rounding deviation is recomputed from the other two so that
    /// `x + y + z = 0` holds exactly. Integer inputs come back unchanged.
    #[must_use]
    pub fn round(fract: FractHex) -> Self {
        let x = fract.x;
        let z = fract.y;
        let y = -x - z;

        let mut rx = x.round();
        let ry = y.round();
        let mut rz = z.round();

        let dx = (rx - x).abs();
        let dy = (ry - y).abs();
        let dz = (rz - z).abs();

        if dx > dy && dx > dz {
            rx = -ry - rz;
        } else if dy <= dz {
            rz = -rx - ry;
        }
        // otherwise y absorbs the correction and (x, z) stand as rounded

        Self::new(rx as TileUnit, rz as TileUnit)
    }

    /// Projects a pixel-space position into fractional axial coordinates,
    /// using the flat-topped hex layout with center-to-center spacing
    /// `hex_width`.
    #[must_use]
    pub fn fract_from_pixel(pos: Vec2, hex_width: Float) -> FractHex {
        let size = hex_width / SQRT_3;

        let q = (pos.x * (2.0 / 3.0)) / size;
        let r = (-pos.x / 3.0 + (SQRT_3 / 3.0) * pos.y) / size;

        FractHex::new(q, r)
    }

    /// Maps a pixel-space centroid to the hex cell containing it.
    ///
    /// Pure: the same centroid and spacing always yield the same cell.
    #[must_use]
    pub fn from_pixel(pos: Vec2, hex_width: Float) -> Self {
        Self::round(Self::fract_from_pixel(pos, hex_width))
    }

    /// The inverse of [`Self::from_pixel`], mapping a cell back to the
    /// pixel-space position of its center.
    #[must_use]
    pub fn to_pixel(self, hex_width: Float) -> Vec2 {
        let size = hex_width / SQRT_3;

        let x = size * 1.5 * self.q as Float;
        let y = size * SQRT_3 * (self.r as Float + self.q as Float / 2.0);

        Vec2::new(x, y)
    }
}

impl Display for TileCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("[{}, {}]", self.q, self.r))
    }
}

/// TileCoord math

impl Add for TileCoord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.q + rhs.q, self.r + rhs.r)
    }
}

impl Sub for TileCoord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.q - rhs.q, self.r - rhs.r)
    }
}

impl Neg for TileCoord {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.q, -self.r)
    }
}
