//! Value types shared by the designer: shape configuration, regimes, outlines.
//!
//! - `ArrowCfg`: the four shape parameters (two half-angles, two half-heights).
//! - `Regime`: which piece of the outline formula applies to a given length.
//! - `Outline`: eight points, closed and mirror-symmetric about the x axis.
//! - `Orientation`: left/right, taken from the sign of a signed length.

use std::ops::Index;

use nalgebra::Vector2;

/// Number of points in an arrow outline (first and last coincide).
pub const OUTLINE_LEN: usize = 8;

/// Shape parameters of an arrow.
///
/// Invariants (checked by `ArrowDesigner::new`):
/// - `0 < alpha < beta <= π/2`
/// - `0 < height1 < height2`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowCfg {
    /// Half-angle of the head at the tip (radians).
    pub alpha: f64,
    /// Half-angle of the shaft-to-head transition (radians).
    pub beta: f64,
    /// Half-thickness of the shaft.
    pub height1: f64,
    /// Half-height of the head base.
    pub height2: f64,
}

impl Default for ArrowCfg {
    fn default() -> Self {
        Self {
            alpha: 0.7,
            beta: 1.0,
            height1: 16.0,
            height2: 32.0,
        }
    }
}

/// Piece of the outline formula selected by a non-negative length.
///
/// Boundaries are inclusive on the outer regimes:
/// `PureHead` for `length <= threshold1`, `FullArrow` for `length >= threshold2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Regime {
    /// Rectangular shaft of half-thickness `height1` behind the head.
    FullArrow,
    /// Shaft collapsed onto the taper line; thickness shrinks with length.
    Tapering,
    /// Triangular head only; no visible shaft.
    PureHead,
}

/// Direction an arrow points along the x axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Outline extends towards +x from its tip.
    Right,
    /// Outline mirrored to extend towards −x.
    Left,
}

impl Orientation {
    /// Orientation of a signed length; `None` for zero and NaN.
    #[inline]
    pub fn of(length: f64) -> Option<Self> {
        if length > 0.0 {
            Some(Orientation::Right)
        } else if length < 0.0 {
            Some(Orientation::Left)
        } else {
            None
        }
    }
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Orientation::Right => 1.0,
            Orientation::Left => -1.0,
        }
    }
}

/// Closed eight-point arrow polygon.
///
/// Layout: `pts[0] == pts[7]` is the tip, `pts[1]`/`pts[6]` the head base
/// corners, `pts[2..=5]` the shaft (or taper) corners. Successive points can
/// be joined directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub pts: [Vector2<f64>; OUTLINE_LEN],
}

impl Outline {
    /// Build from the upper half (points 1, 2, 3); the lower half is mirrored.
    pub fn from_upper(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> Self {
        let mirror = |p: Vector2<f64>| Vector2::new(p.x, -p.y);
        Self {
            pts: [
                Vector2::zeros(),
                p1,
                p2,
                p3,
                mirror(p3),
                mirror(p2),
                mirror(p1),
                Vector2::zeros(),
            ],
        }
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>; OUTLINE_LEN] {
        &self.pts
    }

    /// First and last point coincide.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.pts[0] == self.pts[OUTLINE_LEN - 1]
    }

    /// Scale every x by `sx`, then shift by `(dx, dy)`.
    #[must_use]
    pub fn placed(mut self, sx: f64, dx: f64, dy: f64) -> Self {
        for p in self.pts.iter_mut() {
            p.x = p.x * sx + dx;
            p.y += dy;
        }
        self
    }

    /// Axis-aligned bounds as `(min, max)` corners.
    pub fn bounds(&self) -> (Vector2<f64>, Vector2<f64>) {
        let mut lo = self.pts[0];
        let mut hi = self.pts[0];
        for p in &self.pts[1..] {
            lo = lo.inf(p);
            hi = hi.sup(p);
        }
        (lo, hi)
    }
}

impl Index<usize> for Outline {
    type Output = Vector2<f64>;
    #[inline]
    fn index(&self, i: usize) -> &Self::Output {
        &self.pts[i]
    }
}
