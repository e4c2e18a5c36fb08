//! Arrow designer: piecewise outline of a directional feature glyph.
//!
//! Anatomy (upper half; the lower half mirrors it about the x axis)
//!
//! ```text
//!                 1
//!               / |
//!             /   2-------------3      height1 (shaft half-thickness)
//!   0 = 7  <      |             |      height2 (head half-height, at 1)
//!             \   5-------------4
//!               \ |
//!                 6
//! ```
//!
//! - The tip sits at the origin; the shaft extends towards +x up to `length`.
//! - `alpha` is the head half-angle at the tip, `beta` the angle of the edge
//!   from 1 down to the shaft.
//! - Shrinking `length` below `threshold2` merges points 2 and 3 onto the
//!   taper line; below `threshold1` the shaft thickness reaches zero and only
//!   the triangular head remains. Both transitions are continuous.
//!
//! Layout
//! - `types.rs`: `ArrowCfg`, `Regime`, `Orientation`, `Outline`.
//! - `engine.rs`: construction, thresholds, single and batch evaluation.
//! - `dispatch.rs`: `ArrowInput` and signed/span placement.

mod dispatch;
mod engine;
mod types;

pub use dispatch::ArrowInput;
pub use engine::ArrowDesigner;
pub use types::{ArrowCfg, Orientation, Outline, Regime, OUTLINE_LEN};
