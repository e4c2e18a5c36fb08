//! Arrow glyph geometry for genomic feature maps.
//!
//! - `designer`: the arrow engine (thresholds, regimes, batch outlines, dispatch).
//! - `prepare`: strands, feature spans, polygon coordinate strings.
//! - `render`: SVG elements and documents with explicit styles.
//!
//! The engine is a pure function of its configuration and input; I/O lives
//! in the `cli` crate.

pub mod designer;
pub mod error;
pub mod prepare;
pub mod render;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use designer::{ArrowCfg, ArrowDesigner, ArrowInput, Orientation, Outline, Regime};
pub use error::{DesignError, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::designer::{
        ArrowCfg, ArrowDesigner, ArrowInput, Orientation, Outline, Regime, OUTLINE_LEN,
    };
    pub use crate::error::DesignError;
    pub use crate::prepare::{polygon_points, spans_from_features, Feature, Strand};
    pub use crate::render::{Plotter, PolygonStyle, TextStyle};
    pub use nalgebra::Vector2 as Vec2;
}
