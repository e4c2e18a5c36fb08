//! Top-level dispatch: signed lengths, spans and offset spans.
//!
//! Orientation comes from the sign of `length` (or `start - end`); the
//! magnitude goes through batch evaluation and the result is mirrored,
//! re-based at `end` and shifted by the optional y offset.

use super::engine::ArrowDesigner;
use super::types::{Orientation, Outline};
use crate::error::{DesignError, Result};

/// Batch input in one of the three supported row layouts.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrowInput {
    /// Signed lengths; the sign selects left/right.
    Lengths(Vec<f64>),
    /// `(start, end)`; the tip lands at `end`.
    Spans(Vec<(f64, f64)>),
    /// `(start, end, y_offset)`.
    OffsetSpans(Vec<(f64, f64, f64)>),
}

impl ArrowInput {
    /// Resolve a flat row-major buffer by its shape.
    ///
    /// `[]` (scalar) and `[n]` are lengths; `[n, w]` dispatches on the
    /// trailing width `w ∈ {1, 2, 3}`.
    pub fn from_shape(data: &[f64], shape: &[usize]) -> Result<Self> {
        let invalid = |reason| DesignError::InvalidInputShape {
            shape: shape.to_vec(),
            reason,
        };
        if shape.len() > 2 {
            return Err(invalid("number of dimensions should be 1 or 2"));
        }
        let expected = shape
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| invalid("shape is too large"))?;
        if data.len() != expected {
            return Err(invalid("buffer length does not match shape"));
        }
        let width = if shape.len() == 2 { shape[1] } else { 1 };
        match width {
            1 => Ok(ArrowInput::Lengths(data.to_vec())),
            2 => Ok(ArrowInput::Spans(
                data.chunks_exact(2).map(|r| (r[0], r[1])).collect(),
            )),
            3 => Ok(ArrowInput::OffsetSpans(
                data.chunks_exact(3).map(|r| (r[0], r[1], r[2])).collect(),
            )),
            _ => Err(invalid("trailing dimension should be 1, 2 or 3")),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ArrowInput::Lengths(v) => v.len(),
            ArrowInput::Spans(v) => v.len(),
            ArrowInput::OffsetSpans(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Per-row `(signed length, x shift, y shift)`.
    fn placements(&self) -> Vec<(f64, f64, f64)> {
        match self {
            ArrowInput::Lengths(v) => v.iter().map(|&l| (l, 0.0, 0.0)).collect(),
            ArrowInput::Spans(v) => v.iter().map(|&(s, e)| (s - e, e, 0.0)).collect(),
            ArrowInput::OffsetSpans(v) => v.iter().map(|&(s, e, y)| (s - e, e, y)).collect(),
        }
    }
}

impl From<Vec<f64>> for ArrowInput {
    fn from(v: Vec<f64>) -> Self {
        ArrowInput::Lengths(v)
    }
}

impl From<Vec<(f64, f64)>> for ArrowInput {
    fn from(v: Vec<(f64, f64)>) -> Self {
        ArrowInput::Spans(v)
    }
}

impl From<Vec<(f64, f64, f64)>> for ArrowInput {
    fn from(v: Vec<(f64, f64, f64)>) -> Self {
        ArrowInput::OffsetSpans(v)
    }
}

impl ArrowDesigner {
    /// Outlines for every row of `input`, oriented and placed.
    ///
    /// Fails with `InvalidLength` on the first row whose signed length is
    /// zero or not finite, or whose offsets are not finite; nothing is
    /// computed in that case.
    pub fn design(&self, input: &ArrowInput) -> Result<Vec<Outline>> {
        let rows = input.placements();
        let mut orients = Vec::with_capacity(rows.len());
        let mut magnitudes = Vec::with_capacity(rows.len());
        for (index, &(length, dx, dy)) in rows.iter().enumerate() {
            let orient = Orientation::of(length)
                .filter(|_| length.is_finite() && dx.is_finite() && dy.is_finite())
                .ok_or(DesignError::InvalidLength {
                    index,
                    value: length,
                })?;
            orients.push(orient);
            magnitudes.push(length.abs());
        }
        tracing::debug!(arrows = rows.len(), "designing arrows");
        let outlines = self.calculate_unchecked(&magnitudes);
        Ok(outlines
            .into_iter()
            .zip(orients)
            .zip(rows)
            .map(|((outline, orient), (_, dx, dy))| outline.placed(orient.sign(), dx, dy))
            .collect())
    }
}
