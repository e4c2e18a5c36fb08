//! Threshold derivation, regime selection and outline evaluation.

use nalgebra::Vector2;
use std::f64::consts::FRAC_PI_2;

use super::types::{ArrowCfg, Outline, Regime};
use crate::error::{DesignError, Result};

#[inline]
fn cot(x: f64) -> f64 {
    1.0 / x.tan()
}

/// Arrow geometry engine: a validated `ArrowCfg` plus its two breakpoints.
///
/// Immutable after construction; every evaluation is a pure function of the
/// input length(s).
#[derive(Clone, Copy, Debug)]
pub struct ArrowDesigner {
    cfg: ArrowCfg,
    /// `height2 · (cot α − cot β)`: below this only the head remains.
    threshold1: f64,
    /// `threshold1 + height1 · cot β`: at or above this the shaft is rectangular.
    threshold2: f64,
    /// Head base corner `(height2 · cot α, height2)`, shared by all regimes.
    head: Vector2<f64>,
}

impl Default for ArrowDesigner {
    fn default() -> Self {
        let cfg = ArrowCfg::default();
        Self::derive(cfg)
    }
}

impl ArrowDesigner {
    /// Validate `cfg` and derive the thresholds.
    pub fn new(cfg: ArrowCfg) -> Result<Self> {
        let ArrowCfg {
            alpha,
            beta,
            height1,
            height2,
        } = cfg;
        if ![alpha, beta, height1, height2].iter().all(|v| v.is_finite()) {
            return Err(DesignError::InvalidConfiguration(format!(
                "parameters must be finite: {cfg:?}"
            )));
        }
        if !(alpha > 0.0 && alpha < beta && beta <= FRAC_PI_2) {
            return Err(DesignError::InvalidConfiguration(format!(
                "need 0 < alpha < beta <= pi/2, got alpha={alpha}, beta={beta}"
            )));
        }
        if !(height1 > 0.0 && height1 < height2) {
            return Err(DesignError::InvalidConfiguration(format!(
                "need 0 < height1 < height2, got height1={height1}, height2={height2}"
            )));
        }
        let designer = Self::derive(cfg);
        tracing::debug!(
            threshold1 = designer.threshold1,
            threshold2 = designer.threshold2,
            "arrow designer ready"
        );
        Ok(designer)
    }

    fn derive(cfg: ArrowCfg) -> Self {
        let threshold1 = cfg.height2 * (cot(cfg.alpha) - cot(cfg.beta));
        let threshold2 = threshold1 + cfg.height1 * cot(cfg.beta);
        Self {
            cfg,
            threshold1,
            threshold2,
            head: Vector2::new(cfg.height2 * cot(cfg.alpha), cfg.height2),
        }
    }

    #[inline]
    pub fn cfg(&self) -> ArrowCfg {
        self.cfg
    }
    #[inline]
    pub fn threshold1(&self) -> f64 {
        self.threshold1
    }
    #[inline]
    pub fn threshold2(&self) -> f64 {
        self.threshold2
    }

    /// Regime for a non-negative `length`.
    #[inline]
    pub fn regime(&self, length: f64) -> Regime {
        if length >= self.threshold2 {
            Regime::FullArrow
        } else if length > self.threshold1 {
            Regime::Tapering
        } else {
            Regime::PureHead
        }
    }

    /// Half-thickness of the shaft at its right edge for `length`.
    pub fn shaft_height(&self, length: f64) -> f64 {
        match self.regime(length) {
            Regime::FullArrow => self.cfg.height1,
            Regime::Tapering => (length - self.threshold1) * self.cfg.beta.tan(),
            Regime::PureHead => 0.0,
        }
    }

    /// Single-arrow evaluation: apply the regime table to one `length >= 0`.
    ///
    /// No validation; a negative length yields a degenerate pure-head outline.
    /// Use [`ArrowDesigner::calculate`] or [`ArrowDesigner::design`] for
    /// checked input.
    pub fn outline(&self, length: f64) -> Outline {
        let (p2, p3) = match self.regime(length) {
            Regime::FullArrow => (
                Vector2::new(self.threshold2, self.cfg.height1),
                Vector2::new(length, self.cfg.height1),
            ),
            Regime::Tapering => {
                let p = Vector2::new(length, (length - self.threshold1) * self.cfg.beta.tan());
                (p, p)
            }
            Regime::PureHead => {
                let p = Vector2::new(length, 0.0);
                (p, p)
            }
        };
        Outline::from_upper(self.head, p2, p3)
    }

    /// Batch evaluation over non-negative magnitudes.
    ///
    /// Every length is checked (finite, `>= 0`) before any output is built.
    /// Each arrow is classified once; points 0, 1, 6, 7 are shared and only
    /// the shaft corners depend on the regime.
    pub fn calculate(&self, lengths: &[f64]) -> Result<Vec<Outline>> {
        if let Some((index, &value)) = lengths
            .iter()
            .enumerate()
            .find(|(_, l)| !(l.is_finite() && **l >= 0.0))
        {
            return Err(DesignError::InvalidLength { index, value });
        }
        Ok(self.calculate_unchecked(lengths))
    }

    pub(crate) fn calculate_unchecked(&self, lengths: &[f64]) -> Vec<Outline> {
        let template = Outline::from_upper(self.head, Vector2::zeros(), Vector2::zeros());
        let tan_beta = self.cfg.beta.tan();
        let mut out = vec![template; lengths.len()];
        for (arrow, &length) in out.iter_mut().zip(lengths) {
            let (x2, y) = match self.regime(length) {
                Regime::FullArrow => (self.threshold2, self.cfg.height1),
                Regime::Tapering => (length, (length - self.threshold1) * tan_beta),
                Regime::PureHead => (length, 0.0),
            };
            arrow.pts[2] = Vector2::new(x2, y);
            arrow.pts[3] = Vector2::new(length, y);
            arrow.pts[4] = Vector2::new(length, -y);
            arrow.pts[5] = Vector2::new(x2, -y);
        }
        out
    }
}
