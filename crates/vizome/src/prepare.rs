//! Feature rows → designer input, outlines → polygon coordinate strings.
//!
//! A feature is an interval on a sequence with a strand. Forward features
//! point towards higher coordinates, reverse features towards lower ones.

use std::fmt::Write;
use std::str::FromStr;

use crate::designer::Outline;
use crate::error::{DesignError, Result};

/// Strand of a feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Accepts `+`/`-` and the integers `1`, `+1`, `-1` (surrounding
    /// whitespace ignored).
    pub fn parse(token: &str) -> Result<Self> {
        match token.trim() {
            "+" | "1" | "+1" => Ok(Strand::Forward),
            "-" | "-1" => Ok(Strand::Reverse),
            other => Err(DesignError::InvalidStrand(other.to_string())),
        }
    }
}

impl FromStr for Strand {
    type Err = DesignError;
    fn from_str(s: &str) -> Result<Self> {
        Strand::parse(s)
    }
}

/// One row of a feature table.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub start: f64,
    pub stop: f64,
    pub strand: Strand,
    pub color: String,
    pub label: String,
}

impl Feature {
    /// `(tail, tip)` span: tip at the high end for forward features, at the
    /// low end for reverse ones. Feed it to `ArrowInput::Spans`.
    pub fn span(&self) -> (f64, f64) {
        let lo = self.start.min(self.stop);
        let hi = self.start.max(self.stop);
        match self.strand {
            Strand::Forward => (lo, hi),
            Strand::Reverse => (hi, lo),
        }
    }
}

/// Spans of all features, in order.
pub fn spans_from_features(features: &[Feature]) -> Vec<(f64, f64)> {
    features.iter().map(Feature::span).collect()
}

/// SVG `points` attribute value: `"x,y x,y …"` with one pair per outline point.
pub fn polygon_points(outline: &Outline) -> String {
    let mut s = String::new();
    for (i, p) in outline.points().iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = write!(s, "{},{}", p.x, p.y);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designer::{ArrowDesigner, ArrowInput};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn feature(start: f64, stop: f64, strand: Strand) -> Feature {
        Feature {
            start,
            stop,
            strand,
            color: "black".into(),
            label: String::new(),
        }
    }

    #[test]
    fn strand_tokens() {
        assert_eq!(Strand::parse("+").unwrap(), Strand::Forward);
        assert_eq!(Strand::parse(" 1 ").unwrap(), Strand::Forward);
        assert_eq!(Strand::parse("+1").unwrap(), Strand::Forward);
        assert_eq!("-".parse::<Strand>().unwrap(), Strand::Reverse);
        assert_eq!(Strand::parse("-1").unwrap(), Strand::Reverse);
        assert_eq!(
            Strand::parse("0"),
            Err(DesignError::InvalidStrand("0".into()))
        );
        assert!(Strand::parse("forward").is_err());
    }

    #[test]
    fn spans_follow_strand_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        let features: Vec<Feature> = (0..20)
            .map(|_| {
                let strand = if rng.gen::<bool>() {
                    Strand::Forward
                } else {
                    Strand::Reverse
                };
                feature(rng.gen::<f64>(), rng.gen::<f64>(), strand)
            })
            .collect();
        let spans = spans_from_features(&features);
        assert_eq!(spans.len(), features.len());
        for (f, (a, b)) in features.iter().zip(spans) {
            match f.strand {
                Strand::Forward => assert!(a <= b),
                Strand::Reverse => assert!(a >= b),
            }
        }
    }

    #[test]
    fn forward_tip_lands_on_high_end() {
        let d = ArrowDesigner::default();
        let spans = spans_from_features(&[
            feature(500.0, 100.0, Strand::Forward),
            feature(100.0, 500.0, Strand::Reverse),
        ]);
        let out = d.design(&ArrowInput::Spans(spans)).unwrap();
        assert_eq!(out[0][0].x, 500.0);
        assert_eq!(out[1][0].x, 100.0);
    }

    #[test]
    fn polygon_strings_have_eight_pairs() {
        let d = ArrowDesigner::default();
        let mut rng = StdRng::seed_from_u64(3);
        for n in 0..5 {
            let lengths: Vec<f64> = (0..n).map(|_| rng.gen_range(0.01..1.0)).collect();
            let out = d.design(&ArrowInput::Lengths(lengths)).unwrap();
            let strings: Vec<String> = out.iter().map(polygon_points).collect();
            assert_eq!(strings.len(), n);
            for s in strings {
                assert_eq!(s.matches(',').count(), 8);
                assert_eq!(s.split(' ').count(), 8);
            }
        }
    }

    #[test]
    fn polygon_string_format() {
        let d = ArrowDesigner::new(crate::designer::ArrowCfg {
            alpha: std::f64::consts::FRAC_PI_4,
            beta: std::f64::consts::FRAC_PI_2,
            height1: 1.0,
            height2: 2.0,
        })
        .unwrap();
        let s = polygon_points(&d.outline(0.5));
        assert!(s.starts_with("0,0 "));
        assert!(s.ends_with(" 0,0"));
    }
}
