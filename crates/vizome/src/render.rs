//! SVG rendering of arrow outlines and their labels.
//!
//! Styles are plain values owned by a [`Plotter`]; nothing is global.
//! Elements are emitted as strings so callers can embed them in any document.

use std::fmt::Write;

use crate::designer::{ArrowDesigner, ArrowInput, Outline};
use crate::error::Result;
use crate::prepare::{polygon_points, Feature};

/// Stroke and fill attributes of arrow polygons (fill comes from the feature).
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonStyle {
    pub stroke_width: f64,
    pub fill_opacity: f64,
    pub stroke: String,
    pub stroke_opacity: f64,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            stroke_width: 1.0,
            fill_opacity: 0.7,
            stroke: "black".to_string(),
            stroke_opacity: 0.8,
        }
    }
}

impl PolygonStyle {
    /// Inline CSS, e.g. `stroke-width:1;fill-opacity:0.7;…`.
    pub fn css(&self) -> String {
        format!(
            "stroke-width:{};fill-opacity:{};stroke:{};stroke-opacity:{}",
            self.stroke_width, self.fill_opacity, self.stroke, self.stroke_opacity
        )
    }
}

/// Font attributes of labels.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_family: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: 14.0,
            font_family: "Times New Roman".to_string(),
        }
    }
}

impl TextStyle {
    pub fn css(&self) -> String {
        format!(
            "font-size:{};font-family:{}",
            self.font_size, self.font_family
        )
    }
}

/// Renderer for feature maps.
#[derive(Clone, Debug, PartialEq)]
pub struct Plotter {
    /// Label tilt in degrees, counter-clockwise from the feature axis.
    pub text_angle: f64,
    pub text_style: TextStyle,
    pub polygon_style: PolygonStyle,
    /// Blank space around the drawing, in user units.
    pub margin: f64,
}

impl Default for Plotter {
    fn default() -> Self {
        Self {
            text_angle: 45.0,
            text_style: TextStyle::default(),
            polygon_style: PolygonStyle::default(),
            margin: 20.0,
        }
    }
}

/// Escape text for use in XML content and attribute values.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

impl Plotter {
    /// `<polygon>` with the given `points` attribute and fill color.
    pub fn render_polygon(&self, points: &str, color: &str) -> String {
        format!(
            r#"<polygon points="{}" style="{};fill:{}"/>"#,
            escape(points),
            escape(&self.polygon_style.css()),
            escape(color)
        )
    }

    /// `<text>` at `(x, y)` rotated by `angle` degrees about `(rx, ry)`.
    pub fn render_text(
        &self,
        content: &str,
        x: f64,
        y: f64,
        rx: f64,
        ry: f64,
        angle: f64,
    ) -> String {
        format!(
            r#"<text x="{x}" y="{y}" transform="rotate({angle} {rx},{ry})" style="{}">{}</text>"#,
            escape(&self.text_style.css()),
            escape(content)
        )
    }

    /// Complete SVG document: one arrow per feature on a shared baseline,
    /// labels above the left end, viewBox fitted to the drawing.
    pub fn render_document(
        &self,
        designer: &ArrowDesigner,
        features: &[Feature],
    ) -> Result<String> {
        let height2 = designer.cfg().height2;
        let baseline = height2;
        let input = ArrowInput::OffsetSpans(
            features
                .iter()
                .map(|f| {
                    let (tail, tip) = f.span();
                    (tail, tip, baseline)
                })
                .collect(),
        );
        let outlines = designer.design(&input)?;

        let (mut x0, mut y0, mut x1, y1) =
            union_bounds(&outlines).unwrap_or((0.0, 0.0, 0.0, 2.0 * height2));
        for (outline, feature) in outlines.iter().zip(features) {
            if feature.label.is_empty() {
                continue;
            }
            let (x, y) = label_anchor(outline);
            let (dx, dy) = self.label_reach(&feature.label);
            x0 = x0.min(x);
            x1 = x1.max(x + dx);
            y0 = y0.min(y - dy - self.text_style.font_size);
        }
        let min_x = x0 - self.margin;
        let min_y = y0 - self.margin;
        let width = (x1 - x0) + 2.0 * self.margin;
        let height = (y1 - y0) + 2.0 * self.margin;

        let mut doc = String::new();
        let _ = writeln!(
            doc,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{min_x} {min_y} {width} {height}">"#
        );
        for (outline, feature) in outlines.iter().zip(features) {
            let _ = writeln!(
                doc,
                "  {}",
                self.render_polygon(&polygon_points(outline), &feature.color)
            );
            if feature.label.is_empty() {
                continue;
            }
            let (x, y) = label_anchor(outline);
            let _ = writeln!(
                doc,
                "  {}",
                self.render_text(&feature.label, x, y, x, y, -self.text_angle)
            );
        }
        doc.push_str("</svg>\n");
        tracing::debug!(features = features.len(), width, height, "rendered document");
        Ok(doc)
    }

    /// Estimated `(right, up)` extent of a label tilted by `text_angle`,
    /// with glyphs taken as 0.6 em wide.
    fn label_reach(&self, label: &str) -> (f64, f64) {
        let run = 0.6 * self.text_style.font_size * label.chars().count() as f64;
        let angle = self.text_angle.to_radians();
        (run * angle.cos().abs(), run * angle.sin().abs())
    }
}

/// Baseline origin of a label: just above the left end of its arrow.
fn label_anchor(outline: &Outline) -> (f64, f64) {
    let (lo, _) = outline.bounds();
    (lo.x, lo.y - 4.0)
}

/// `(min_x, min_y, max_x, max_y)` over all outlines.
fn union_bounds(outlines: &[Outline]) -> Option<(f64, f64, f64, f64)> {
    outlines.iter().map(Outline::bounds).fold(None, |acc, (lo, hi)| {
        Some(match acc {
            None => (lo.x, lo.y, hi.x, hi.y),
            Some((x0, y0, x1, y1)) => {
                (x0.min(lo.x), y0.min(lo.y), x1.max(hi.x), y1.max(hi.y))
            }
        })
    })
}
