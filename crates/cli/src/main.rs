use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;
use vizome::designer::{ArrowCfg, ArrowDesigner, ArrowInput};
use vizome::render::Plotter;

mod ingest;
mod provenance;

#[derive(Parser)]
#[command(name = "vizome")]
#[command(about = "Arrow maps of directional genomic features")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Arrow shape flags shared by all subcommands.
#[derive(Args, Clone, Copy, Debug, Serialize)]
struct ShapeArgs {
    /// Head half-angle at the tip (radians)
    #[arg(long, default_value_t = ArrowCfg::default().alpha)]
    alpha: f64,
    /// Shaft-to-head transition half-angle (radians)
    #[arg(long, default_value_t = ArrowCfg::default().beta)]
    beta: f64,
    /// Shaft half-thickness
    #[arg(long, default_value_t = ArrowCfg::default().height1)]
    height1: f64,
    /// Head half-height
    #[arg(long, default_value_t = ArrowCfg::default().height2)]
    height2: f64,
}

impl From<ShapeArgs> for ArrowCfg {
    fn from(a: ShapeArgs) -> Self {
        ArrowCfg {
            alpha: a.alpha,
            beta: a.beta,
            height1: a.height1,
            height2: a.height2,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Render a feature table as an SVG arrow map (plus provenance sidecar)
    Render {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        shape: ShapeArgs,
        /// Label tilt in degrees
        #[arg(long, default_value_t = 45.0)]
        text_angle: f64,
        /// Column separator; sniffed from the header when omitted
        #[arg(long)]
        separator: Option<char>,
    },
    /// Print outlines of signed lengths as JSON
    Outline {
        #[command(flatten)]
        shape: ShapeArgs,
        #[arg(required = true, allow_negative_numbers = true)]
        lengths: Vec<f64>,
    },
    /// Print version, revision and the default arrow configuration
    Report,
}

#[derive(Serialize)]
struct OutlineRecord {
    length: f64,
    regime: String,
    points: Vec<[f64; 2]>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Render {
            input,
            out,
            shape,
            text_angle,
            separator,
        } => render(&input, &out, shape, text_angle, separator),
        Action::Outline { shape, lengths } => outline(shape, lengths),
        Action::Report => report(),
    }
}

fn designer_for(shape: ShapeArgs) -> Result<ArrowDesigner> {
    ArrowDesigner::new(shape.into()).context("arrow shape flags")
}

fn render(
    input: &Path,
    out: &Path,
    shape: ShapeArgs,
    text_angle: f64,
    separator: Option<char>,
) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "render");
    let designer = designer_for(shape)?;
    let separator = match separator {
        Some(c) => u8::try_from(c).context("separator must be a single-byte character")?,
        None => ingest::sniff_separator(input)?,
    };
    let features = ingest::read_features(input, separator)?;
    let plotter = Plotter {
        text_angle,
        ..Plotter::default()
    };
    let svg = plotter
        .render_document(&designer, &features)
        .with_context(|| format!("rendering {}", input.display()))?;

    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, svg).with_context(|| format!("writing {}", out.display()))?;

    let params = serde_json::json!({
        "shape": shape,
        "threshold1": designer.threshold1(),
        "threshold2": designer.threshold2(),
        "text_angle": text_angle,
        "separator": (separator as char).to_string(),
        "features": features.len(),
    });
    let prov = provenance::write_sidecar(out, provenance::Payload::new(params).with_input(input))?;
    tracing::info!(features = features.len(), provenance = %prov.display(), "done");
    Ok(())
}

fn outline(shape: ShapeArgs, lengths: Vec<f64>) -> Result<()> {
    let designer = designer_for(shape)?;
    let outlines = designer.design(&ArrowInput::Lengths(lengths.clone()))?;
    let records: Vec<OutlineRecord> = lengths
        .iter()
        .zip(&outlines)
        .map(|(&length, o)| OutlineRecord {
            length,
            regime: format!("{:?}", designer.regime(length.abs())),
            points: o.points().iter().map(|p| [p.x, p.y]).collect(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

fn report() -> Result<()> {
    let designer = ArrowDesigner::default();
    let cfg = designer.cfg();
    let obj = serde_json::json!({
        "version": vizome::VERSION,
        "code_rev": provenance::current_git_rev(),
        "default_shape": {
            "alpha": cfg.alpha,
            "beta": cfg.beta,
            "height1": cfg.height1,
            "height2": cfg.height2,
        },
        "threshold1": designer.threshold1(),
        "threshold2": designer.threshold2(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn shape_flags_default_to_library_defaults() {
        let cmd = Cmd::try_parse_from(["vizome", "outline", "--", "10", "-20"]).unwrap();
        match cmd.action {
            Action::Outline { shape, lengths } => {
                assert_eq!(ArrowCfg::from(shape), ArrowCfg::default());
                assert_eq!(lengths, vec![10.0, -20.0]);
            }
            _ => panic!("expected outline"),
        }
    }

    #[test]
    fn invalid_shape_flags_fail() {
        let cmd = Cmd::try_parse_from([
            "vizome", "outline", "--height1", "40", "--height2", "32", "5",
        ])
        .unwrap();
        let Action::Outline { shape, .. } = cmd.action else {
            panic!("expected outline");
        };
        assert!(designer_for(shape).is_err());
    }

    #[test]
    fn render_writes_svg_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("genes.csv");
        fs::write(
            &input,
            "start,stop,strand,color,label\n10,300,+,red,a\n400,350,-,green,b\n",
        )
        .unwrap();
        let out = dir.path().join("maps").join("genes.svg");
        let shape = ShapeArgs {
            alpha: 0.7,
            beta: 1.0,
            height1: 16.0,
            height2: 32.0,
        };
        render(&input, &out, shape, 30.0, None).unwrap();
        let svg = fs::read_to_string(&out).unwrap();
        assert_eq!(svg.matches("<polygon ").count(), 2);
        assert!(dir.path().join("maps").join("genes.provenance.json").exists());
    }
}
