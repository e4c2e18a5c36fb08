//! Feature tables: delimited text with `start`, `stop`, `strand` (or `fr`)
//! and optional `color`, `label` columns.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use vizome::prepare::{Feature, Strand};

const DEFAULT_COLOR: &str = "black";

/// Guess the separator from the header line: tab, then semicolon, else comma.
pub fn sniff_separator(path: &Path) -> Result<u8> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut header = String::new();
    BufReader::new(file)
        .read_line(&mut header)
        .with_context(|| format!("reading header of {}", path.display()))?;
    let sep = if header.contains('\t') {
        b'\t'
    } else if header.contains(';') && !header.contains(',') {
        b';'
    } else {
        b','
    };
    Ok(sep)
}

/// Read every row of the table into a `Feature`.
pub fn read_features(path: &Path, separator: u8) -> Result<Vec<Feature>> {
    let df = LazyCsvReader::new(path)
        .with_separator(separator)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("scanning {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "feature_table_shape");
    features_from_frame(&df)
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)
        .with_context(|| format!("column {name:?} is not numeric"))?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("row {row}: empty {name:?}")))
        .collect()
}

fn str_column(df: &DataFrame, name: &str) -> Result<Option<Vec<Option<String>>>> {
    let Ok(column) = df.column(name) else {
        return Ok(None);
    };
    let series = column
        .cast(&DataType::String)
        .with_context(|| format!("column {name:?} as text"))?;
    let values = series
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect();
    Ok(Some(values))
}

/// Build features from an already loaded frame.
pub fn features_from_frame(df: &DataFrame) -> Result<Vec<Feature>> {
    let starts = f64_column(df, "start")?;
    let stops = f64_column(df, "stop")?;
    let Some(strands) = str_column(df, "strand")?.or(str_column(df, "fr")?) else {
        bail!("missing column \"strand\" (or \"fr\")");
    };
    let colors = str_column(df, "color")?;
    let labels = str_column(df, "label")?;

    let mut features = Vec::with_capacity(starts.len());
    for (row, ((start, stop), strand)) in starts.into_iter().zip(stops).zip(strands).enumerate() {
        let token = strand.with_context(|| format!("row {row}: empty strand"))?;
        let strand = Strand::parse(&token).with_context(|| format!("row {row}"))?;
        let pick = |col: &Option<Vec<Option<String>>>| {
            col.as_ref().and_then(|c| c[row].clone())
        };
        features.push(Feature {
            start,
            stop,
            strand,
            color: pick(&colors).unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            label: pick(&labels).unwrap_or_default(),
        });
    }
    Ok(features)
}
