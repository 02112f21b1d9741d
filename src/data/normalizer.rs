//! Data Normalizer Module
//! Turns the raw indicator table into typed records with z-scored columns.
//!
//! The identifier and group-label columns are never transformed. The two raw
//! scatter-axis columns are rounded but keep their natural scale; every other
//! indicator is replaced by its z-score against the full column distribution.

use crate::config::DatasetConfig;
use crate::stats::{extent, round2, zscore_in_place};
use polars::prelude::*;
use rayon::prelude::*;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Dataset has no rows")]
    Empty,
}

/// One country's identifier, group label, and indicator values.
/// `f64::NAN` encodes a missing value.
#[derive(Debug, Clone)]
pub struct Record {
    pub name: String,
    pub group: String,
    pub values: HashMap<String, f64>,
}

/// A z-scored column and its axis label (unit suffix stripped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedColumn {
    pub name: String,
    pub display: String,
}

/// Immutable output of normalization: built once per load, read-only after.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Derived columns sorted by display name: the profile-chart domain.
    pub derived: Vec<DerivedColumn>,
    /// Scatter x axis (raw scale).
    pub raw_x: String,
    /// Scatter y axis (raw scale).
    pub raw_y: String,
    /// Global profile-chart scale: min/max over the full derived matrix.
    pub z_min: f64,
    pub z_max: f64,
}

/// Normalize the raw table into a [`Dataset`].
///
/// Malformed numeric cells degrade silently to missing and are excluded from
/// rendering; only structural problems (no rows, identity columns absent)
/// are errors.
pub fn normalize(df: &DataFrame, config: &DatasetConfig) -> Result<Dataset, NormalizeError> {
    if df.height() == 0 {
        return Err(NormalizeError::Empty);
    }
    let names = df
        .column(&config.identifier_column)
        .map_err(|_| NormalizeError::MissingColumn(config.identifier_column.clone()))?;
    let groups = df
        .column(&config.group_column)
        .map_err(|_| NormalizeError::MissingColumn(config.group_column.clone()))?;

    // Indicator columns in table order. The unnamed positional index and the
    // configured export artifacts are dropped here.
    let indicator_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .filter(|name| {
            !name.trim().is_empty()
                && !config.is_identity(name)
                && !config.dropped_columns.contains(name)
        })
        .collect();

    // Column-major coercion: cast to f64 and round to 2 decimals. Cells that
    // fail the cast come back as nulls and become missing.
    let mut columns: Vec<(String, Vec<f64>)> = Vec::with_capacity(indicator_names.len());
    for name in &indicator_names {
        let cast = df.column(name)?.cast(&DataType::Float64)?;
        let ca = cast.f64()?;
        let values: Vec<f64> = (0..df.height())
            .map(|i| ca.get(i).map(round2).unwrap_or(f64::NAN))
            .collect();
        columns.push((name.clone(), values));
    }

    // Z-score everything except the two raw scatter axes.
    columns
        .par_iter_mut()
        .filter(|(name, _)| !config.is_raw(name))
        .for_each(|(_, values)| zscore_in_place(values));

    // Profile-chart scale over the full derived matrix.
    let (z_min, z_max) = extent(
        columns
            .iter()
            .filter(|(name, _)| !config.is_raw(name))
            .flat_map(|(_, values)| values.iter().copied()),
    )
    .unwrap_or((f64::NAN, f64::NAN));

    // Row-major assembly. Rows without an identifier can never be labeled or
    // hovered, so they are dropped; a missing group label is kept and falls
    // back to the neutral color downstream.
    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let name = match names.get(i) {
            Ok(v) if !v.is_null() => v.to_string().trim_matches('"').to_string(),
            _ => {
                log::debug!("skipping row {i}: no identifier");
                continue;
            }
        };
        let group = match groups.get(i) {
            Ok(v) if !v.is_null() => v.to_string().trim_matches('"').to_string(),
            _ => String::new(),
        };
        let mut values = HashMap::with_capacity(columns.len());
        for (column, column_values) in &columns {
            values.insert(column.clone(), column_values[i]);
        }
        records.push(Record {
            name,
            group,
            values,
        });
    }

    let mut derived: Vec<DerivedColumn> = indicator_names
        .iter()
        .filter(|name| !config.is_raw(name))
        .map(|name| DerivedColumn {
            name: name.clone(),
            display: strip_units(name),
        })
        .collect();
    derived.sort_by(|a, b| a.display.cmp(&b.display));

    log::info!(
        "normalized {} records, {} derived columns, z range [{z_min:.2}, {z_max:.2}]",
        records.len(),
        derived.len()
    );

    Ok(Dataset {
        records,
        derived,
        raw_x: config.raw_x_column.clone(),
        raw_y: config.raw_y_column.clone(),
        z_min,
        z_max,
    })
}

/// Strip a parenthesized unit suffix: "GDP (current US$)" -> "GDP".
pub fn strip_units(column: &str) -> String {
    match column.split_once('(') {
        Some((head, _)) => head.trim().to_string(),
        None => column.trim().to_string(),
    }
}
