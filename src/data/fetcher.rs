//! CSV Data Fetcher Module
//! Acquires the indicator dataset over HTTP or from a local file using Polars.

use polars::prelude::*;
use std::io::Cursor;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to download CSV: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(String),
    Local(PathBuf),
}

impl DataSource {
    pub fn describe(&self) -> String {
        match self {
            DataSource::Remote(url) => url.clone(),
            DataSource::Local(path) => path.display().to_string(),
        }
    }
}

/// Fetch and parse the dataset. Cells that fail schema inference are kept as
/// nulls rather than failing the load; the normalizer treats them as missing.
pub fn fetch(source: &DataSource) -> Result<DataFrame, FetchError> {
    match source {
        DataSource::Remote(url) => {
            log::info!("downloading dataset from {url}");
            let body = reqwest::blocking::get(url)?.error_for_status()?.bytes()?;
            read_csv_bytes(body.to_vec())
        }
        DataSource::Local(path) => {
            log::info!("reading dataset from {}", path.display());
            let df = LazyCsvReader::new(path.as_path())
                .with_infer_schema_length(Some(10000))
                .with_ignore_errors(true)
                .finish()?
                .collect()?;
            Ok(df)
        }
    }
}

fn read_csv_bytes(bytes: Vec<u8>) -> Result<DataFrame, FetchError> {
    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;
    Ok(df)
}
