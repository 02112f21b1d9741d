//! Data module - dataset acquisition and normalization

mod fetcher;
mod normalizer;

pub use fetcher::{fetch, DataSource, FetchError};
pub use normalizer::{normalize, Dataset, DerivedColumn, NormalizeError, Record};
