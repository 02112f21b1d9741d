//! Stats module - numeric building blocks for normalization

mod calculator;

pub use calculator::{extent, mean, round2, sample_std, zscore_in_place};
