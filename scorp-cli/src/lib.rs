//! Terminal front end for the S-Corp scenario engine: data file loading,
//! logging setup and plain-text reports.

pub mod data_file;
pub mod logging;
pub mod report;
pub mod utils;
pub mod what_if;

pub use data_file::{DataFile, DataFileError, load_rates};
