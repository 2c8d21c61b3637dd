//! Conversion of SNB data generator shards into LGraph bulk-load CSV files.
//!
//! Each prefix is converted independently by a [`Converter`]: its shards are
//! read in file name order, fields are re-quoted for comma-delimited output,
//! and the prefix's [`snb_model::Derivation`] decides which synthetic columns
//! or extra edge files are produced.

pub mod converter;
pub mod derive;
pub mod error;
pub mod quote;
pub mod writer;

pub use converter::{ConvertConfig, Converter};
pub use derive::{DerivedRow, derived_row, extend_primary};
pub use error::{ConvertError, Result};
pub use quote::{needs_quoting, quote_field, quote_fields};
pub use writer::OutputFile;
