//! Filialen Converter - Convert a branch directory XLSX to CSV.
//!
//! This crate reads a single-sheet branch/store directory workbook and
//! writes a flat comma-separated file in the fixed 11-column schema the
//! point-of-sale import expects. The only non-trivial transformation is
//! splitting the combined "street + house number" field into its two
//! components.
//!
//! # Example
//!
//! ```
//! use filialen_converter::address::split_address;
//!
//! let tokenized = split_address("Am Markt 3-5");
//! assert_eq!(tokenized.street, "Am Markt");
//! assert_eq!(tokenized.house_number, "3-5");
//! ```
//!
//! # Architecture
//!
//! - [`address`]: Street / house-number tokenizer
//! - [`mapping`]: Input record to output record mapping
//! - [`pipeline`]: Source -> mapper -> sink orchestration
//! - [`workbook`]: XLSX tabular reader (calamine)
//! - [`writer`]: CSV record writer
//! - [`config`]: Fixed schema values and output-name derivation
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod address;
pub mod cli;
pub mod config;
pub mod error;
pub mod mapping;
pub mod pipeline;
pub mod workbook;
pub mod writer;

// Re-export commonly used items
pub use address::{split_address, TokenizedAddress};
pub use error::{ConverterError, Result};
pub use pipeline::{ConversionReport, RecordSink, TableSource};
