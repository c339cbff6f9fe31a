//! datalens core - shared types for the data explorer
//!
//! This crate provides the fundamental types that all other datalens crates
//! depend on:
//!
//! - `Value` - a dynamically typed scalar cell
//! - `Table` - an ordered set of rows sharing one column list
//! - `ColumnIndex` - case-insensitive column name resolution
//! - `ColumnType` - the inferred type of a column
//! - `DatalensError` - the error taxonomy shared by the engines

mod error;
mod table;
mod types;

pub use error::*;
pub use table::*;
pub use types::*;
