//! FILENAME: core/pivot-engine/src/lib.rs
//! Pivot subsystem for the movies dashboard.
//!
//! This crate reshapes filtered records into a year x genre matrix and back.
//! It depends on `engine` only for the shared record and filter types.
//!
//! Layers:
//! - `definition`: Serializable configuration (what the pivot IS)
//! - `engine`: Calculation engine (HOW we aggregate)
//! - `matrix`: Dense output (WHAT we display in the table)
//! - `melt`: Long-form output (WHAT we plot)

pub mod definition;
pub mod engine;
pub mod matrix;
pub mod melt;

pub use definition::*;
pub use matrix::*;
pub use melt::{group_series, melt, LongRow, Series};
pub use self::engine::{calculate_pivot, PivotCalculator};
