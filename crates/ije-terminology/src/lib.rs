//! Terminology for IJE mortality records.
//!
//! - [`code_table`]: short-code ↔ coded-value tables (manner of death,
//!   marital status, disposition, ...)
//! - [`race`]: CDC race categories and their literal/exclusion rules
//! - [`ethnicity`]: Hispanic origin concepts
//! - [`geo`]: the [`GeoResolver`] trait and its table-backed implementation
//!
//! Everything here is read-only after initialization and safe to share
//! across threads.

pub mod code_table;
mod error;
pub mod ethnicity;
pub mod geo;
mod geo_data;
pub mod race;

pub use code_table::{CodeTable, CodeTableEntry};
pub use error::{Result, TerminologyError};
pub use geo::{CountyEntry, GeoEntry, GeoResolver, GeoTable, PlaceEntry, StaticGeoResolver};
pub use race::RaceCategory;
