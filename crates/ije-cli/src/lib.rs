//! CLI library components for the IJE transcoder.

pub mod logging;
pub mod records;
