//! Structured death record model.
//!
//! This crate holds the property bag that the IJE transcoder reads from and
//! writes to. It is deliberately free of behavior beyond typed access:
//!
//! - [`DeathRecord`]: the record itself (serde, camelCase JSON)
//! - [`CodedValue`] / [`CodedEntry`]: coded observations and repeated
//!   `(display, code)` answers
//! - [`AddressMap`]: composed address maps (`addressState`, `addressCity`, ...)
//! - [`property`]: typed handles naming each record property

pub mod address;
pub mod coded;
pub mod property;
pub mod record;

pub use address::AddressMap;
pub use coded::{CodedEntry, CodedValue};
pub use property::{
    AddressProperty, CodedProperty, DateProperty, FlagProperty, NameProperty, TextProperty,
};
pub use record::{AgeAtDeath, CAUSE_OF_DEATH_LINES, CauseOfDeath, DeathRecord};
