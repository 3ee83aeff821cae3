//! IJE mortality transcoder.
//!
//! Converts between the NCHS IJE mortality fixed-width layout (one line of
//! [`RECORD_LEN`] characters per death) and the structured
//! [`DeathRecord`](ije_model::DeathRecord).
//!
//! # Example
//!
//! ```
//! use ije_model::DeathRecord;
//! use ije_mortality::{IjeCodec, RECORD_LEN};
//!
//! let codec = IjeCodec::new()?;
//!
//! let mut record = DeathRecord::new();
//! record.family_name = Some("SMITH".to_string());
//! let line = codec.encode(&record);
//! assert_eq!(line.chars().count(), RECORD_LEN);
//!
//! let decoded = codec.decode(&line);
//! assert_eq!(decoded.family_name.as_deref(), Some("SMITH"));
//! # Ok::<(), ije_mortality::RegistryError>(())
//! ```
//!
//! Modules:
//!
//! - [`registry`]: field layout validation and traversal orders
//! - [`fields`]: the field table binding each field to a codec
//! - [`codec`]: value codecs
//! - [`engine`]: decode, encode and round-trip checks

pub mod codec;
pub mod engine;
mod error;
pub mod fields;
pub mod priority;
pub mod registry;

/// Length of one IJE mortality record, in characters.
pub const RECORD_LEN: usize = 5000;

pub use engine::{FieldDifference, IjeCodec};
pub use error::{RegistryError, Result};
pub use fields::{FIELDS, FieldSpec};
pub use priority::GeoLevel;
pub use registry::{FieldDescriptor, FieldRegistry};
