//! Field catalog.
//!
//! Every IJE field is described by a [`FieldDescriptor`]: its IJE field
//! number, its 1-based start offset and width inside the fixed-width record,
//! its key and a decode priority. [`FieldRegistry`] validates a catalog once
//! and exposes the two traversal orders the transcoder needs:
//!
//! - ordinal order (IJE field number) for encoding
//! - priority order, ties broken by ordinal, for decoding
//!
//! ```text
//! offset  width  key
//! ------  -----  ----------
//!      1      4  DOD_YR
//!      5      2  DSTATE
//!      7      6  FILENO
//!    ...
//! ```

use std::collections::HashMap;
use std::ops::Range;

use crate::RECORD_LEN;
use crate::error::{RegistryError, Result};

/// Layout and decode priority of one IJE field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// IJE field number.
    pub ordinal: u16,
    /// 1-based start offset.
    pub offset: usize,
    pub width: usize,
    pub key: &'static str,
    /// Human-readable contents.
    pub contents: &'static str,
    /// Lower values decode first.
    pub priority: u16,
}

impl FieldDescriptor {
    /// Descriptor with the default priority (1).
    pub const fn new(
        ordinal: u16,
        offset: usize,
        width: usize,
        key: &'static str,
        contents: &'static str,
    ) -> Self {
        Self {
            ordinal,
            offset,
            width,
            key,
            contents,
            priority: 1,
        }
    }

    pub const fn with_priority(mut self, priority: u16) -> Self {
        self.priority = priority;
        self
    }

    /// 0-based character range inside the record.
    pub fn range(&self) -> Range<usize> {
        let start = self.offset.saturating_sub(1);
        start..start + self.width
    }
}

/// A validated, immutable field catalog.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    descriptors: Vec<FieldDescriptor>,
    by_key: HashMap<&'static str, usize>,
    ordinal_order: Vec<usize>,
    decode_order: Vec<usize>,
}

impl FieldRegistry {
    /// Validate and index a catalog. Descriptor positions are preserved.
    pub fn new(descriptors: Vec<FieldDescriptor>) -> Result<Self> {
        Self::validate(&descriptors)?;

        let by_key = descriptors
            .iter()
            .enumerate()
            .map(|(index, descriptor)| (descriptor.key, index))
            .collect();

        let mut ordinal_order: Vec<usize> = (0..descriptors.len()).collect();
        ordinal_order.sort_by_key(|&index| descriptors[index].ordinal);

        let mut decode_order = ordinal_order.clone();
        decode_order.sort_by_key(|&index| descriptors[index].priority);

        Ok(Self {
            descriptors,
            by_key,
            ordinal_order,
            decode_order,
        })
    }

    /// Check widths, bounds, key uniqueness and range disjointness.
    pub fn validate(descriptors: &[FieldDescriptor]) -> Result<()> {
        let mut seen = HashMap::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if descriptor.width == 0 {
                return Err(RegistryError::ZeroWidth {
                    key: descriptor.key,
                });
            }
            if descriptor.offset == 0 || descriptor.range().end > RECORD_LEN {
                return Err(RegistryError::OutOfBounds {
                    key: descriptor.key,
                    offset: descriptor.offset,
                    width: descriptor.width,
                    record_len: RECORD_LEN,
                });
            }
            if seen.insert(descriptor.key, ()).is_some() {
                return Err(RegistryError::DuplicateKey {
                    key: descriptor.key,
                });
            }
        }

        let mut by_start: Vec<&FieldDescriptor> = descriptors.iter().collect();
        by_start.sort_by_key(|descriptor| descriptor.offset);
        for pair in by_start.windows(2) {
            let (first, second) = (pair[0].range(), pair[1].range());
            if second.start < first.end {
                return Err(RegistryError::Overlap {
                    first: pair[0].key,
                    first_start: first.start,
                    first_end: first.end,
                    second: pair[1].key,
                    second_start: second.start,
                    second_end: second.end,
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&FieldDescriptor> {
        self.position(key).map(|index| &self.descriptors[index])
    }

    /// Declaration index of a key.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Descriptors with their declaration index, by IJE field number.
    pub fn in_ordinal_order(&self) -> impl Iterator<Item = (usize, &FieldDescriptor)> {
        self.ordinal_order
            .iter()
            .map(|&index| (index, &self.descriptors[index]))
    }

    /// Descriptors with their declaration index, by priority then field number.
    pub fn in_decode_order(&self) -> impl Iterator<Item = (usize, &FieldDescriptor)> {
        self.decode_order
            .iter()
            .map(|&index| (index, &self.descriptors[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new(3, 11, 5, "CITY", "City").with_priority(3),
            FieldDescriptor::new(1, 1, 2, "STATE", "State"),
            FieldDescriptor::new(2, 3, 8, "COUNTY", "County").with_priority(2),
            FieldDescriptor::new(4, 16, 1, "FLAG", "Flag"),
        ]
    }

    #[test]
    fn ordinal_order_follows_field_numbers() {
        let registry = FieldRegistry::new(catalog()).expect("valid catalog");
        let keys: Vec<_> = registry.in_ordinal_order().map(|(_, d)| d.key).collect();
        assert_eq!(keys, ["STATE", "COUNTY", "CITY", "FLAG"]);
    }

    #[test]
    fn decode_order_is_stable_by_priority() {
        let registry = FieldRegistry::new(catalog()).expect("valid catalog");
        let keys: Vec<_> = registry.in_decode_order().map(|(_, d)| d.key).collect();
        assert_eq!(keys, ["STATE", "FLAG", "COUNTY", "CITY"]);
    }

    #[test]
    fn lookup_by_key_keeps_declaration_index() {
        let registry = FieldRegistry::new(catalog()).expect("valid catalog");
        assert_eq!(registry.position("CITY"), Some(0));
        assert_eq!(registry.get("COUNTY").map(|d| d.range()), Some(2..10));
        assert!(registry.get("MISSING").is_none());
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let catalog = vec![
            FieldDescriptor::new(1, 1, 4, "A", "A"),
            FieldDescriptor::new(2, 5, 1, "B", "B"),
        ];
        assert!(FieldRegistry::validate(&catalog).is_ok());
    }

    #[test]
    fn last_character_is_addressable() {
        let catalog = vec![FieldDescriptor::new(1, RECORD_LEN, 1, "LAST", "Last")];
        assert!(FieldRegistry::validate(&catalog).is_ok());
    }
}
