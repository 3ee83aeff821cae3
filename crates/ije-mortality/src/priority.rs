//! Decode ordering for geographic field families.
//!
//! Coded counties are only meaningful inside a state, and coded places
//! inside a state and county. [`GeoLevel`] spells out that dependency so
//! field priorities can be derived from it rather than chosen by hand.

/// Level of a geographic component inside one address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeoLevel {
    State,
    County,
    City,
}

impl GeoLevel {
    /// Decode priority for fields at this level.
    pub const fn priority(self) -> u16 {
        match self {
            Self::State => 1,
            Self::County => 2,
            Self::City => 3,
        }
    }

    /// Levels that must already be decoded before this one.
    pub const fn parents(self) -> &'static [GeoLevel] {
        match self {
            Self::State => &[],
            Self::County => &[Self::State],
            Self::City => &[Self::State, Self::County],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::State => "state",
            Self::County => "county",
            Self::City => "city",
        }
    }
}
