use std::{cmp::Ordering, fmt};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

///
/// SortValue
///
/// Comparable scalar read from a record's primary sort field.
///
/// Null → the field is absent on the record; sorts before every other value.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum SortValue {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Text(String),
    Timestamp(OffsetDateTime),
}

impl SortValue {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Parse an RFC 3339 timestamp, as stored by SQL hosts in text columns.
    #[must_use]
    pub fn timestamp_rfc3339(raw: &str) -> Option<Self> {
        OffsetDateTime::parse(raw.trim(), &Rfc3339)
            .ok()
            .map(Self::Timestamp)
    }

    // Variant rank for mixed-variant comparisons.
    const fn canonical_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) => 2,
            Self::Uint(_) => 3,
            Self::Text(_) => 4,
            Self::Timestamp(_) => 5,
        }
    }
}

impl fmt::Display for SortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Uint(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "'{value}'"),
            Self::Timestamp(value) => match value.format(&Rfc3339) {
                Ok(text) => f.write_str(&text),
                Err(_) => write!(f, "{value}"),
            },
        }
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for SortValue {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<OffsetDateTime> for SortValue {
    fn from(value: OffsetDateTime) -> Self {
        Self::Timestamp(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Total canonical comparator used by sort keys, predicates, and reorientation.
///
/// Ordering rules:
/// 1. Canonical variant rank
/// 2. Variant-specific comparison for same-ranked values
///
/// Mixed-variant comparisons are rank-only and must remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &SortValue, right: &SortValue) -> Ordering {
    let rank = left.canonical_rank().cmp(&right.canonical_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    match (left, right) {
        (SortValue::Bool(a), SortValue::Bool(b)) => a.cmp(b),
        (SortValue::Int(a), SortValue::Int(b)) => a.cmp(b),
        (SortValue::Uint(a), SortValue::Uint(b)) => a.cmp(b),
        (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
        (SortValue::Timestamp(a), SortValue::Timestamp(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

///
/// TESTS
///
