//! Module: types
//! Responsibility: identifier, key, order, and page-size vocabulary shared by
//! every pagination stage.
//! Does not own: cursor resolution or query-shape construction.

use crate::{
    codec::cursor::{CursorDecodeError, decode_cursor, encode_cursor},
    error::RequestError,
    value::{SortValue, canonical_cmp},
};
use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, num::NonZeroU32, str::FromStr};

///
/// RecordId
///
/// Unique, strictly totally-ordered record identifier.
/// Doubles as the tiebreak component of every `SortKey`.
///

#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    FromStr,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct RecordId(u64);

impl RecordId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Encode this id as an opaque hex cursor token.
    #[must_use]
    pub fn to_token(self) -> String {
        encode_cursor(&self.0.to_be_bytes())
    }

    /// Decode an opaque hex cursor token produced by `to_token`.
    pub fn from_token(token: &str) -> Result<Self, CursorDecodeError> {
        let bytes = decode_cursor(token)?;
        let raw: [u8; 8] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| CursorDecodeError::WidthMismatch {
                expected: 8,
                found: bytes.len(),
            })?;

        Ok(Self(u64::from_be_bytes(raw)))
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

///
/// SortKey
///
/// Composite `(primary value, unique id)` key. Ordering is lexicographic, so
/// records sharing a primary value are still strictly ordered by id.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SortKey {
    value: SortValue,
    id: RecordId,
}

impl SortKey {
    #[must_use]
    pub const fn new(value: SortValue, id: RecordId) -> Self {
        Self { value, id }
    }

    #[must_use]
    pub const fn value(&self) -> &SortValue {
        &self.value
    }

    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical_cmp(&self.value, &other.value).then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

///
/// SortOrder
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[display("asc")]
    Asc,
    #[default]
    #[display("desc")]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Apply this order to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = RequestError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();

        if token.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(RequestError::InvalidSortOrder {
                token: token.to_string(),
            })
        }
    }
}

///
/// PageSize
///
/// Validated, strictly positive page size.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PageSize(NonZeroU32);

impl PageSize {
    pub const MIN: Self = Self(NonZeroU32::MIN);

    pub fn new(size: u32) -> Result<Self, RequestError> {
        NonZeroU32::new(size)
            .map(Self)
            .ok_or(RequestError::InvalidPageSize { value: 0 })
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Clamp this size to an optional policy cap.
    #[must_use]
    pub fn clamp_to(self, max: Option<Self>) -> Self {
        match max {
            Some(max) if max < self => max,
            _ => self,
        }
    }

    /// Page size in usize-domain for row-count comparisons.
    #[must_use]
    pub fn as_usize(self) -> usize {
        usize::try_from(self.get()).unwrap_or(usize::MAX)
    }
}

impl TryFrom<i64> for PageSize {
    type Error = RequestError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or(RequestError::InvalidPageSize { value })
    }
}

/// Whether `name` is a plain or dot-qualified field identifier
/// (`[A-Za-z_][A-Za-z0-9_.]*`). Field names reach SQL text, so every
/// caller-supplied name is checked against this before use.
#[must_use]
pub fn is_valid_field_name(name: &str) -> bool {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '.')
}

///
/// TESTS
///
