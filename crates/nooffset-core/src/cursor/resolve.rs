use crate::{
    traits::{Record, RecordStore},
    types::{RecordId, SortKey},
    value::SortValue,
};
use thiserror::Error as ThisError;

///
/// Anchor
///
/// Sort key of the cursor record, read under the currently effective sort
/// field.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Anchor {
    key: SortKey,
}

impl Anchor {
    #[must_use]
    pub const fn new(key: SortKey) -> Self {
        Self { key }
    }

    #[must_use]
    pub const fn key(&self) -> &SortKey {
        &self.key
    }

    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.key.id()
    }

    #[must_use]
    pub const fn value(&self) -> &SortValue {
        self.key.value()
    }
}

///
/// CursorResolveError
///

#[derive(Debug, ThisError)]
pub enum CursorResolveError<E> {
    /// The cursor id does not resolve to a record.
    #[error("cursor record {id} not found")]
    NotFound { id: RecordId },

    /// The record store itself failed.
    #[error("record store failed while resolving cursor")]
    Store(E),
}

/// Load the cursor record and key it by `sort_field`.
///
/// The key is read from the record as it is now, so a sort field chosen
/// after the cursor was issued still yields a consistent boundary.
pub fn resolve<S: RecordStore>(
    store: &S,
    cursor_id: RecordId,
    sort_field: &str,
) -> Result<Anchor, CursorResolveError<S::Error>> {
    let record = store
        .get_record(cursor_id)
        .map_err(CursorResolveError::Store)?
        .ok_or(CursorResolveError::NotFound { id: cursor_id })?;

    Ok(Anchor::new(record.sort_key(sort_field)))
}
