//! Collaborator seams.
//!
//! The engine decides the logical query shape only. Loading records and
//! executing shapes belong to the host through these traits.

use crate::{
    paginate::QueryShape,
    types::{RecordId, SortKey},
    value::SortValue,
};

///
/// Record
///
/// A row the engine can key. `field_value` returning `None` reads as
/// `SortValue::Null`.
///

pub trait Record {
    fn id(&self) -> RecordId;

    fn field_value(&self, field: &str) -> Option<SortValue>;

    /// Composite key of this record under `field`.
    fn sort_key(&self, field: &str) -> SortKey {
        SortKey::new(
            self.field_value(field).unwrap_or(SortValue::Null),
            self.id(),
        )
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn id(&self) -> RecordId {
        (**self).id()
    }

    fn field_value(&self, field: &str) -> Option<SortValue> {
        (**self).field_value(field)
    }
}

///
/// RecordStore
///
/// Point lookup used to resolve cursors into anchors.
///

pub trait RecordStore {
    type Record: Record;
    type Error;

    /// Load one record by id. `Ok(None)` means the id does not resolve.
    fn get_record(&self, id: RecordId) -> Result<Option<Self::Record>, Self::Error>;
}

///
/// QueryEngine
///
/// Executes a `QueryShape` and returns rows in the shape's order.
/// Implementations must honour `filter`, `order`, and `limit`; `outer_order`
/// is set only when reorientation is pushed down.
///

pub trait QueryEngine {
    type Record: Record;
    type Error;

    fn fetch(&self, shape: &QueryShape) -> Result<Vec<Self::Record>, Self::Error>;
}
