use crate::{
    paginate::{OrderSpec, QueryShape},
    traits::{QueryEngine, Record, RecordStore},
    types::RecordId,
};
use std::{collections::BTreeMap, convert::Infallible};

///
/// MemoryTable
///
/// Id-keyed row set implementing both collaborator traits.
///

#[derive(Clone, Debug)]
pub struct MemoryTable<R> {
    rows: BTreeMap<RecordId, R>,
}

impl<R: Record> MemoryTable<R> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }

    /// Insert or replace one row, returning the replaced row.
    pub fn insert(&mut self, row: R) -> Option<R> {
        self.rows.insert(row.id(), row)
    }

    pub fn remove(&mut self, id: RecordId) -> Option<R> {
        self.rows.remove(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.rows.values()
    }
}

impl<R: Record> Default for MemoryTable<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> FromIterator<R> for MemoryTable<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().map(|row| (row.id(), row)).collect(),
        }
    }
}

impl<R: Record + Clone> RecordStore for MemoryTable<R> {
    type Record = R;
    type Error = Infallible;

    fn get_record(&self, id: RecordId) -> Result<Option<R>, Self::Error> {
        Ok(self.rows.get(&id).cloned())
    }
}

impl<R: Record + Clone> QueryEngine for MemoryTable<R> {
    type Record = R;
    type Error = Infallible;

    fn fetch(&self, shape: &QueryShape) -> Result<Vec<R>, Self::Error> {
        let mut rows: Vec<R> = self
            .rows
            .values()
            .filter(|row| shape.filter.eval(*row))
            .cloned()
            .collect();

        apply_order_bounded(&mut rows, &shape.order, shape.limit.as_usize());

        if let Some(outer) = shape.outer_order.as_ref() {
            rows.sort_by(|left, right| outer.compare(left, right));
        }

        Ok(rows)
    }
}

// Keep the smallest `keep_count` rows under `order`, then sort only that
// prefix. The order always ends in the unique id, so the result is
// deterministic.
fn apply_order_bounded<R: Record>(rows: &mut Vec<R>, order: &OrderSpec, keep_count: usize) {
    if keep_count == 0 {
        rows.clear();
        return;
    }

    if rows.len() > keep_count {
        rows.select_nth_unstable_by(keep_count - 1, |left, right| order.compare(left, right));
        rows.truncate(keep_count);
    }

    rows.sort_by(|left, right| order.compare(left, right));
}
