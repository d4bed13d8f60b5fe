use crate::{traits::Record, types::RecordId, value::SortValue};
use std::collections::BTreeMap;

///
/// Row
///
/// Loosely-typed record: an id plus named sortable fields.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Row {
    id: RecordId,
    fields: BTreeMap<String, SortValue>,
}

impl Row {
    #[must_use]
    pub fn new(id: impl Into<RecordId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field assignment.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<SortValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<SortValue>) {
        self.fields.insert(field.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&SortValue> {
        self.fields.get(field)
    }
}

impl Record for Row {
    fn id(&self) -> RecordId {
        self.id
    }

    fn field_value(&self, field: &str) -> Option<SortValue> {
        self.fields.get(field).cloned()
    }
}
