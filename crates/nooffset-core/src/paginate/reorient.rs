use crate::{
    paginate::{Direction, OrderSpec},
    traits::Record,
};
use serde::{Deserialize, Serialize};

///
/// ReorientMode
///
/// Where backward pages are put back into forward-reading order.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReorientMode {
    /// Re-sort the fetched batch after it is returned.
    #[default]
    InProcess,
    /// Ask the query engine to wrap the fetch in an outer re-sort.
    PushDown,
}

/// Put a fetched batch into forward-reading order.
///
/// Forward batches pass through. Backward batches were fetched under the
/// reversed order; only that bounded batch is re-sorted under
/// `forward_order`, so any permutation of it yields the same sequence.
#[must_use]
pub fn reorient<R: Record>(
    direction: Direction,
    mut rows: Vec<R>,
    forward_order: &OrderSpec,
) -> Vec<R> {
    if direction == Direction::Backward {
        rows.sort_by(|left, right| forward_order.compare(left, right));
    }

    rows
}
