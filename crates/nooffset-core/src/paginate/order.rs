use crate::{
    config::PaginationConfig,
    paginate::{Direction, QueryContext},
    predicate::CompareOp,
    traits::Record,
    types::SortOrder,
};
use std::cmp::Ordering;

///
/// OrderSpec
///
/// Two-column ordering: the primary sort field followed by the unique
/// tiebreak column, both under the same order.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct OrderSpec {
    pub field: String,
    pub tiebreak: String,
    pub order: SortOrder,
}

impl OrderSpec {
    #[must_use]
    pub fn new(field: impl Into<String>, tiebreak: impl Into<String>, order: SortOrder) -> Self {
        Self {
            field: field.into(),
            tiebreak: tiebreak.into(),
            order,
        }
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            order: self.order.reversed(),
            ..self.clone()
        }
    }

    /// Ordering actually used to fetch rows in `direction`.
    ///
    /// Backward fetches run under the reversed order so the limit selects
    /// the rows immediately preceding the anchor.
    #[must_use]
    pub fn for_direction(&self, direction: Direction) -> Self {
        match direction {
            Direction::Forward => self.clone(),
            Direction::Backward => self.reversed(),
        }
    }

    /// Boundary operator for rows strictly after the anchor under this order.
    #[must_use]
    pub const fn boundary_op(&self) -> CompareOp {
        match self.order {
            SortOrder::Asc => CompareOp::Gt,
            SortOrder::Desc => CompareOp::Lt,
        }
    }

    /// Column list in clause order.
    #[must_use]
    pub fn columns(&self) -> [(&str, SortOrder); 2] {
        [
            (self.field.as_str(), self.order),
            (self.tiebreak.as_str(), self.order),
        ]
    }

    /// Compare two records under `(field, id)` in this order.
    pub fn compare<R: Record>(&self, left: &R, right: &R) -> Ordering {
        self.order
            .apply(left.sort_key(&self.field).cmp(&right.sort_key(&self.field)))
    }
}

/// Effective forward ordering for this query.
///
/// The sort field falls back to the configured natural field when absent or
/// not sortable, and the order falls back to the configured default
/// (descending unless overridden).
#[must_use]
pub fn effective_order(ctx: &QueryContext, config: &PaginationConfig) -> OrderSpec {
    let field = ctx
        .lookup(|options| options.sort_field.clone())
        .filter(|field| config.is_sortable(field))
        .unwrap_or_else(|| config.default_sort_field.clone());
    let order = ctx
        .lookup(|options| options.sort_order)
        .unwrap_or(config.default_sort_order);

    OrderSpec::new(field, config.tiebreak_field.clone(), order)
}
