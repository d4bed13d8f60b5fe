use crate::{
    cursor::Anchor,
    paginate::OrderSpec,
    predicate::{KeysetPredicate, Predicate},
};

/// Keyset boundary for a fetch under `fetch_order`.
///
/// `None` on the first page. Otherwise `(field, tiebreak) OP anchor`, with
/// `<` for descending and `>` for ascending fetch order.
#[must_use]
pub fn boundary(anchor: Option<&Anchor>, fetch_order: &OrderSpec) -> Option<Predicate> {
    let anchor = anchor?;

    Some(Predicate::Keyset(KeysetPredicate {
        field: fetch_order.field.clone(),
        tiebreak: fetch_order.tiebreak.clone(),
        op: fetch_order.boundary_op(),
        anchor: anchor.key().clone(),
    }))
}

/// AND the boundary onto the host filter. The host filter is kept intact.
#[must_use]
pub fn combine(filter: &Predicate, boundary: Option<Predicate>) -> Predicate {
    match boundary {
        Some(boundary) => filter.clone().and_also(boundary),
        None => filter.clone(),
    }
}
