use crate::{
    cursor::Anchor,
    paginate::{Limit, OrderSpec, PaginationRequest, ReorientMode, boundary, limit},
    predicate::Predicate,
};

///
/// QueryShape
///
/// Logical query handed to the query engine: filter, order, limit, and an
/// optional outer re-sort for pushed-down reorientation.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueryShape {
    pub filter: Predicate,
    pub order: OrderSpec,
    pub limit: Limit,
    pub outer_order: Option<OrderSpec>,
}

/// Build the query shape for one resolved request.
///
/// Stages run in a fixed order: fetch order, boundary, filter conjunction,
/// limit, outer order.
#[must_use]
pub fn build_shape(
    request: &PaginationRequest,
    anchor: Option<&Anchor>,
    filter: &Predicate,
    mode: ReorientMode,
) -> QueryShape {
    let order = request.fetch_order();
    let boundary = boundary::boundary(anchor, &order);
    let filter = boundary::combine(filter, boundary);
    let limit = limit::limit(request.page_size());
    let outer_order = (mode == ReorientMode::PushDown && order != *request.order())
        .then(|| request.order().clone());

    QueryShape {
        filter,
        order,
        limit,
        outer_order,
    }
}
