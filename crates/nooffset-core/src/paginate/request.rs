use crate::{
    config::PaginationConfig,
    paginate::{Direction, OrderSpec, QueryContext, direction, effective_order},
    types::{PageSize, RecordId, SortOrder},
};

///
/// PaginationRequest
///
/// Resolved, immutable pagination inputs for one query evaluation.
/// `order` is the forward (caller-facing) order; fetch order is derived.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaginationRequest {
    direction: Direction,
    cursor_id: Option<RecordId>,
    order: OrderSpec,
    page_size: PageSize,
}

impl PaginationRequest {
    #[must_use]
    pub const fn new(
        direction: Direction,
        cursor_id: Option<RecordId>,
        order: OrderSpec,
        page_size: PageSize,
    ) -> Self {
        Self {
            direction,
            cursor_id,
            order,
            page_size,
        }
    }

    /// Resolve the request for `ctx`, or `None` when pagination does not apply.
    #[must_use]
    pub fn resolve(ctx: &QueryContext, config: &PaginationConfig) -> Option<Self> {
        if !direction::applies(ctx) {
            return None;
        }

        let direction = direction::direction(ctx);

        Some(Self::new(
            direction,
            direction::cursor_for(ctx, direction),
            effective_order(ctx, config),
            effective_page_size(ctx, config),
        ))
    }

    /// First-page request for `ctx`: forward, no cursor.
    #[must_use]
    pub fn first_page(ctx: &QueryContext, config: &PaginationConfig) -> Self {
        Self::new(
            Direction::Forward,
            None,
            effective_order(ctx, config),
            effective_page_size(ctx, config),
        )
    }

    // Drop the cursor and fall back to first-page semantics.
    #[must_use]
    pub(crate) fn into_first_page(self) -> Self {
        Self {
            direction: Direction::Forward,
            cursor_id: None,
            ..self
        }
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn cursor_id(&self) -> Option<RecordId> {
        self.cursor_id
    }

    #[must_use]
    pub const fn order(&self) -> &OrderSpec {
        &self.order
    }

    #[must_use]
    pub fn sort_field(&self) -> &str {
        &self.order.field
    }

    #[must_use]
    pub const fn sort_order(&self) -> SortOrder {
        self.order.order
    }

    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Order used for the fetch itself.
    #[must_use]
    pub fn fetch_order(&self) -> OrderSpec {
        self.order.for_direction(self.direction)
    }
}

// Requested size, else the configured default, capped by the policy max.
fn effective_page_size(ctx: &QueryContext, config: &PaginationConfig) -> PageSize {
    ctx.lookup(|options| options.page_size)
        .unwrap_or_else(|| config.default_page_size())
        .clamp_to(config.max_page_size())
}
