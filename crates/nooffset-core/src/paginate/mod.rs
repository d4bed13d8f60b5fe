//! Keyset pagination pipeline.
//!
//! `QueryContext -> PaginationRequest -> QueryShape -> Page`, one pure stage
//! at a time:
//!
//! 1. direction: does pagination apply, and which way
//! 2. order: effective forward order, reversed for backward fetches
//! 3. boundary: tuple comparison against the resolved anchor
//! 4. limit: row cap from the page size
//! 5. reorient: backward batches back into forward order
//!
//! Cursor resolution and emission live in `crate::cursor`; the two
//! collaborator calls are made only by `KeysetPaginator`.

pub mod boundary;
mod context;
pub mod direction;
pub mod limit;
mod order;
mod paginator;
mod reorient;
mod request;
mod shape;

#[cfg(test)]
mod tests;

pub use context::{PaginationOptions, QueryContext, QueryKind};
pub use direction::Direction;
pub use limit::Limit;
pub use order::{OrderSpec, effective_order};
pub use paginator::{KeysetPaginator, PreparedQuery};
pub use reorient::{ReorientMode, reorient};
pub use request::PaginationRequest;
pub use shape::{QueryShape, build_shape};
