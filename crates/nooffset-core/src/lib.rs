//! Keyset ("no-offset") pagination engine.
//!
//! Instead of `OFFSET n LIMIT m`, a page boundary is located by the sort key
//! of a cursor record and the query's predicate, ordering, and limit are
//! rewritten around it. Forward and backward navigation are both supported.
//!
//! The engine decides the logical query shape only. Record lookup and query
//! execution are host collaborators (`traits::RecordStore`,
//! `traits::QueryEngine`); `store::MemoryTable` and `sql` cover the common
//! in-memory and SQL cases.

pub mod codec;
pub mod config;
pub mod cursor;
pub mod error;
pub mod paginate;
pub mod predicate;
pub mod response;
pub mod sql;
pub mod store;
pub mod trace;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use error::Error;

///
/// Prelude
///
/// Domain vocabulary only; errors, codecs, and SQL helpers stay in their
/// modules.
///

pub mod prelude {
    pub use crate::{
        config::PaginationConfig,
        cursor::{NavLink, Navigation},
        paginate::{
            Direction, KeysetPaginator, OrderSpec, PaginationOptions, PaginationRequest,
            QueryContext, QueryKind, QueryShape,
        },
        predicate::Predicate,
        response::{Page, PagedLoad},
        traits::{QueryEngine, Record, RecordStore},
        types::{PageSize, RecordId, SortKey, SortOrder},
        value::SortValue,
    };
}
