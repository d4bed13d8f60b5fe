//! Pagination tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect results.

use crate::{paginate::Direction, types::RecordId};

///
/// PaginationTraceSink
///

pub trait PaginationTraceSink: Send + Sync {
    fn on_event(&self, event: PaginationTraceEvent);
}

///
/// PaginationTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PaginationTraceEvent {
    Start {
        direction: Direction,
        cursor: Option<RecordId>,
        page_size: u32,
    },
    /// Forward and backward cursors were both supplied; backward was used.
    AmbiguousDirection {
        forward: RecordId,
        backward: RecordId,
    },
    /// The cursor did not resolve; the request fell back to the first page.
    CursorDegraded {
        cursor: RecordId,
    },
    Shape {
        direction: Direction,
        anchored: bool,
        limit: u32,
        pushed_down: bool,
    },
    Finish {
        rows: u64,
        next_cursor: Option<RecordId>,
        prev_cursor: Option<RecordId>,
    },
}
