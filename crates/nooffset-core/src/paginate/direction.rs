use crate::{paginate::QueryContext, types::RecordId};
use serde::{Deserialize, Serialize};

///
/// Direction
///
/// Navigation direction relative to the cursor record.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Whether keyset pagination rewrites this query at all.
///
/// Only the main query qualifies, and only when a forward or backward cursor
/// is present in the request params or the query's own option.
#[must_use]
pub fn applies(ctx: &QueryContext) -> bool {
    ctx.kind().is_main() && (forward_cursor(ctx).is_some() || backward_cursor(ctx).is_some())
}

/// Requested direction. Backward wins when both cursors are present.
#[must_use]
pub fn direction(ctx: &QueryContext) -> Direction {
    if backward_cursor(ctx).is_some() {
        Direction::Backward
    } else {
        Direction::Forward
    }
}

/// Cursor attached to `direction`, if any.
#[must_use]
pub fn cursor_for(ctx: &QueryContext, direction: Direction) -> Option<RecordId> {
    match direction {
        Direction::Forward => forward_cursor(ctx),
        Direction::Backward => backward_cursor(ctx),
    }
}

/// Both cursors present; resolved as backward.
#[must_use]
pub fn is_ambiguous(ctx: &QueryContext) -> bool {
    forward_cursor(ctx).is_some() && backward_cursor(ctx).is_some()
}

fn forward_cursor(ctx: &QueryContext) -> Option<RecordId> {
    ctx.lookup(|options| options.cursor_forward)
}

fn backward_cursor(ctx: &QueryContext) -> Option<RecordId> {
    ctx.lookup(|options| options.cursor_backward)
}
