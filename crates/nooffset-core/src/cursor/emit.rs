use crate::{
    paginate::{Direction, PaginationRequest},
    response::Page,
    types::{RecordId, SortKey},
};

///
/// PageCursors
///
/// `next_cursor` is the last record of the forward-oriented page and
/// `prev_cursor` the first. Both are absent for an empty page.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PageCursors {
    pub next_cursor: Option<RecordId>,
    pub prev_cursor: Option<RecordId>,
}

///
/// NavLink
///
/// One navigation link as consumed by a link renderer.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NavLink {
    pub direction: Direction,
    pub cursor_id: RecordId,
}

///
/// Navigation
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Navigation {
    pub prev: Option<NavLink>,
    pub next: Option<NavLink>,
}

impl Navigation {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }

    /// Links in rendering order: previous, then next.
    pub fn links(&self) -> impl Iterator<Item = NavLink> {
        self.prev.into_iter().chain(self.next)
    }
}

/// Cursors derived from the first and last rows of a forward-oriented page.
#[must_use]
pub fn emit<R>(page: &Page<R>) -> PageCursors {
    PageCursors {
        next_cursor: page.last_key().map(SortKey::id),
        prev_cursor: page.first_key().map(SortKey::id),
    }
}

/// Navigation links for a page fetched under `request`.
///
/// A full page always offers the link away from the anchor, without probing
/// whether more rows exist; the following fetch coming back empty is the
/// terminal signal. The link back toward the anchor is offered whenever an
/// anchor was used.
#[must_use]
pub fn navigation<R>(page: &Page<R>, request: &PaginationRequest) -> Navigation {
    let cursors = emit(page);
    let (Some(prev_cursor), Some(next_cursor)) = (cursors.prev_cursor, cursors.next_cursor) else {
        return Navigation::default();
    };

    let full = page.len() >= request.page_size().as_usize();
    let anchored = request.cursor_id().is_some();
    let (offer_prev, offer_next) = match request.direction() {
        Direction::Forward => (anchored, full),
        Direction::Backward => (full, anchored),
    };

    Navigation {
        prev: offer_prev.then_some(NavLink {
            direction: Direction::Backward,
            cursor_id: prev_cursor,
        }),
        next: offer_next.then_some(NavLink {
            direction: Direction::Forward,
            cursor_id: next_cursor,
        }),
    }
}
