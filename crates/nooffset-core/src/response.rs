//! Module: response
//! Responsibility: page payloads returned by keyset execution.
//! Does not own: query shaping, cursor resolution, or link rendering.

use crate::{
    cursor::{Navigation, PageCursors},
    paginate::PaginationRequest,
    traits::Record,
    types::SortKey,
};

///
/// Page
///
/// Records in forward-reading order plus the keys of the first and last
/// record. Built fresh per fetch and never persisted.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page<R> {
    records: Vec<R>,
    first_key: Option<SortKey>,
    last_key: Option<SortKey>,
}

impl<R: Record> Page<R> {
    /// Build a page from forward-oriented records keyed by `sort_field`.
    #[must_use]
    pub fn new(records: Vec<R>, sort_field: &str) -> Self {
        let first_key = records.first().map(|record| record.sort_key(sort_field));
        let last_key = records.last().map(|record| record.sort_key(sort_field));

        Self {
            records,
            first_key,
            last_key,
        }
    }
}

impl<R> Page<R> {
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    #[must_use]
    pub const fn first_key(&self) -> Option<&SortKey> {
        self.first_key.as_ref()
    }

    #[must_use]
    pub const fn last_key(&self) -> Option<&SortKey> {
        self.last_key.as_ref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<R> {
        self.records
    }
}

///
/// PagedLoad
///
/// One executed keyset page with its cursors and navigation links.
/// `request` is the request actually executed, after any cursor fallback.
///

#[derive(Clone, Debug)]
pub struct PagedLoad<R> {
    page: Page<R>,
    cursors: PageCursors,
    navigation: Navigation,
    request: PaginationRequest,
}

impl<R> PagedLoad<R> {
    #[must_use]
    pub const fn new(
        page: Page<R>,
        cursors: PageCursors,
        navigation: Navigation,
        request: PaginationRequest,
    ) -> Self {
        Self {
            page,
            cursors,
            navigation,
            request,
        }
    }

    #[must_use]
    pub const fn page(&self) -> &Page<R> {
        &self.page
    }

    #[must_use]
    pub const fn cursors(&self) -> PageCursors {
        self.cursors
    }

    #[must_use]
    pub const fn navigation(&self) -> Navigation {
        self.navigation
    }

    #[must_use]
    pub const fn request(&self) -> &PaginationRequest {
        &self.request
    }

    /// Consume this payload and return `(page, navigation)`.
    #[must_use]
    pub fn into_parts(self) -> (Page<R>, Navigation) {
        (self.page, self.navigation)
    }
}
