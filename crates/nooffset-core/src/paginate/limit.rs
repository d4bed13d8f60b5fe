use crate::types::PageSize;

///
/// Limit
///
/// Row cap for one page fetch. No row count is ever requested alongside it.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Limit {
    rows: PageSize,
}

impl Limit {
    #[must_use]
    pub const fn rows(self) -> u32 {
        self.rows.get()
    }

    #[must_use]
    pub fn as_usize(self) -> usize {
        self.rows.as_usize()
    }
}

#[must_use]
pub const fn limit(page_size: PageSize) -> Limit {
    Limit { rows: page_size }
}
