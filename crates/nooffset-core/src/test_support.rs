use crate::{
    config::PaginationConfig,
    paginate::KeysetPaginator,
    store::{MemoryTable, Row},
    trace::{PaginationTraceEvent, PaginationTraceSink},
    types::PageSize,
    value::SortValue,
};
use std::sync::Mutex;
use time::{Date, Month};

pub(crate) const POST_DATE: &str = "post_date";

/// Midnight UTC on 2024-01-`day`.
pub(crate) fn jan(day: u8) -> SortValue {
    Date::from_calendar_date(2024, Month::January, day)
        .expect("fixture date should be valid")
        .midnight()
        .assume_utc()
        .into()
}

pub(crate) fn post(id: u64, day: u8) -> Row {
    Row::new(id).with(POST_DATE, jan(day))
}

/// `[(01-03, 9), (01-02, 7), (01-02, 5), (01-01, 3)]`: two posts share a date.
pub(crate) fn tied_posts() -> MemoryTable<Row> {
    [post(9, 3), post(7, 2), post(5, 2), post(3, 1)]
        .into_iter()
        .collect()
}

pub(crate) fn page_size(size: u32) -> PageSize {
    PageSize::new(size).expect("fixture page size should be positive")
}

pub(crate) fn paginator(size: u32) -> KeysetPaginator {
    KeysetPaginator::new(PaginationConfig {
        page_size: size,
        ..PaginationConfig::default()
    })
}

pub(crate) fn ids<'a>(rows: impl IntoIterator<Item = &'a Row>) -> Vec<u64> {
    rows.into_iter()
        .map(|row| crate::traits::Record::id(row).get())
        .collect()
}

///
/// RecordingSink
///

pub(crate) struct RecordingSink {
    events: Mutex<Vec<PaginationTraceEvent>>,
}

impl RecordingSink {
    pub(crate) const fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn take(&self) -> Vec<PaginationTraceEvent> {
        std::mem::take(&mut *self.events.lock().expect("sink lock poisoned"))
    }
}

impl PaginationTraceSink for RecordingSink {
    fn on_event(&self, event: PaginationTraceEvent) {
        self.events
            .lock()
            .expect("sink lock poisoned")
            .push(event);
    }
}
