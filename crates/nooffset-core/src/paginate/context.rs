use crate::{
    predicate::Predicate,
    types::{PageSize, RecordId, SortOrder},
};

///
/// QueryKind
///
/// Role of a query within one request. Only the main query is paginated.
///

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum QueryKind {
    #[default]
    Main,
    Secondary,
    Admin,
}

impl QueryKind {
    #[must_use]
    pub const fn is_main(self) -> bool {
        matches!(self, Self::Main)
    }
}

///
/// PaginationOptions
///
/// Typed pagination fields. Used both for top-level navigation parameters
/// and for the pagination option a query carries itself.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PaginationOptions {
    pub sort_field: Option<String>,
    pub sort_order: Option<SortOrder>,
    pub page_size: Option<PageSize>,
    pub cursor_forward: Option<RecordId>,
    pub cursor_backward: Option<RecordId>,
}

impl PaginationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn sort_field(mut self, field: impl Into<String>) -> Self {
        self.sort_field = Some(field.into());
        self
    }

    #[must_use]
    pub const fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    #[must_use]
    pub const fn page_size(mut self, size: PageSize) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Continue forward after `id`.
    #[must_use]
    pub const fn after(mut self, id: RecordId) -> Self {
        self.cursor_forward = Some(id);
        self
    }

    /// Continue backward before `id`.
    #[must_use]
    pub const fn before(mut self, id: RecordId) -> Self {
        self.cursor_backward = Some(id);
        self
    }

    #[must_use]
    pub const fn has_cursor(&self) -> bool {
        self.cursor_forward.is_some() || self.cursor_backward.is_some()
    }
}

///
/// QueryContext
///
/// Everything the engine reads about one query evaluation. Passed explicitly
/// into every stage; nothing is read from ambient state.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct QueryContext {
    kind: QueryKind,
    params: PaginationOptions,
    options: Option<PaginationOptions>,
    filter: Predicate,
}

impl QueryContext {
    #[must_use]
    pub fn new(kind: QueryKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Context for the request's main query.
    #[must_use]
    pub fn main() -> Self {
        Self::new(QueryKind::Main)
    }

    /// Top-level navigation parameters taken from the request.
    #[must_use]
    pub fn with_params(mut self, params: PaginationOptions) -> Self {
        self.params = params;
        self
    }

    /// Pagination option carried by the query itself.
    #[must_use]
    pub fn with_options(mut self, options: PaginationOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Existing filter conditions of the host query.
    #[must_use]
    pub fn with_filter(mut self, filter: Predicate) -> Self {
        self.filter = filter;
        self
    }

    #[must_use]
    pub const fn kind(&self) -> QueryKind {
        self.kind
    }

    #[must_use]
    pub const fn params(&self) -> &PaginationOptions {
        &self.params
    }

    #[must_use]
    pub const fn options(&self) -> Option<&PaginationOptions> {
        self.options.as_ref()
    }

    #[must_use]
    pub const fn filter(&self) -> &Predicate {
        &self.filter
    }

    // Resolve one field: top-level params first, then the query's own option.
    pub(crate) fn lookup<T>(&self, field: impl Fn(&PaginationOptions) -> Option<T>) -> Option<T> {
        field(&self.params).or_else(|| self.options.as_ref().and_then(&field))
    }
}
