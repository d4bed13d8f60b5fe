use crate::{
    config::PaginationConfig,
    cursor::{self, Anchor, CursorResolveError},
    error::ConfigError,
    paginate::{
        Direction, PaginationRequest, QueryContext, QueryShape, build_shape, direction, reorient,
    },
    response::{Page, PagedLoad},
    trace::{PaginationTraceEvent, PaginationTraceSink},
    traits::{QueryEngine, Record, RecordStore},
};

///
/// PreparedQuery
///
/// A request whose cursor has been resolved, plus the shape to execute.
/// `request` reflects any fallback to first-page semantics.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PreparedQuery {
    request: PaginationRequest,
    anchor: Option<Anchor>,
    shape: QueryShape,
}

impl PreparedQuery {
    #[must_use]
    pub const fn request(&self) -> &PaginationRequest {
        &self.request
    }

    #[must_use]
    pub const fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    #[must_use]
    pub const fn shape(&self) -> &QueryShape {
        &self.shape
    }
}

///
/// KeysetPaginator
///
/// Stateless keyset pagination engine. Holds configuration and optional
/// diagnostics only; every call reads its inputs from the `QueryContext`.
///

#[derive(Clone)]
pub struct KeysetPaginator {
    config: PaginationConfig,
    debug: bool,
    trace: Option<&'static dyn PaginationTraceSink>,
}

impl KeysetPaginator {
    /// Build a paginator over an already-validated configuration.
    #[must_use]
    pub const fn new(config: PaginationConfig) -> Self {
        Self {
            config,
            debug: false,
            trace: None,
        }
    }

    /// Validate `config` and build a paginator over it.
    pub fn try_new(config: PaginationConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self::new(config))
    }

    /// Print `[debug]` lines for each pipeline decision.
    #[must_use]
    pub const fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    #[must_use]
    pub const fn with_trace(mut self, sink: &'static dyn PaginationTraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &PaginationConfig {
        &self.config
    }

    fn debug_log(&self, s: impl AsRef<str>) {
        if self.debug {
            println!("[debug] {}", s.as_ref());
        }
    }

    fn trace_event(&self, event: PaginationTraceEvent) {
        if let Some(sink) = self.trace {
            sink.on_event(event);
        }
    }

    /// Resolve the pagination request for `ctx` without touching storage.
    ///
    /// `None` means pagination does not apply and the host runs its query
    /// unchanged.
    #[must_use]
    pub fn plan(&self, ctx: &QueryContext) -> Option<PaginationRequest> {
        let Some(request) = PaginationRequest::resolve(ctx, &self.config) else {
            self.debug_log("keyset pagination does not apply");
            return None;
        };

        if direction::is_ambiguous(ctx) {
            let forward = direction::cursor_for(ctx, Direction::Forward);
            let backward = direction::cursor_for(ctx, Direction::Backward);
            if let (Some(forward), Some(backward)) = (forward, backward) {
                self.debug_log(format!(
                    "both cursors present (forward {forward}, backward {backward}); using backward"
                ));
                self.trace_event(PaginationTraceEvent::AmbiguousDirection { forward, backward });
            }
        }

        self.trace_event(PaginationTraceEvent::Start {
            direction: request.direction(),
            cursor: request.cursor_id(),
            page_size: request.page_size().get(),
        });

        Some(request)
    }

    /// Resolve the request's cursor and build the query shape.
    ///
    /// An unresolvable cursor falls back to the first page; store failures
    /// are returned unchanged.
    pub fn prepare<S: RecordStore>(
        &self,
        ctx: &QueryContext,
        request: PaginationRequest,
        store: &S,
    ) -> Result<PreparedQuery, S::Error> {
        let (request, anchor) = match request.cursor_id() {
            None => (request, None),
            Some(cursor_id) => match cursor::resolve(store, cursor_id, request.sort_field()) {
                Ok(anchor) => {
                    self.debug_log(format!(
                        "cursor {cursor_id} resolved to ({}, {})",
                        anchor.value(),
                        anchor.id()
                    ));
                    (request, Some(anchor))
                }
                Err(CursorResolveError::NotFound { id }) => {
                    self.debug_log(format!("cursor {id} not found; rendering first page"));
                    self.trace_event(PaginationTraceEvent::CursorDegraded { cursor: id });
                    (request.into_first_page(), None)
                }
                Err(CursorResolveError::Store(err)) => return Err(err),
            },
        };

        let shape = build_shape(&request, anchor.as_ref(), ctx.filter(), self.config.reorient);

        self.debug_log(format!(
            "shape: {:?} order {} {} limit {}{}",
            request.direction(),
            shape.order.field,
            shape.order.order,
            shape.limit.rows(),
            if anchor.is_some() { " (anchored)" } else { "" },
        ));
        self.trace_event(PaginationTraceEvent::Shape {
            direction: request.direction(),
            anchored: anchor.is_some(),
            limit: shape.limit.rows(),
            pushed_down: shape.outer_order.is_some(),
        });

        Ok(PreparedQuery {
            request,
            anchor,
            shape,
        })
    }

    /// Turn fetched rows into a forward-oriented page with navigation.
    ///
    /// Hosts that execute `prepared.shape()` themselves (for example through
    /// `crate::sql`) call this with the rows they got back.
    #[must_use]
    pub fn finish<R: Record>(&self, prepared: PreparedQuery, rows: Vec<R>) -> PagedLoad<R> {
        let PreparedQuery { request, shape, .. } = prepared;

        let rows = if shape.outer_order.is_some() {
            rows
        } else {
            reorient(request.direction(), rows, request.order())
        };

        let page = Page::new(rows, request.sort_field());
        let cursors = cursor::emit(&page);
        let navigation = cursor::navigation(&page, &request);

        self.trace_event(PaginationTraceEvent::Finish {
            rows: u64::try_from(page.len()).unwrap_or(u64::MAX),
            next_cursor: cursors.next_cursor,
            prev_cursor: cursors.prev_cursor,
        });

        PagedLoad::new(page, cursors, navigation, request)
    }

    /// Run the full pipeline for `ctx`.
    ///
    /// `Ok(None)` when pagination does not apply. Collaborator failures are
    /// returned exactly as the collaborator produced them.
    pub fn execute<S, Q>(
        &self,
        ctx: &QueryContext,
        store: &S,
        engine: &Q,
    ) -> Result<Option<PagedLoad<Q::Record>>, S::Error>
    where
        S: RecordStore,
        Q: QueryEngine<Error = S::Error>,
    {
        let Some(request) = self.plan(ctx) else {
            return Ok(None);
        };

        let prepared = self.prepare(ctx, request, store)?;
        let rows = engine.fetch(prepared.shape())?;

        Ok(Some(self.finish(prepared, rows)))
    }

    /// Fetch the first keyset page for `ctx`, ignoring any cursor.
    ///
    /// Lets a host render the entry page through the same pipeline so its
    /// navigation links come out in keyset form.
    pub fn execute_first_page<Q: QueryEngine>(
        &self,
        ctx: &QueryContext,
        engine: &Q,
    ) -> Result<PagedLoad<Q::Record>, Q::Error> {
        let request = PaginationRequest::first_page(ctx, &self.config);
        let shape = build_shape(&request, None, ctx.filter(), self.config.reorient);
        let prepared = PreparedQuery {
            request,
            anchor: None,
            shape,
        };
        let rows = engine.fetch(prepared.shape())?;

        Ok(self.finish(prepared, rows))
    }
}
