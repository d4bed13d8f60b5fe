use super::{
    Direction, KeysetPaginator, OrderSpec, PaginationOptions, PaginationRequest, QueryContext,
    QueryKind, QueryShape, ReorientMode, boundary, build_shape, direction, effective_order, reorient,
};
use crate::{
    config::PaginationConfig,
    cursor::{Anchor, NavLink, Navigation},
    predicate::{CompareOp, KeysetPredicate, Predicate},
    store::{MemoryTable, Row},
    test_support::{RecordingSink, ids, jan, page_size, paginator, post, tied_posts},
    trace::PaginationTraceEvent,
    traits::{QueryEngine, RecordStore},
    types::{RecordId, SortKey, SortOrder},
};

fn after(id: u64) -> QueryContext {
    QueryContext::main().with_params(PaginationOptions::new().after(RecordId::new(id)))
}

fn before(id: u64) -> QueryContext {
    QueryContext::main().with_params(PaginationOptions::new().before(RecordId::new(id)))
}

fn run(paginator: &KeysetPaginator, ctx: &QueryContext) -> (Vec<u64>, Navigation) {
    let table = tied_posts();
    let load = paginator
        .execute(ctx, &table, &table)
        .unwrap()
        .expect("pagination should apply");

    (ids(load.page().records()), load.navigation())
}

const fn link(direction: Direction, id: u64) -> Option<NavLink> {
    Some(NavLink {
        direction,
        cursor_id: RecordId::new(id),
    })
}

//
// Direction Resolver
//

#[test]
fn applies_only_to_main_queries_with_a_cursor() {
    let params = PaginationOptions::new().after(RecordId::new(7));

    assert!(direction::applies(&QueryContext::main().with_params(params.clone())));
    assert!(!direction::applies(&QueryContext::main()));
    assert!(!direction::applies(
        &QueryContext::new(QueryKind::Admin).with_params(params.clone())
    ));
    assert!(!direction::applies(
        &QueryContext::new(QueryKind::Secondary).with_params(params)
    ));
}

#[test]
fn query_options_carry_cursors_too() {
    let ctx = QueryContext::main().with_options(PaginationOptions::new().before(RecordId::new(5)));

    assert!(direction::applies(&ctx));
    assert_eq!(direction::direction(&ctx), Direction::Backward);
    assert_eq!(
        direction::cursor_for(&ctx, Direction::Backward),
        Some(RecordId::new(5))
    );
}

#[test]
fn backward_wins_when_both_cursors_are_present() {
    static SINK: RecordingSink = RecordingSink::new();

    let ctx = QueryContext::main().with_params(
        PaginationOptions::new()
            .after(RecordId::new(9))
            .before(RecordId::new(5)),
    );
    assert!(direction::is_ambiguous(&ctx));
    assert_eq!(direction::direction(&ctx), Direction::Backward);

    let request = paginator(2).with_trace(&SINK).plan(&ctx).unwrap();
    assert_eq!(request.direction(), Direction::Backward);
    assert_eq!(request.cursor_id(), Some(RecordId::new(5)));

    let events = SINK.take();
    assert_eq!(
        events[0],
        PaginationTraceEvent::AmbiguousDirection {
            forward: RecordId::new(9),
            backward: RecordId::new(5),
        }
    );
    assert!(matches!(
        events[1],
        PaginationTraceEvent::Start {
            direction: Direction::Backward,
            page_size: 2,
            ..
        }
    ));
}

//
// Order Policy
//

#[test]
fn effective_order_defaults_to_post_date_descending() {
    let order = effective_order(&after(7), &PaginationConfig::default());

    assert_eq!(order, OrderSpec::new("post_date", "id", SortOrder::Desc));
    assert_eq!(order.boundary_op(), CompareOp::Lt);
    assert_eq!(order.reversed().boundary_op(), CompareOp::Gt);
}

#[test]
fn unsortable_field_falls_back_to_default() {
    let config = PaginationConfig {
        sortable_fields: vec!["menu_order".to_string()],
        ..PaginationConfig::default()
    };
    let options = |field: &str| {
        QueryContext::main().with_params(
            PaginationOptions::new()
                .after(RecordId::new(1))
                .sort_field(field)
                .sort_order(SortOrder::Asc),
        )
    };

    let order = effective_order(&options("menu_order"), &config);
    assert_eq!(order.field, "menu_order");
    assert_eq!(order.order, SortOrder::Asc);

    assert_eq!(effective_order(&options("post_title"), &config).field, "post_date");
    assert_eq!(effective_order(&options("1; --"), &config).field, "post_date");
}

#[test]
fn params_override_query_options_field_by_field() {
    let ctx = QueryContext::main()
        .with_params(PaginationOptions::new().page_size(page_size(1)))
        .with_options(
            PaginationOptions::new()
                .after(RecordId::new(9))
                .page_size(page_size(3))
                .sort_order(SortOrder::Asc),
        );
    let request = PaginationRequest::resolve(&ctx, &PaginationConfig::default()).unwrap();

    assert_eq!(request.page_size().get(), 1);
    assert_eq!(request.sort_order(), SortOrder::Asc);
    assert_eq!(request.cursor_id(), Some(RecordId::new(9)));
}

#[test]
fn requested_page_size_is_capped_by_policy() {
    let config = PaginationConfig {
        page_size_cap: Some(3),
        page_size: 2,
        ..PaginationConfig::default()
    };
    let ctx = QueryContext::main().with_params(
        PaginationOptions::new()
            .after(RecordId::new(9))
            .page_size(page_size(50)),
    );

    assert_eq!(
        PaginationRequest::resolve(&ctx, &config).unwrap().page_size().get(),
        3
    );
    assert_eq!(
        PaginationRequest::resolve(&after(9), &config).unwrap().page_size().get(),
        2
    );
}

//
// Predicate Builder
//

#[test]
fn boundary_is_absent_without_anchor() {
    let order = OrderSpec::new("post_date", "id", SortOrder::Desc);

    assert_eq!(boundary::boundary(None, &order), None);
    assert_eq!(boundary::combine(&Predicate::True, None), Predicate::True);
}

#[test]
fn boundary_operator_follows_fetch_order() {
    let anchor = Anchor::new(SortKey::new(jan(2), RecordId::new(7)));
    let desc = OrderSpec::new("post_date", "id", SortOrder::Desc);

    let Some(Predicate::Keyset(KeysetPredicate { op, anchor: key, .. })) =
        boundary::boundary(Some(&anchor), &desc)
    else {
        panic!("expected keyset boundary");
    };
    assert_eq!(op, CompareOp::Lt);
    assert_eq!(&key, anchor.key());

    let Some(Predicate::Keyset(asc)) = boundary::boundary(Some(&anchor), &desc.reversed()) else {
        panic!("expected keyset boundary");
    };
    assert_eq!(asc.op, CompareOp::Gt);
}

#[test]
fn boundary_is_anded_onto_existing_filter() {
    let anchor = Anchor::new(SortKey::new(jan(2), RecordId::new(7)));
    let order = OrderSpec::new("post_date", "id", SortOrder::Desc);
    let status = Predicate::eq("post_status", "publish");

    let combined = boundary::combine(&status, boundary::boundary(Some(&anchor), &order));
    let Predicate::And(parts) = combined else {
        panic!("expected conjunction");
    };
    assert_eq!(parts[0], status);
    assert!(matches!(parts[1], Predicate::Keyset(_)));
}

//
// Result Reorienter
//

#[test]
fn reorient_passes_forward_batches_through() {
    let order = OrderSpec::new("post_date", "id", SortOrder::Desc);
    let rows = vec![post(3, 1), post(9, 3)];

    assert_eq!(ids(&reorient(Direction::Forward, rows, &order)), vec![3, 9]);
}

#[test]
fn reorient_sorts_backward_batches_into_forward_order() {
    let order = OrderSpec::new("post_date", "id", SortOrder::Desc);

    for rows in [
        vec![post(7, 2), post(9, 3), post(5, 2)],
        vec![post(5, 2), post(7, 2), post(9, 3)],
        vec![post(9, 3), post(5, 2), post(7, 2)],
    ] {
        assert_eq!(ids(&reorient(Direction::Backward, rows, &order)), vec![9, 7, 5]);
    }
}

//
// Full pipeline
//

#[test]
fn first_page_then_forward_through_the_date_tie() {
    let paginator = paginator(2);
    let table = tied_posts();

    let first = paginator
        .execute_first_page(&QueryContext::main(), &table)
        .unwrap();
    assert_eq!(ids(first.page().records()), vec![9, 7]);
    assert_eq!(first.navigation().prev, None);
    assert_eq!(first.navigation().next, link(Direction::Forward, 7));

    let (rows, nav) = run(&paginator, &after(7));
    assert_eq!(rows, vec![5, 3]);
    assert_eq!(nav.prev, link(Direction::Backward, 5));
    // full page: next is offered even though nothing follows
    assert_eq!(nav.next, link(Direction::Forward, 3));
}

#[test]
fn backward_from_cursor_five_returns_the_first_page() {
    let (rows, nav) = run(&paginator(2), &before(5));

    assert_eq!(rows, vec![9, 7]);
    assert_eq!(nav.prev, link(Direction::Backward, 9));
    assert_eq!(nav.next, link(Direction::Forward, 7));
}

#[test]
fn past_the_last_record_yields_an_empty_page_without_links() {
    let table = tied_posts();
    let load = paginator(2).execute(&after(3), &table, &table).unwrap().unwrap();

    assert!(load.page().is_empty());
    assert_eq!(load.page().first_key(), None);
    assert_eq!(load.cursors().next_cursor, None);
    assert_eq!(load.cursors().prev_cursor, None);
    assert!(load.navigation().is_empty());
}

#[test]
fn short_page_offers_no_speculative_link() {
    let (rows, nav) = run(&paginator(3), &after(7));

    assert_eq!(rows, vec![5, 3]);
    assert_eq!(nav.next, None);
    assert_eq!(nav.links().count(), 1);
}

#[test]
fn unresolvable_cursor_degrades_to_first_page() {
    static SINK: RecordingSink = RecordingSink::new();

    let table = tied_posts();
    let load = paginator(2)
        .with_trace(&SINK)
        .execute(&before(42), &table, &table)
        .unwrap()
        .unwrap();

    assert_eq!(ids(load.page().records()), vec![9, 7]);
    assert_eq!(load.request().direction(), Direction::Forward);
    assert_eq!(load.request().cursor_id(), None);
    assert_eq!(load.navigation().prev, None);

    let events = SINK.take();
    assert!(events.contains(&PaginationTraceEvent::CursorDegraded {
        cursor: RecordId::new(42)
    }));
    assert!(events.contains(&PaginationTraceEvent::Shape {
        direction: Direction::Forward,
        anchored: false,
        limit: 2,
        pushed_down: false,
    }));
    assert_eq!(
        events.last(),
        Some(&PaginationTraceEvent::Finish {
            rows: 2,
            next_cursor: Some(RecordId::new(7)),
            prev_cursor: Some(RecordId::new(9)),
        })
    );
}

#[test]
fn non_main_or_cursorless_queries_are_left_alone() {
    let table = tied_posts();
    let paginator = paginator(2);
    let admin = QueryContext::new(QueryKind::Admin)
        .with_params(PaginationOptions::new().after(RecordId::new(7)));

    assert!(paginator.execute(&admin, &table, &table).unwrap().is_none());
    assert!(paginator
        .execute(&QueryContext::main(), &table, &table)
        .unwrap()
        .is_none());
}

#[test]
fn host_filter_survives_pagination() {
    let table: MemoryTable<Row> = [
        post(9, 3).with("post_status", "publish"),
        post(7, 2).with("post_status", "draft"),
        post(5, 2).with("post_status", "publish"),
        post(3, 1).with("post_status", "publish"),
    ]
    .into_iter()
    .collect();
    let ctx = after(9).with_filter(Predicate::eq("post_status", "publish"));

    let load = paginator(2).execute(&ctx, &table, &table).unwrap().unwrap();
    assert_eq!(ids(load.page().records()), vec![5, 3]);
}

#[test]
fn cursor_is_keyed_by_the_currently_effective_sort_field() {
    let table: MemoryTable<Row> = [
        post(9, 3).with("menu_order", 1_i64),
        post(7, 2).with("menu_order", 4_i64),
        post(5, 2).with("menu_order", 2_i64),
        post(3, 1).with("menu_order", 3_i64),
    ]
    .into_iter()
    .collect();
    let ctx = QueryContext::main().with_params(
        PaginationOptions::new()
            .after(RecordId::new(5))
            .sort_field("menu_order")
            .sort_order(SortOrder::Asc),
    );

    let load = paginator(2).execute(&ctx, &table, &table).unwrap().unwrap();
    assert_eq!(ids(load.page().records()), vec![3, 7]);
}

#[test]
fn pushed_down_reorientation_is_left_to_the_engine() {
    let config = PaginationConfig {
        page_size: 2,
        reorient: ReorientMode::PushDown,
        ..PaginationConfig::default()
    };
    let paginator = KeysetPaginator::new(config);

    let request = paginator.plan(&before(5)).unwrap();
    let prepared = paginator.prepare(&before(5), request, &tied_posts()).unwrap();
    assert_eq!(
        prepared.shape().outer_order,
        Some(OrderSpec::new("post_date", "id", SortOrder::Desc))
    );

    let (rows, _) = run(&paginator, &before(5));
    assert_eq!(rows, vec![9, 7]);

    let forward = paginator.plan(&after(7)).unwrap();
    let shape = build_shape(&forward, None, &Predicate::True, ReorientMode::PushDown);
    assert_eq!(shape.outer_order, None);
}

//
// Collaborator errors
//

#[derive(Debug, Eq, PartialEq)]
struct StoreDown;

struct FailingStore;

impl RecordStore for FailingStore {
    type Record = Row;
    type Error = StoreDown;

    fn get_record(&self, _: RecordId) -> Result<Option<Row>, StoreDown> {
        Err(StoreDown)
    }
}

impl QueryEngine for FailingStore {
    type Record = Row;
    type Error = StoreDown;

    fn fetch(&self, _: &QueryShape) -> Result<Vec<Row>, StoreDown> {
        Err(StoreDown)
    }
}

#[test]
fn collaborator_errors_propagate_unchanged() {
    let paginator = paginator(2);

    assert_eq!(
        paginator
            .execute(&after(7), &FailingStore, &FailingStore)
            .unwrap_err(),
        StoreDown
    );
    assert_eq!(
        paginator
            .execute_first_page(&QueryContext::main(), &FailingStore)
            .unwrap_err(),
        StoreDown
    );
}
