use super::{CompareOp, ComparePredicate, KeysetPredicate, Predicate};
use crate::{
    store::Row,
    test_support::{POST_DATE, jan, post},
    types::{RecordId, SortKey},
    value::SortValue,
};
use std::cmp::Ordering;

fn keyset(op: CompareOp, day: u8, id: u64) -> Predicate {
    KeysetPredicate {
        field: POST_DATE.to_string(),
        tiebreak: "id".to_string(),
        op,
        anchor: SortKey::new(jan(day), RecordId::new(id)),
    }
    .into()
}

#[test]
fn compare_op_matches_expected_orderings() {
    let cases = [
        (CompareOp::Eq, [false, true, false]),
        (CompareOp::Ne, [true, false, true]),
        (CompareOp::Lt, [true, false, false]),
        (CompareOp::Lte, [true, true, false]),
        (CompareOp::Gt, [false, false, true]),
        (CompareOp::Gte, [false, true, true]),
    ];

    for (op, expected) in cases {
        let actual = [Ordering::Less, Ordering::Equal, Ordering::Greater].map(|ord| op.matches(ord));
        assert_eq!(actual, expected, "{op:?}");
    }
}

#[test]
fn keyset_lt_breaks_date_ties_by_id() {
    let boundary = keyset(CompareOp::Lt, 2, 7);

    // same date, smaller id: before the anchor under descending order
    assert!(boundary.eval(&post(5, 2)));
    assert!(boundary.eval(&post(3, 1)));
    assert!(!boundary.eval(&post(7, 2)));
    assert!(!boundary.eval(&post(8, 2)));
    assert!(!boundary.eval(&post(9, 3)));
}

#[test]
fn keyset_gt_is_strict_on_the_anchor_itself() {
    let boundary = keyset(CompareOp::Gt, 2, 5);

    assert!(boundary.eval(&post(7, 2)));
    assert!(boundary.eval(&post(9, 3)));
    assert!(!boundary.eval(&post(5, 2)));
    assert!(!boundary.eval(&post(3, 1)));
}

#[test]
fn missing_field_reads_as_null_for_keyset_but_fails_compare() {
    let bare = Row::new(4_u64);

    // Null ranks lowest, so it sits after every dated row in descending order.
    assert!(keyset(CompareOp::Lt, 1, 3).eval(&bare));
    assert!(!Predicate::eq(POST_DATE, SortValue::Null).eval(&bare));
}

#[test]
fn and_also_keeps_both_sides_and_flattens() {
    let status = Predicate::eq("post_status", "publish");
    let boundary = keyset(CompareOp::Lt, 2, 7);

    assert_eq!(Predicate::True.and_also(boundary.clone()), boundary);
    assert_eq!(status.clone().and_also(Predicate::True), status);

    let combined = status
        .clone()
        .and_also(Predicate::eq("post_type", "post"))
        .and_also(boundary.clone());
    let Predicate::And(parts) = combined else {
        panic!("expected flattened conjunction");
    };
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], status);
    assert_eq!(parts[2], boundary);
}

#[test]
fn boolean_nodes_evaluate_like_sql() {
    let row = post(9, 3).with("post_status", "draft");
    let published = Predicate::eq("post_status", "publish");

    assert!(!published.eval(&row));
    assert!(Predicate::not(published.clone()).eval(&row));
    assert!(Predicate::or(vec![published.clone(), Predicate::True]).eval(&row));
    assert!(!Predicate::and(vec![Predicate::True, Predicate::False]).eval(&row));
    assert!(Predicate::and(vec![]).eval(&row));
    assert!(!Predicate::or(vec![]).eval(&row));
    assert!(Predicate::Compare(ComparePredicate::new(POST_DATE, CompareOp::Gte, jan(3))).eval(&row));
}
