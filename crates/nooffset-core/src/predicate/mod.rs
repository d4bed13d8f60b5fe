//! Predicate AST for filters handed to the query engine.
//!
//! Schema-agnostic. The keyset boundary is one `Keyset` node and-ed onto
//! whatever filter the host query already carries.

#[cfg(test)]
mod tests;

use crate::{
    traits::Record,
    types::SortKey,
    value::{SortValue, canonical_cmp},
};
use std::cmp::Ordering;

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    /// Whether `left.cmp(right) == ordering` satisfies `left OP right`.
    #[must_use]
    pub const fn matches(self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => matches!(ordering, Ordering::Equal),
            Self::Ne => !matches!(ordering, Ordering::Equal),
            Self::Lt => matches!(ordering, Ordering::Less),
            Self::Lte => !matches!(ordering, Ordering::Greater),
            Self::Gt => matches!(ordering, Ordering::Greater),
            Self::Gte => !matches!(ordering, Ordering::Less),
        }
    }

    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: SortValue,
}

impl ComparePredicate {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: impl Into<SortValue>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    // Absent and null fields never satisfy a comparison, as in SQL.
    fn eval<R: Record>(&self, record: &R) -> bool {
        match record.field_value(&self.field) {
            None | Some(SortValue::Null) => false,
            Some(value) => self.op.matches(canonical_cmp(&value, &self.value)),
        }
    }
}

///
/// KeysetPredicate
///
/// Tuple comparison `(field, tiebreak) OP (anchor.value, anchor.id)`.
/// Ties on `field` are broken strictly by the unique id.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeysetPredicate {
    pub field: String,
    pub tiebreak: String,
    pub op: CompareOp,
    pub anchor: SortKey,
}

impl KeysetPredicate {
    fn eval<R: Record>(&self, record: &R) -> bool {
        self.op
            .matches(record.sort_key(&self.field).cmp(&self.anchor))
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Predicate {
    #[default]
    True,
    False,
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
    Compare(ComparePredicate),
    Keyset(KeysetPredicate),
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[expect(clippy::should_implement_trait)]
    #[must_use]
    pub fn not(pred: Self) -> Self {
        Self::Not(Box::new(pred))
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<SortValue>) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Eq, value))
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: impl Into<SortValue>) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Ne, value))
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: impl Into<SortValue>) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Lt, value))
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: impl Into<SortValue>) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Lte, value))
    }

    #[must_use]
    pub fn gt(field: impl Into<String>, value: impl Into<SortValue>) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Gt, value))
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: impl Into<SortValue>) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Gte, value))
    }

    /// Conjoin `other` onto this predicate.
    ///
    /// `True` is the identity and nested `And` nodes are flattened. Neither
    /// side is ever dropped or loosened.
    #[must_use]
    pub fn and_also(self, other: Self) -> Self {
        match (self, other) {
            (Self::True, other) => other,
            (this, Self::True) => this,
            (Self::And(mut left), Self::And(right)) => {
                left.extend(right);
                Self::And(left)
            }
            (Self::And(mut left), other) => {
                left.push(other);
                Self::And(left)
            }
            (this, Self::And(mut right)) => {
                right.insert(0, this);
                Self::And(right)
            }
            (this, other) => Self::And(vec![this, other]),
        }
    }

    /// Evaluate this predicate against one in-memory record.
    #[must_use]
    pub fn eval<R: Record>(&self, record: &R) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::And(preds) => preds.iter().all(|pred| pred.eval(record)),
            Self::Or(preds) => preds.iter().any(|pred| pred.eval(record)),
            Self::Not(pred) => !pred.eval(record),
            Self::Compare(cmp) => cmp.eval(record),
            Self::Keyset(keyset) => keyset.eval(record),
        }
    }
}

impl From<KeysetPredicate> for Predicate {
    fn from(keyset: KeysetPredicate) -> Self {
        Self::Keyset(keyset)
    }
}
