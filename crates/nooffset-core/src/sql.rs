//! Module: sql
//! Responsibility: render a `QueryShape` into parameterised SQL text and the
//! install-time index statement for the keyset columns.
//! Does not own: connection handling or statement execution.
//!
//! Every identifier is checked with `is_valid_field_name` before it is
//! written into SQL. Values never reach the text; they are returned as
//! positional `?` binds in placeholder order.
//!
//! Keyset columns must be NOT NULL. A row-value comparison against NULL is
//! UNKNOWN in SQL and would match nothing, so an anchor whose sort value is
//! `Null` is rejected instead of rendered. The tiebreak placeholder is bound
//! to the anchor's `RecordId`.

use crate::{
    error::SqlRenderError,
    paginate::{OrderSpec, QueryShape},
    predicate::{ComparePredicate, KeysetPredicate, Predicate},
    types::is_valid_field_name,
    value::SortValue,
};
use std::fmt::Write as _;

///
/// SqlFragments
///
/// Clause text for one page fetch plus its bind values.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SqlFragments {
    pub where_clause: Option<String>,
    pub order_by: String,
    pub limit: String,
    pub binds: Vec<SortValue>,
}

impl SqlFragments {
    /// Clauses joined in statement order, without a leading space.
    #[must_use]
    pub fn tail(&self) -> String {
        let mut sql = String::new();
        if let Some(where_clause) = &self.where_clause {
            let _ = write!(sql, "WHERE {where_clause} ");
        }
        let _ = write!(sql, "{} {}", self.order_by, self.limit);

        sql
    }
}

///
/// RenderedQuery
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedQuery {
    pub sql: String,
    pub binds: Vec<SortValue>,
}

/// Render the clauses of `shape`.
pub fn render(shape: &QueryShape) -> Result<SqlFragments, SqlRenderError> {
    let mut binds = Vec::new();
    let where_clause = match &shape.filter {
        Predicate::True => None,
        filter => Some(render_predicate(filter, &mut binds)?),
    };

    Ok(SqlFragments {
        where_clause,
        order_by: order_by(&shape.order)?,
        limit: format!("LIMIT {}", shape.limit.rows()),
        binds,
    })
}

/// Render a full `SELECT` against `table`.
///
/// When the shape carries an outer order, the bounded fetch becomes a
/// subquery and the outer statement restores forward-reading order.
pub fn render_select(table: &str, shape: &QueryShape) -> Result<RenderedQuery, SqlRenderError> {
    let table = identifier(table)?;
    let fragments = render(shape)?;
    let inner = format!("SELECT * FROM {table} {}", fragments.tail());

    let sql = match &shape.outer_order {
        Some(outer) => format!(
            "SELECT * FROM ({inner}) AS keyset_page {}",
            order_by(outer)?
        ),
        None => inner,
    };

    Ok(RenderedQuery {
        sql,
        binds: fragments.binds,
    })
}

/// `CREATE INDEX` statement covering the keyset columns of `order`.
///
/// Column direction is omitted; a btree index on `(field, tiebreak)` serves
/// both the forward and the reversed fetch.
pub fn index_statement(table: &str, order: &OrderSpec) -> Result<String, SqlRenderError> {
    let table = identifier(table)?;
    let field = identifier(&order.field)?;
    let tiebreak = identifier(&order.tiebreak)?;
    let name = format!("{table}_{field}_{tiebreak}_keyset").replace('.', "_");

    Ok(format!(
        "CREATE INDEX IF NOT EXISTS {name} ON {table} ({field}, {tiebreak})"
    ))
}

fn identifier(name: &str) -> Result<&str, SqlRenderError> {
    if is_valid_field_name(name) {
        Ok(name)
    } else {
        Err(SqlRenderError::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

fn order_by(order: &OrderSpec) -> Result<String, SqlRenderError> {
    let mut parts = Vec::with_capacity(2);
    for (column, direction) in order.columns() {
        parts.push(format!(
            "{} {}",
            identifier(column)?,
            direction.to_string().to_ascii_uppercase()
        ));
    }

    Ok(format!("ORDER BY {}", parts.join(", ")))
}

fn render_predicate(
    predicate: &Predicate,
    binds: &mut Vec<SortValue>,
) -> Result<String, SqlRenderError> {
    match predicate {
        Predicate::True => Ok("1 = 1".to_string()),
        Predicate::False => Ok("1 = 0".to_string()),
        Predicate::And(preds) => render_junction(preds, " AND ", "1 = 1", binds),
        Predicate::Or(preds) => render_junction(preds, " OR ", "1 = 0", binds),
        Predicate::Not(pred) => Ok(format!("NOT ({})", render_predicate(pred, binds)?)),
        Predicate::Compare(cmp) => render_compare(cmp, binds),
        Predicate::Keyset(keyset) => render_keyset(keyset, binds),
    }
}

fn render_junction(
    preds: &[Predicate],
    separator: &str,
    empty: &str,
    binds: &mut Vec<SortValue>,
) -> Result<String, SqlRenderError> {
    if preds.is_empty() {
        return Ok(empty.to_string());
    }

    let parts = preds
        .iter()
        .map(|pred| render_predicate(pred, binds).map(|sql| format!("({sql})")))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(parts.join(separator))
}

fn render_compare(
    cmp: &ComparePredicate,
    binds: &mut Vec<SortValue>,
) -> Result<String, SqlRenderError> {
    let column = identifier(&cmp.field)?;
    binds.push(cmp.value.clone());

    Ok(format!("{column} {} ?", cmp.op.as_sql()))
}

fn render_keyset(
    keyset: &KeysetPredicate,
    binds: &mut Vec<SortValue>,
) -> Result<String, SqlRenderError> {
    let field = identifier(&keyset.field)?;
    let tiebreak = identifier(&keyset.tiebreak)?;
    if keyset.anchor.value().is_null() {
        return Err(SqlRenderError::NullAnchor {
            field: field.to_string(),
        });
    }
    binds.push(keyset.anchor.value().clone());
    binds.push(SortValue::Uint(keyset.anchor.id().get()));

    Ok(format!("({field}, {tiebreak}) {} (?, ?)", keyset.op.as_sql()))
}

///
/// TESTS
///
