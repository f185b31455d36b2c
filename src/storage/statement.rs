//! Dynamic `UPDATE ... SET` builder
//!
//! Columns are emitted only for assignments that carry a value, in the order they
//! were added, so the positional `?` placeholders line up with [`UpdateStatement::params`].

use crate::core::customer::CustomerPatch;

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Int(value)
    }
}

/// Builder collecting the optional assignments of an update
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    table: &'static str,
    assignments: Vec<(&'static str, SqlParam)>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            assignments: Vec::new(),
        }
    }

    /// Add `column = ?` when `value` is present
    pub fn set<V: Into<SqlParam>>(mut self, column: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.assignments.push((column, value.into()));
        }
        self
    }

    /// Finish with `where id = ?`. Returns `None` when nothing was assigned.
    pub fn where_id(self, id: i64) -> Option<UpdateStatement> {
        if self.assignments.is_empty() {
            return None;
        }

        let columns: Vec<String> = self
            .assignments
            .iter()
            .map(|(column, _)| format!("{} = ?", column))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} where id = ?",
            self.table,
            columns.join(", ")
        );

        let mut params: Vec<SqlParam> = self.assignments.into_iter().map(|(_, v)| v).collect();
        params.push(SqlParam::Int(id));

        Some(UpdateStatement { sql, params })
    }
}

/// A ready-to-execute update: SQL text plus its parameters in placeholder order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl UpdateStatement {
    /// Build the partial update of the `customer` row `id`.
    ///
    /// Column order is fixed: name, age, salary.
    pub fn customer_patch(id: i64, patch: &CustomerPatch) -> Option<Self> {
        UpdateBuilder::new("customer")
            .set("name", patch.name.clone())
            .set("age", patch.age)
            .set("salary", patch.salary)
            .where_id(id)
    }
}
