use sqlb_error::Result;

use crate::{clause::Clause, Value};

/// Boolean operator joining successive predicates of a `WHERE` or `HAVING` clause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operator {
    And,
    Or,
}

impl Operator {
    pub(crate) fn separator(self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// Statement kind accepted by [`SqlBuilder::build`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement {
    Query,
    Insert,
    InsertAll,
    Update,
    Delete,
}

/// Fluent sql builder
///
/// Composer methods accumulate clause fragments and their bind values, the
/// `*_sql` / `*_params` pairs render them. Rendering never mutates the builder.
///
/// # Examples
///
/// ```
/// use sqlb::{Order, SqlBuilder, Value};
///
/// let mut sb = SqlBuilder::new();
/// let sql = sb
///     .table("t")
///     .select(["a", "b"])
///     .where_cond("a", "=", 1)
///     .group_by("a")
///     .having("COUNT(a)", ">", 2)
///     .order_by(Order::Desc, ["a"])
///     .limit(0, 5)
///     .query_sql()
///     .unwrap();
///
/// assert_eq!(
///     &sql,
///     "SELECT a,b FROM t WHERE a = ? GROUP BY a HAVING COUNT(a) > ? ORDER BY a DESC LIMIT ? OFFSET ?"
/// );
/// assert_eq!(
///     sb.query_params(),
///     vec![Value::from(1), Value::from(2), Value::from(0), Value::from(5)]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct SqlBuilder {
    pub(crate) table: Option<String>,
    pub(crate) select: Clause,
    pub(crate) insert: Clause,
    pub(crate) insert_all: Clause,
    pub(crate) update: Clause,
    pub(crate) where_cond: Clause,
    pub(crate) join: Clause,
    pub(crate) group_by: Clause,
    pub(crate) having: Clause,
    pub(crate) order_by: Clause,
    pub(crate) limit: Clause,
}

impl SqlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set target table
    pub fn table<S>(&mut self, table: S) -> &mut Self
    where
        S: ToString,
    {
        self.table = Some(table.to_string());
        self
    }

    /// Render the statement and return it with its bind values
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlb::{SqlBuilder, Statement, Value};
    ///
    /// let (sql, params) = SqlBuilder::new()
    ///     .table("ta")
    ///     .where_cond("id", "=", 1)
    ///     .build(Statement::Delete)
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "DELETE FROM ta WHERE id = ?");
    /// assert_eq!(params, vec![Value::from(1)]);
    /// ```
    pub fn build(&self, statement: Statement) -> Result<(String, Vec<Value>)> {
        let pair = match statement {
            Statement::Query => (self.query_sql()?, self.query_params()),
            Statement::Insert => (self.insert_sql()?, self.insert_params()),
            Statement::InsertAll => (self.insert_all_sql()?, self.insert_all_params()),
            Statement::Update => (self.update_sql()?, self.update_params()),
            Statement::Delete => (self.delete_sql()?, self.delete_params()),
        };

        Ok(pair)
    }

    pub(crate) fn table_name(&self) -> Result<&str> {
        self.table.as_deref().ok_or(sqlb_error::Error::TableEmpty)
    }
}

#[cfg(test)]
mod test {
    use sqlb_error::Error;

    use crate::*;

    #[test]
    fn test_build_requires_table() {
        let sb = SqlBuilder::new();

        for statement in [
            Statement::Query,
            Statement::Insert,
            Statement::InsertAll,
            Statement::Update,
            Statement::Delete,
        ] {
            assert_eq!(sb.build(statement), Err(Error::TableEmpty));
        }
    }

    #[test]
    fn test_table_overwrites() {
        let (sql, _) = SqlBuilder::new()
            .table("a")
            .table("b")
            .build(Statement::Query)
            .unwrap();

        assert_eq!(&sql, "SELECT * FROM b");
    }

    #[test]
    fn test_clone_is_independent() {
        let mut sb = SqlBuilder::new();
        sb.table("t").where_cond("a", "=", 1);

        let mut other = sb.clone();
        other.where_cond("b", "=", 2);

        assert_eq!(sb.delete_sql().unwrap(), "DELETE FROM t WHERE a = ?");
        assert_eq!(
            other.delete_sql().unwrap(),
            "DELETE FROM t WHERE a = ? AND b = ?"
        );
    }
}
