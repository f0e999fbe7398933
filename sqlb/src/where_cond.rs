//! # Where
//!
//! Predicates are appended in call order and joined with `AND` / `OR`.
//! No parentheses are inserted between calls, so `(a OR b) AND c` has to go
//! through [`SqlBuilder::where_raw`] with explicit parentheses.

use crate::{
    builder::{Operator, SqlBuilder},
    clause::placeholders,
    Value,
};

const PREFIX: &str = "WHERE ";

impl SqlBuilder {
    /// Append `field condition ?` joined with `AND`
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlb::{SqlBuilder, Value};
    ///
    /// let mut sb = SqlBuilder::new();
    /// let sql = sb
    ///     .table("ta")
    ///     .where_cond("a", "<", 13)
    ///     .where_cond("b", "=", "xxx")
    ///     .query_sql()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "SELECT * FROM ta WHERE a < ? AND b = ?");
    /// assert_eq!(sb.query_params(), vec![Value::from(13), Value::from("xxx")]);
    /// ```
    pub fn where_cond<V>(&mut self, field: &str, condition: &str, value: V) -> &mut Self
    where
        V: Into<Value>,
    {
        self.push_where(Operator::And, field, condition, value.into())
    }

    /// Append `field condition ?` joined with `OR`
    pub fn where_or<V>(&mut self, field: &str, condition: &str, value: V) -> &mut Self
    where
        V: Into<Value>,
    {
        self.push_where(Operator::Or, field, condition, value.into())
    }

    /// Append a raw expression joined with `AND`
    ///
    /// `values` must match the placeholders of `expr` in count and order.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlb::{values, SqlBuilder};
    ///
    /// let mut sb = SqlBuilder::new();
    /// let sql = sb
    ///     .table("ta")
    ///     .where_cond("c", "=", 1)
    ///     .where_raw("(a = ? OR b = ?)", values!["x", 2])
    ///     .delete_sql()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "DELETE FROM ta WHERE c = ? AND (a = ? OR b = ?)");
    /// assert_eq!(sb.delete_params(), values![1, "x", 2]);
    /// ```
    pub fn where_raw<I, V>(&mut self, expr: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_where_raw(Operator::And, expr, values)
    }

    /// Append a raw expression joined with `OR`
    pub fn where_or_raw<I, V>(&mut self, expr: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_where_raw(Operator::Or, expr, values)
    }

    /// Append `field IN (?,...)` joined with `AND`
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlb::{values, SqlBuilder};
    ///
    /// let mut sb = SqlBuilder::new();
    /// let sql = sb
    ///     .table("ta")
    ///     .where_in("f", ["a", "b", "c"])
    ///     .query_sql()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "SELECT * FROM ta WHERE f IN (?,?,?)");
    /// assert_eq!(sb.query_params(), values!["a", "b", "c"]);
    /// ```
    pub fn where_in<I, V>(&mut self, field: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_where_in(Operator::And, "IN", field, values)
    }

    /// Append `field NOT IN (?,...)` joined with `AND`
    pub fn where_not_in<I, V>(&mut self, field: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_where_in(Operator::And, "NOT IN", field, values)
    }

    /// Append `field IN (?,...)` joined with `OR`
    pub fn where_or_in<I, V>(&mut self, field: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_where_in(Operator::Or, "IN", field, values)
    }

    /// Append `field NOT IN (?,...)` joined with `OR`
    pub fn where_or_not_in<I, V>(&mut self, field: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_where_in(Operator::Or, "NOT IN", field, values)
    }

    fn push_where(
        &mut self,
        operator: Operator,
        field: &str,
        condition: &str,
        value: Value,
    ) -> &mut Self {
        let expr = format!("{} {} ?", field, condition);
        self.where_cond.push(PREFIX, operator.separator(), &expr, [value]);
        self
    }

    fn push_where_raw<I, V>(&mut self, operator: Operator, expr: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.where_cond.push(
            PREFIX,
            operator.separator(),
            expr,
            values.into_iter().map(Into::into),
        );
        self
    }

    fn push_where_in<I, V>(
        &mut self,
        operator: Operator,
        condition: &str,
        field: &str,
        values: I,
    ) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<Value>>();
        let expr = format!("{} {} ({})", field, condition, placeholders(values.len()));
        self.where_cond.push(PREFIX, operator.separator(), &expr, values);
        self
    }
}
