//! # Having
//!
//! Same joining rules as `WHERE`, but every call is dropped unless a
//! `GROUP BY` has already been set on the builder.

use crate::{
    builder::{Operator, SqlBuilder},
    Value,
};

const PREFIX: &str = "HAVING ";

impl SqlBuilder {
    /// Append `field condition ?` joined with `AND`
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlb::SqlBuilder;
    ///
    /// let sql = SqlBuilder::new()
    ///     .table("ta")
    ///     .group_by("a")
    ///     .having("COUNT(a)", ">", 2)
    ///     .query_sql()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "SELECT * FROM ta GROUP BY a HAVING COUNT(a) > ?");
    /// ```
    pub fn having<V>(&mut self, field: &str, condition: &str, value: V) -> &mut Self
    where
        V: Into<Value>,
    {
        self.push_having(Operator::And, field, condition, value.into())
    }

    /// Append `field condition ?` joined with `OR`
    pub fn having_or<V>(&mut self, field: &str, condition: &str, value: V) -> &mut Self
    where
        V: Into<Value>,
    {
        self.push_having(Operator::Or, field, condition, value.into())
    }

    /// Append a raw expression joined with `AND`
    pub fn having_raw<I, V>(&mut self, expr: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_having_raw(Operator::And, expr, values)
    }

    /// Append a raw expression joined with `OR`
    pub fn having_raw_or<I, V>(&mut self, expr: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.push_having_raw(Operator::Or, expr, values)
    }

    fn push_having(
        &mut self,
        operator: Operator,
        field: &str,
        condition: &str,
        value: Value,
    ) -> &mut Self {
        let expr = format!("{} {} ?", field, condition);
        self.push_having_raw(operator, &expr, [value])
    }

    fn push_having_raw<I, V>(&mut self, operator: Operator, expr: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        if !self.group_by.is_set() {
            log::warn!("HAVING `{}` ignored, no GROUP BY set", expr);
            return self;
        }

        self.having.push(
            PREFIX,
            operator.separator(),
            expr,
            values.into_iter().map(Into::into),
        );
        self
    }
}
