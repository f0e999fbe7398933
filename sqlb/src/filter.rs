//! # Filter
//!
//! `JOIN`, `GROUP BY`, `ORDER BY` and `LIMIT` composers.

use std::fmt;

use crate::{builder::SqlBuilder, Value};

/// Sort direction, applied to the whole `ORDER BY` list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("ASC"),
            Self::Desc => f.write_str("DESC"),
        }
    }
}

impl SqlBuilder {
    /// Append a raw join clause, separated from previous ones by a space
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlb::{values, SqlBuilder};
    ///
    /// let mut sb = SqlBuilder::new();
    /// let sql = sb
    ///     .table("t1")
    ///     .join_raw("LEFT JOIN t2 ON t1.a = t2.a AND t2.b = ?", values![1])
    ///     .join_raw("INNER JOIN t3 ON t1.c = t3.c", values![])
    ///     .where_cond("t1.d", "=", 2)
    ///     .query_sql()
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     &sql,
    ///     "SELECT * FROM t1 LEFT JOIN t2 ON t1.a = t2.a AND t2.b = ? INNER JOIN t3 ON t1.c = t3.c WHERE t1.d = ?"
    /// );
    /// assert_eq!(sb.query_params(), values![1, 2]);
    /// ```
    pub fn join_raw<I, V>(&mut self, expr: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.join.push("", " ", expr, values.into_iter().map(Into::into));
        self
    }

    /// Set a single group by field
    pub fn group_by(&mut self, field: &str) -> &mut Self {
        self.group_by.replace(format!("GROUP BY {}", field), vec![]);
        self
    }

    /// Set order by list with one trailing direction
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlb::{Order, SqlBuilder};
    ///
    /// let sql = SqlBuilder::new()
    ///     .table("ta")
    ///     .order_by(Order::Asc, ["a", "b"])
    ///     .query_sql()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "SELECT * FROM ta ORDER BY a,b ASC");
    /// ```
    pub fn order_by<T, S>(&mut self, order: Order, fields: T) -> &mut Self
    where
        T: IntoIterator<Item = S>,
        S: ToString,
    {
        let fields = fields
            .into_iter()
            .map(|field| field.to_string())
            .collect::<Vec<String>>();
        self.order_by
            .replace(format!("ORDER BY {} {}", fields.join(","), order), vec![]);
        self
    }

    /// Set `LIMIT ? OFFSET ?` with params `[offset, count]`
    ///
    /// `offset` binds to the `LIMIT` placeholder and `count` to `OFFSET`.
    pub fn limit<O, C>(&mut self, offset: O, count: C) -> &mut Self
    where
        O: Into<Value>,
        C: Into<Value>,
    {
        self.limit.replace(
            "LIMIT ? OFFSET ?".into(),
            vec![offset.into(), count.into()],
        );
        self
    }
}

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn test_single_fragment_setters_overwrite() {
        let mut sb = SqlBuilder::new();
        let sql = sb
            .table("ta")
            .group_by("a")
            .group_by("b")
            .order_by(Order::Asc, ["a"])
            .order_by(Order::Desc, ["b", "c"])
            .limit(0, 10)
            .limit(20, 5)
            .query_sql()
            .unwrap();

        assert_eq!(
            &sql,
            "SELECT * FROM ta GROUP BY b ORDER BY b,c DESC LIMIT ? OFFSET ?"
        );
        assert_eq!(sb.query_params(), values![20, 5]);
    }

    #[test]
    fn test_limit_keeps_value_types() {
        let mut sb = SqlBuilder::new();
        sb.table("ta").limit(0u64, "10");

        assert_eq!(sb.query_sql().unwrap(), "SELECT * FROM ta LIMIT ? OFFSET ?");
        assert_eq!(
            sb.query_params(),
            vec![Value::UnsignedInt(0), Value::Str("10".into())]
        );
    }

    #[test]
    fn test_order_display() {
        assert_eq!(Order::Asc.to_string(), "ASC");
        assert_eq!(Order::Desc.to_string(), "DESC");
    }
}
