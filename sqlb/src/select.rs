use sqlb_error::Result;

use crate::{builder::SqlBuilder, clause::collect_params, Value};

impl SqlBuilder {
    /// Set columns, an empty list selects `*`
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlb::SqlBuilder;
    ///
    /// let sql = SqlBuilder::new()
    ///     .table("ta")
    ///     .select(["a", "COUNT(b) AS n"])
    ///     .query_sql()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "SELECT a,COUNT(b) AS n FROM ta");
    /// ```
    pub fn select<T, S>(&mut self, cols: T) -> &mut Self
    where
        T: IntoIterator<Item = S>,
        S: ToString,
    {
        let cols = cols
            .into_iter()
            .map(|col| col.to_string())
            .collect::<Vec<String>>();

        if cols.is_empty() {
            self.select = Default::default();
        } else {
            self.select.replace(cols.join(","), vec![]);
        }

        self
    }

    /// Build select sql
    pub fn query_sql(&self) -> Result<String> {
        let table = self.table_name()?;

        let mut parts = Vec::<&str>::new();

        // Build prefix
        parts.push("SELECT");
        parts.push(self.select.text().unwrap_or("*"));

        // Build table
        parts.push("FROM");
        parts.push(table);

        // Build clauses
        for clause in [
            &self.join,
            &self.where_cond,
            &self.group_by,
            &self.having,
            &self.order_by,
            &self.limit,
        ] {
            if let Some(text) = clause.text() {
                parts.push(text);
            }
        }

        let sql = parts.join(" ");
        log::trace!("Query sql `{}` params {:?}", sql, self.query_params());

        Ok(sql)
    }

    /// Bind values of [`SqlBuilder::query_sql`], ordered join, where, having, limit
    pub fn query_params(&self) -> Vec<Value> {
        collect_params(&[&self.join, &self.where_cond, &self.having, &self.limit])
    }
}
