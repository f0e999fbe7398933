use sqlb_error::Result;

use crate::{builder::SqlBuilder, clause::collect_params, Value};

impl SqlBuilder {
    /// Set update fields and values, an empty field list clears the assignments
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlb::{values, SqlBuilder};
    ///
    /// let mut sb = SqlBuilder::new();
    /// let sql = sb
    ///     .table("test")
    ///     .update(["a", "b"], values![3, 4])
    ///     .where_cond("id", "=", 1)
    ///     .update_sql()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "UPDATE test SET a = ?,b = ? WHERE id = ?");
    /// assert_eq!(sb.update_params(), values![3, 4, 1]);
    /// ```
    pub fn update<F, S, I, V>(&mut self, fields: F, values: I) -> &mut Self
    where
        F: IntoIterator<Item = S>,
        S: ToString,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let assignments = fields
            .into_iter()
            .map(|field| format!("{} = ?", field.to_string()))
            .collect::<Vec<String>>();

        if assignments.is_empty() {
            self.update = Default::default();
        } else {
            self.update.replace(
                assignments.join(","),
                values.into_iter().map(Into::into).collect(),
            );
        }

        self
    }

    /// Build update sql
    ///
    /// Without a where clause every row of the table is updated.
    pub fn update_sql(&self) -> Result<String> {
        let table = self.table_name()?;
        let assignments = self
            .update
            .text()
            .ok_or(sqlb_error::Error::UpdateStatementEmpty)?;

        let sql = format!(
            "UPDATE {} SET {} {}",
            table,
            assignments,
            self.where_cond.text().unwrap_or_default()
        );
        log::trace!("Update sql `{}` params {:?}", sql, self.update_params());

        Ok(sql)
    }

    /// Bind values of [`SqlBuilder::update_sql`], ordered update, where
    pub fn update_params(&self) -> Vec<Value> {
        collect_params(&[&self.update, &self.where_cond])
    }
}
