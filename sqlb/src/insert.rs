use sqlb_error::Result;

use crate::{builder::SqlBuilder, clause::placeholders, Value};

impl SqlBuilder {
    /// Set insert fields and values
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlb::{values, SqlBuilder};
    ///
    /// let mut sb = SqlBuilder::new();
    /// let sql = sb
    ///     .table("test")
    ///     .insert(["a", "b", "c"], values![1, "x", 2.5])
    ///     .insert_sql()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "INSERT INTO test (a,b,c) VALUES (?,?,?)");
    /// assert_eq!(sb.insert_params(), values![1, "x", 2.5]);
    /// ```
    pub fn insert<F, S, I, V>(&mut self, fields: F, values: I) -> &mut Self
    where
        F: IntoIterator<Item = S>,
        S: ToString,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let fields = collect_fields(fields);
        let text = format!(
            "({}) VALUES ({})",
            fields.join(","),
            placeholders(fields.len())
        );

        self.insert.replace(text, values.into_iter().map(Into::into).collect());
        self
    }

    /// Set insert fields and several rows of values, no rows clears the statement
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlb::{values, SqlBuilder};
    ///
    /// let mut sb = SqlBuilder::new();
    /// let sql = sb
    ///     .table("test")
    ///     .insert_all(["name", "age"], [values!["t1", 18], values!["t2", 19]])
    ///     .insert_all_sql()
    ///     .unwrap();
    ///
    /// assert_eq!(&sql, "INSERT INTO test (name,age) VALUES (?,?),(?,?)");
    /// assert_eq!(sb.insert_all_params(), values!["t1", 18, "t2", 19]);
    /// ```
    pub fn insert_all<F, S, R, I, V>(&mut self, fields: F, rows: R) -> &mut Self
    where
        F: IntoIterator<Item = S>,
        S: ToString,
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let fields = collect_fields(fields);
        let group = format!("({})", placeholders(fields.len()));

        let mut groups = Vec::<&str>::new();
        let mut params = Vec::<Value>::new();
        for row in rows {
            groups.push(&group);
            params.extend(row.into_iter().map(Into::into));
        }

        if groups.is_empty() {
            self.insert_all = Default::default();
        } else {
            let text = format!("({}) VALUES {}", fields.join(","), groups.join(","));
            self.insert_all.replace(text, params);
        }

        self
    }

    /// Build insert sql
    pub fn insert_sql(&self) -> Result<String> {
        let table = self.table_name()?;
        let fragment = self
            .insert
            .text()
            .ok_or(sqlb_error::Error::InsertStatementEmpty)?;

        let sql = format!("INSERT INTO {} {}", table, fragment);
        log::trace!("Insert sql `{}` params {:?}", sql, self.insert_params());

        Ok(sql)
    }

    /// Bind values of [`SqlBuilder::insert_sql`]
    pub fn insert_params(&self) -> Vec<Value> {
        self.insert.params().to_vec()
    }

    /// Build multi-row insert sql
    pub fn insert_all_sql(&self) -> Result<String> {
        let table = self.table_name()?;
        let fragment = self
            .insert_all
            .text()
            .ok_or(sqlb_error::Error::InsertStatementEmpty)?;

        let sql = format!("INSERT INTO {} {}", table, fragment);
        log::trace!(
            "Insert all sql `{}` params {:?}",
            sql,
            self.insert_all_params()
        );

        Ok(sql)
    }

    /// Bind values of [`SqlBuilder::insert_all_sql`], row by row
    pub fn insert_all_params(&self) -> Vec<Value> {
        self.insert_all.params().to_vec()
    }
}

fn collect_fields<F, S>(fields: F) -> Vec<String>
where
    F: IntoIterator<Item = S>,
    S: ToString,
{
    fields.into_iter().map(|field| field.to_string()).collect()
}
