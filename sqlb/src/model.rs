//! # Model
//!
//! Adapter letting a struct describe itself as ordered `(column, value)`
//! pairs, then feeding those into the regular insert/update composers.

use crate::{builder::SqlBuilder, Value};

pub trait ToFields {
    fn to_fields(&self) -> Vec<(String, Value)>;
}

impl SqlBuilder {
    /// Insert a single model
    ///
    /// # Examples
    ///
    /// ```
    /// use sqlb::{values, SqlBuilder, ToFields, Value};
    ///
    /// struct User {
    ///     name: String,
    ///     age: u32,
    /// }
    ///
    /// impl ToFields for User {
    ///     fn to_fields(&self) -> Vec<(String, Value)> {
    ///         vec![
    ///             ("name".into(), self.name.clone().into()),
    ///             ("age".into(), self.age.into()),
    ///         ]
    ///     }
    /// }
    ///
    /// let user = User { name: "t1".into(), age: 19 };
    /// let mut sb = SqlBuilder::new();
    /// let sql = sb.table("user").insert_model(&user).insert_sql().unwrap();
    ///
    /// assert_eq!(&sql, "INSERT INTO user (name,age) VALUES (?,?)");
    /// assert_eq!(sb.insert_params(), values!["t1", 19u32]);
    /// ```
    pub fn insert_model<M>(&mut self, model: &M) -> &mut Self
    where
        M: ToFields,
    {
        let (fields, values): (Vec<String>, Vec<Value>) = model.to_fields().into_iter().unzip();
        self.insert(fields, values)
    }

    /// Update columns from a model
    pub fn update_model<M>(&mut self, model: &M) -> &mut Self
    where
        M: ToFields,
    {
        let (fields, values): (Vec<String>, Vec<Value>) = model.to_fields().into_iter().unzip();
        self.update(fields, values)
    }

    /// Insert several models, the first one decides the field list
    pub fn insert_all_model<M>(&mut self, models: &[M]) -> &mut Self
    where
        M: ToFields,
    {
        let mut fields = Vec::<String>::new();
        let mut rows = Vec::<Vec<Value>>::new();
        for (i, model) in models.iter().enumerate() {
            let (names, values): (Vec<String>, Vec<Value>) =
                model.to_fields().into_iter().unzip();
            if i == 0 {
                fields = names;
            }
            rows.push(values);
        }

        self.insert_all(fields, rows)
    }
}
