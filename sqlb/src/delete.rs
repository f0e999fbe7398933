use sqlb_error::Result;

use crate::{builder::SqlBuilder, Value};

impl SqlBuilder {
    /// Build delete sql
    ///
    /// Without a where clause every row of the table is deleted.
    pub fn delete_sql(&self) -> Result<String> {
        let table = self.table_name()?;

        let sql = format!(
            "DELETE FROM {} {}",
            table,
            self.where_cond.text().unwrap_or_default()
        );
        log::trace!("Delete sql `{}` params {:?}", sql, self.delete_params());

        Ok(sql)
    }

    /// Bind values of [`SqlBuilder::delete_sql`]
    pub fn delete_params(&self) -> Vec<Value> {
        self.where_cond.params().to_vec()
    }
}
