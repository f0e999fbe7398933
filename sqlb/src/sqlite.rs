//! # Sqlite bridge
//!
//! Lets the bind list be passed straight to `rusqlite`:
//!
//! ```ignore
//! let params = sb.query_params();
//! stmt.query(rusqlite::params_from_iter(params.iter()))?;
//! ```

use crate::Value;

impl rusqlite::ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        match &self {
            Value::Null => <Option<u8> as rusqlite::ToSql>::to_sql(&None),
            Value::Bool(v) => <bool as rusqlite::ToSql>::to_sql(v),
            Value::SignedInt(v) => <i64 as rusqlite::ToSql>::to_sql(v),
            Value::UnsignedInt(v) => <u64 as rusqlite::ToSql>::to_sql(v),
            Value::Float(v) => <f64 as rusqlite::ToSql>::to_sql(v),
            Value::Str(v) => <String as rusqlite::ToSql>::to_sql(v),
            Value::Bytes(v) => <Vec<u8> as rusqlite::ToSql>::to_sql(v),
        }
    }
}

/// Borrow a bind list as `rusqlite` params
pub fn to_sqlite_params(params: &[Value]) -> Vec<&'_ dyn rusqlite::ToSql> {
    params.iter().map(|v| v as &dyn rusqlite::ToSql).collect()
}
