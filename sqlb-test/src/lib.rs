use rusqlite::Connection;
use serde::Serialize;
use sqlb::{ToFields, Value};

/// Column set shared by the integration tests
pub const SCHEMA: &str = "CREATE TABLE test (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    class TEXT
);
CREATE TABLE class (
    name TEXT PRIMARY KEY,
    teacher TEXT NOT NULL
);";

pub fn run_test<F>(f: F)
where
    F: FnOnce(&Connection),
{
    env_logger::try_init().ok();

    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(SCHEMA).unwrap();

    f(&conn);
}

/// Execute a statement, returning the affected row count
pub fn execute(conn: &Connection, sql: &str, params: &[Value]) -> usize {
    conn.execute(sql, &sqlb::to_sqlite_params(params)[..])
        .unwrap_or_else(|e| panic!("Execute `{}` error: {}", sql, e))
}

/// Run a query and map every row to `(name, age)`
pub fn query_name_age(conn: &Connection, sql: &str, params: &[Value]) -> Vec<(String, i64)> {
    let mut stmt = conn
        .prepare(sql)
        .unwrap_or_else(|e| panic!("Prepare `{}` error: {}", sql, e));

    let rows = stmt
        .query_map(&sqlb::to_sqlite_params(params)[..], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })
        .unwrap();

    rows.collect::<rusqlite::Result<Vec<_>>>().unwrap()
}

/// [`ToFields`] through serde, columns follow struct field order
pub struct SerdeModel<'a, T>(pub &'a T);

impl<T: Serialize> ToFields for SerdeModel<'_, T> {
    fn to_fields(&self) -> Vec<(String, Value)> {
        match serde_json::to_value(self.0) {
            Ok(serde_json::Value::Object(map)) => map
                .into_iter()
                .map(|(k, v)| (k, json_to_value(v)))
                .collect(),
            _ => vec![],
        }
    }
}

fn json_to_value(v: serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(v) => Value::Bool(v),
        serde_json::Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                Value::SignedInt(v)
            } else if let Some(v) = n.as_u64() {
                Value::UnsignedInt(v)
            } else {
                Value::Float(n.as_f64().unwrap_or_default())
            }
        }
        serde_json::Value::String(v) => Value::Str(v),
        other => Value::Str(other.to_string()),
    }
}
