//! # sqlb
//!
//! Fluent builder rendering `SELECT`, `INSERT`, `UPDATE` and `DELETE`
//! statements into a sql string with `?` placeholders plus the bind values
//! in placeholder order.

#[macro_use]
mod value;

mod builder;
mod clause;
mod delete;
mod filter;
mod having;
mod insert;
mod model;
mod select;
mod update;
mod where_cond;

#[cfg(feature = "sqlite")]
mod sqlite;

pub use sqlb_error as error;

pub use builder::{SqlBuilder, Statement};
pub use filter::Order;
pub use model::ToFields;
pub use value::Value;

#[cfg(feature = "sqlite")]
pub use sqlite::to_sqlite_params;
