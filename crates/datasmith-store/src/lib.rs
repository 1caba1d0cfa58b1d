//! Relational materialization for Datasmith.
//!
//! Creates physical SQLite tables from a Definition and bulk-loads
//! generated rows, one transaction per table. Also provides the read-back
//! surface the exporters and the run report consume.

pub mod ddl;
pub mod errors;
pub mod store;

pub use ddl::{column_specs, create_table_statement, sql_type_for, ColumnSpec};
pub use errors::StoreError;
pub use store::{ColumnMeta, Store, StoredValue, TableData, TableStats};
