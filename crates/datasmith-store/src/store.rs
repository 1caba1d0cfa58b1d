use std::path::{Path, PathBuf};

use rusqlite::types::{Value as SqlValue, ValueRef};
use rusqlite::{params_from_iter, Connection};
use serde::{Deserialize, Serialize};
use tracing::info;

use datasmith_core::TableDef;
use datasmith_generate::{GeneratedValue, Row};

use crate::ddl::{column_specs, create_table_statement, ColumnSpec};
use crate::errors::StoreError;

/// A value read back from a materialized table.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    Null,
    Int(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

/// Column metadata read back from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub decl_type: String,
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub primary_key: bool,
}

/// Full contents of one materialized table.
#[derive(Debug, Clone)]
pub struct TableData {
    pub columns: Vec<ColumnMeta>,
    pub rows: Vec<Vec<StoredValue>>,
}

/// Per-table statistics for the run report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableStats {
    pub table: String,
    pub record_count: u64,
    pub columns: Vec<ColumnMeta>,
}

/// SQLite-backed relational destination.
///
/// One connection per store, blocking I/O throughout. Referential
/// integrity is deliberately not enforced: declared foreign keys land in
/// the DDL as metadata and `PRAGMA foreign_keys` stays off.
pub struct Store {
    conn: Connection,
    location: String,
}

impl Store {
    /// Open a destination identified by a connection string.
    ///
    /// Accepts `sqlite://<path>`, a plain filesystem path, or `:memory:`.
    pub fn open(conn_str: &str) -> Result<Self, StoreError> {
        let location = conn_str
            .strip_prefix("sqlite://")
            .unwrap_or(conn_str)
            .to_string();

        let conn = if location == ":memory:" {
            Connection::open_in_memory()
        } else {
            Connection::open(&location)
        }
        .map_err(|source| StoreError::Open {
            path: location.clone(),
            source,
        })?;

        info!(store = %location, "store opened");
        Ok(Self { conn, location })
    }

    /// Default file-based destination under the working directory.
    pub fn default_path(work_dir: &Path, name: &str) -> PathBuf {
        work_dir.join(format!("{name}.db"))
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Create the physical table for a Definition table, injecting a
    /// surrogate key when none is declared.
    pub fn create_table(
        &self,
        table_name: &str,
        table: &TableDef,
    ) -> Result<Vec<ColumnSpec>, StoreError> {
        let columns = column_specs(table);
        let statement = create_table_statement(table_name, &columns, &table.foreign_keys);
        self.conn
            .execute_batch(&statement)
            .map_err(|source| StoreError::CreateTable {
                table: table_name.to_string(),
                source,
            })?;

        info!(table = table_name, columns = columns.len(), "table created");
        Ok(columns)
    }

    /// Bulk-insert generated rows inside one transaction.
    ///
    /// On failure the transaction rolls back and the error names the
    /// table; previously loaded tables remain committed.
    pub fn insert_rows(
        &mut self,
        table_name: &str,
        table: &TableDef,
        rows: &[Row],
    ) -> Result<u64, StoreError> {
        let fields: Vec<&str> = table.fields.keys().map(String::as_str).collect();
        let placeholders: Vec<String> = (1..=fields.len()).map(|i| format!("?{i}")).collect();
        let statement = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            crate::ddl::quote_ident(table_name),
            fields
                .iter()
                .map(|name| crate::ddl::quote_ident(name))
                .collect::<Vec<_>>()
                .join(", "),
            placeholders.join(", ")
        );

        let wrap = |source: rusqlite::Error| StoreError::Insert {
            table: table_name.to_string(),
            source,
        };

        let tx = self.conn.transaction().map_err(wrap)?;
        {
            let mut prepared = tx.prepare(&statement).map_err(wrap)?;
            for row in rows {
                let params: Vec<SqlValue> = fields
                    .iter()
                    .map(|field| {
                        row.get(*field)
                            .map(to_sql_value)
                            .unwrap_or(SqlValue::Null)
                    })
                    .collect();
                prepared.execute(params_from_iter(params)).map_err(wrap)?;
            }
        }
        tx.commit().map_err(wrap)?;

        info!(table = table_name, rows = rows.len(), "rows committed");
        Ok(rows.len() as u64)
    }

    /// Names of all materialized tables, in creation order.
    pub fn table_names(&self) -> Result<Vec<String>, StoreError> {
        let mut statement = self.conn.prepare(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'",
        )?;
        let names = statement
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// The table's creation statement, as recorded by the database.
    pub fn create_table_sql(&self, table_name: &str) -> Result<String, StoreError> {
        self.conn
            .query_row(
                "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table_name],
                |row| row.get::<_, String>(0),
            )
            .map_err(|source| StoreError::Read {
                table: table_name.to_string(),
                source,
            })
    }

    /// Column metadata for a materialized table.
    pub fn column_meta(&self, table_name: &str) -> Result<Vec<ColumnMeta>, StoreError> {
        let wrap = |source: rusqlite::Error| StoreError::Read {
            table: table_name.to_string(),
            source,
        };

        let mut statement = self
            .conn
            .prepare(&format!(
                "PRAGMA table_info({})",
                crate::ddl::quote_ident(table_name)
            ))
            .map_err(wrap)?;
        let columns = statement
            .query_map([], |row| {
                Ok(ColumnMeta {
                    name: row.get(1)?,
                    decl_type: row.get(2)?,
                    primary_key: row.get::<_, i64>(5)? > 0,
                })
            })
            .map_err(wrap)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(wrap)?;
        Ok(columns)
    }

    /// Read back a full table for export.
    pub fn read_table(&self, table_name: &str) -> Result<TableData, StoreError> {
        let wrap = |source: rusqlite::Error| StoreError::Read {
            table: table_name.to_string(),
            source,
        };

        let columns = self.column_meta(table_name)?;
        let mut statement = self
            .conn
            .prepare(&format!(
                "SELECT * FROM {}",
                crate::ddl::quote_ident(table_name)
            ))
            .map_err(wrap)?;

        let column_count = statement.column_count();
        let rows = statement
            .query_map([], |row| {
                let mut values = Vec::with_capacity(column_count);
                for index in 0..column_count {
                    values.push(stored_value(row.get_ref(index)?));
                }
                Ok(values)
            })
            .map_err(wrap)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(wrap)?;

        Ok(TableData { columns, rows })
    }

    /// Per-table record counts and column metadata.
    pub fn table_stats(&self) -> Result<Vec<TableStats>, StoreError> {
        let mut stats = Vec::new();
        for table_name in self.table_names()? {
            let record_count: i64 = self
                .conn
                .query_row(
                    &format!(
                        "SELECT COUNT(*) FROM {}",
                        crate::ddl::quote_ident(&table_name)
                    ),
                    [],
                    |row| row.get(0),
                )
                .map_err(|source| StoreError::Read {
                    table: table_name.clone(),
                    source,
                })?;
            let columns = self.column_meta(&table_name)?;
            stats.push(TableStats {
                table: table_name,
                record_count: record_count.max(0) as u64,
                columns,
            });
        }
        Ok(stats)
    }
}

fn to_sql_value(value: &GeneratedValue) -> SqlValue {
    match value {
        GeneratedValue::Null => SqlValue::Null,
        GeneratedValue::Bool(flag) => SqlValue::Integer(i64::from(*flag)),
        GeneratedValue::Int(n) => SqlValue::Integer(*n),
        GeneratedValue::Float(x) => SqlValue::Real(*x),
        GeneratedValue::Text(text) => SqlValue::Text(text.clone()),
        GeneratedValue::Date(date) => SqlValue::Text(date.format("%Y-%m-%d").to_string()),
        GeneratedValue::Timestamp(ts) => {
            SqlValue::Text(ts.format("%Y-%m-%d %H:%M:%S").to_string())
        }
    }
}

fn stored_value(value: ValueRef<'_>) -> StoredValue {
    match value {
        ValueRef::Null => StoredValue::Null,
        ValueRef::Integer(n) => StoredValue::Int(n),
        ValueRef::Real(x) => StoredValue::Real(x),
        ValueRef::Text(bytes) => StoredValue::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => StoredValue::Blob(bytes.to_vec()),
    }
}
