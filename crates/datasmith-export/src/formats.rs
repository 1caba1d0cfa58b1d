use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use rust_xlsxwriter::{Workbook, Worksheet};
use serde_json::{Map, Value};
use tracing::warn;

use datasmith_store::{Store, StoredValue, TableData};

use crate::errors::ExportError;
use crate::model::FormatOutcome;

/// XLSX sheet names are capped by the format.
const SHEET_NAME_LIMIT: usize = 31;

/// Comma-delimited export, one file per table, UTF-8 with a byte-order
/// marker so non-Latin scripts open correctly in spreadsheet tools.
pub fn export_csv(store: &Store, dir: &Path) -> FormatOutcome {
    per_table_export(store, dir, |store, dir, table| {
        let data = store.read_table(table)?;
        let path = dir.join(format!("{table}.csv"));
        let mut file = File::create(&path)?;
        file.write_all("\u{feff}".as_bytes())?;

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(data.columns.iter().map(|column| column.name.as_str()))?;
        for row in &data.rows {
            writer.write_record(row.iter().map(value_text))?;
        }
        writer.flush()?;
        Ok(path.display().to_string())
    })
}

/// Structured export: one array-of-objects file per table plus a combined
/// file keyed by table name.
pub fn export_json(store: &Store, dir: &Path) -> FormatOutcome {
    let mut outcome = FormatOutcome {
        location: dir.display().to_string(),
        ..FormatOutcome::default()
    };
    let tables = match store.table_names() {
        Ok(tables) => tables,
        Err(err) => return FormatOutcome::failed(dir.display().to_string(), err.to_string()),
    };

    let mut combined = Map::new();
    for table in tables {
        match write_table_json(store, dir, &table) {
            Ok((path, records)) => {
                combined.insert(table.clone(), records);
                outcome.files.insert(table, path);
            }
            Err(err) => {
                warn!(table = %table, error = %err, "json export failed for table");
                outcome.errors.insert(table, err.to_string());
            }
        }
    }

    let combined_path = dir.join("combined_data.json");
    match serde_json::to_vec_pretty(&Value::Object(combined))
        .map_err(ExportError::from)
        .and_then(|bytes| fs::write(&combined_path, bytes).map_err(ExportError::from))
    {
        Ok(()) => {
            outcome
                .files
                .insert("combined".to_string(), combined_path.display().to_string());
        }
        Err(err) => {
            warn!(error = %err, "combined json export failed");
            outcome.errors.insert("combined".to_string(), err.to_string());
        }
    }

    outcome.file_count = outcome.files.len();
    outcome
}

/// Spreadsheet export: one combined workbook with a sheet per table, plus
/// standalone per-table workbooks.
pub fn export_xlsx(store: &Store, dir: &Path) -> FormatOutcome {
    let mut outcome = FormatOutcome {
        location: dir.display().to_string(),
        ..FormatOutcome::default()
    };
    let tables = match store.table_names() {
        Ok(tables) => tables,
        Err(err) => return FormatOutcome::failed(dir.display().to_string(), err.to_string()),
    };

    match write_combined_xlsx(store, dir, &tables) {
        Ok(path) => {
            outcome.files.insert("combined".to_string(), path);
        }
        Err(err) => {
            warn!(error = %err, "combined xlsx export failed");
            outcome.errors.insert("combined".to_string(), err.to_string());
        }
    }

    for table in tables {
        match write_table_xlsx(store, dir, &table) {
            Ok(path) => {
                outcome.files.insert(table, path);
            }
            Err(err) => {
                warn!(table = %table, error = %err, "xlsx export failed for table");
                outcome.errors.insert(table, err.to_string());
            }
        }
    }

    outcome.file_count = outcome.files.len();
    outcome
}

/// SQL script export: the table's creation statement followed by one
/// INSERT per row.
pub fn export_sql(store: &Store, dir: &Path) -> FormatOutcome {
    per_table_export(store, dir, |store, dir, table| {
        let ddl = store.create_table_sql(table)?;
        let data = store.read_table(table)?;
        let columns: Vec<&str> = data
            .columns
            .iter()
            .map(|column| column.name.as_str())
            .collect();

        let mut script = String::new();
        script.push_str(&ddl);
        script.push_str(";\n\n");
        for row in &data.rows {
            let values: Vec<String> = row.iter().map(sql_value_literal).collect();
            script.push_str(&format!(
                "INSERT INTO {} ({}) VALUES ({});\n",
                table,
                columns.join(", "),
                values.join(", ")
            ));
        }

        let path = dir.join(format!("{table}.sql"));
        fs::write(&path, script)?;
        Ok(path.display().to_string())
    })
}

/// Literal form of a stored value inside an INSERT statement: NULL stays
/// bare, numbers stay unquoted, everything else is single-quoted with
/// internal quotes doubled.
pub fn sql_value_literal(value: &StoredValue) -> String {
    match value {
        StoredValue::Null => "NULL".to_string(),
        StoredValue::Int(n) => n.to_string(),
        StoredValue::Real(x) => x.to_string(),
        StoredValue::Text(text) => quote_literal(text),
        StoredValue::Blob(bytes) => quote_literal(&String::from_utf8_lossy(bytes)),
    }
}

fn quote_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

fn per_table_export(
    store: &Store,
    dir: &Path,
    write_table: impl Fn(&Store, &Path, &str) -> Result<String, ExportError>,
) -> FormatOutcome {
    let mut outcome = FormatOutcome {
        location: dir.display().to_string(),
        ..FormatOutcome::default()
    };
    let tables = match store.table_names() {
        Ok(tables) => tables,
        Err(err) => return FormatOutcome::failed(dir.display().to_string(), err.to_string()),
    };

    for table in tables {
        match write_table(store, dir, &table) {
            Ok(path) => {
                outcome.files.insert(table, path);
            }
            Err(err) => {
                warn!(table = %table, error = %err, "export failed for table");
                outcome.errors.insert(table, err.to_string());
            }
        }
    }

    outcome.file_count = outcome.files.len();
    outcome
}

fn write_table_json(
    store: &Store,
    dir: &Path,
    table: &str,
) -> Result<(String, Value), ExportError> {
    let data = store.read_table(table)?;
    let records = table_records(&data);
    let path = dir.join(format!("{table}.json"));
    fs::write(&path, serde_json::to_vec_pretty(&records)?)?;
    Ok((path.display().to_string(), records))
}

fn table_records(data: &TableData) -> Value {
    let rows: Vec<Value> = data
        .rows
        .iter()
        .map(|row| {
            let mut object = Map::new();
            for (column, value) in data.columns.iter().zip(row) {
                object.insert(column.name.clone(), json_value(value));
            }
            Value::Object(object)
        })
        .collect();
    Value::Array(rows)
}

fn json_value(value: &StoredValue) -> Value {
    match value {
        StoredValue::Null => Value::Null,
        StoredValue::Int(n) => Value::from(*n),
        StoredValue::Real(x) => serde_json::Number::from_f64(*x)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        StoredValue::Text(text) => Value::String(text.clone()),
        StoredValue::Blob(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn write_combined_xlsx(
    store: &Store,
    dir: &Path,
    tables: &[String],
) -> Result<String, ExportError> {
    let mut workbook = Workbook::new();
    for table in tables {
        let data = store.read_table(table)?;
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet_name(table))?;
        fill_sheet(worksheet, &data)?;
    }
    let path = dir.join("combined_data.xlsx");
    workbook.save(&path)?;
    Ok(path.display().to_string())
}

fn write_table_xlsx(store: &Store, dir: &Path, table: &str) -> Result<String, ExportError> {
    let data = store.read_table(table)?;
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(table))?;
    fill_sheet(worksheet, &data)?;
    let path = dir.join(format!("{table}.xlsx"));
    workbook.save(&path)?;
    Ok(path.display().to_string())
}

fn sheet_name(table: &str) -> String {
    table.chars().take(SHEET_NAME_LIMIT).collect()
}

fn fill_sheet(worksheet: &mut Worksheet, data: &TableData) -> Result<(), ExportError> {
    for (col, column) in data.columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, column.name.as_str())?;
    }
    for (index, row) in data.rows.iter().enumerate() {
        let row_number = (index + 1) as u32;
        for (col, value) in row.iter().enumerate() {
            let col = col as u16;
            match value {
                StoredValue::Null => {}
                StoredValue::Int(n) => {
                    worksheet.write_number(row_number, col, *n as f64)?;
                }
                StoredValue::Real(x) => {
                    worksheet.write_number(row_number, col, *x)?;
                }
                StoredValue::Text(text) => {
                    worksheet.write_string(row_number, col, text.as_str())?;
                }
                StoredValue::Blob(bytes) => {
                    worksheet.write_string(
                        row_number,
                        col,
                        String::from_utf8_lossy(bytes).as_ref(),
                    )?;
                }
            }
        }
    }
    Ok(())
}

fn value_text(value: &StoredValue) -> String {
    match value {
        StoredValue::Null => String::new(),
        StoredValue::Int(n) => n.to_string(),
        StoredValue::Real(x) => x.to_string(),
        StoredValue::Text(text) => text.clone(),
        StoredValue::Blob(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}
