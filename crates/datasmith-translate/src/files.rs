use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use datasmith_core::{validate_definition, Definition};

use crate::errors::TranslateError;
use crate::swagger::SwaggerDocument;

/// Load a Swagger/OpenAPI-like document from a JSON or YAML file.
pub fn load_swagger_file(path: &Path) -> Result<SwaggerDocument, TranslateError> {
    if !path.exists() {
        return Err(TranslateError::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let document = match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&contents)?,
        _ => serde_json::from_str(&contents)?,
    };

    info!(path = %path.display(), "loaded schema document");
    Ok(document)
}

/// Persist a Definition as pretty-printed JSON, creating parent directories.
pub fn save_definition(definition: &Definition, path: &Path) -> Result<PathBuf, TranslateError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_vec_pretty(definition)?)?;
    info!(path = %path.display(), "definition saved");
    Ok(path.to_path_buf())
}

/// Load a Definition file, failing fast when `tables` is missing or empty.
pub fn load_definition(path: &Path) -> Result<Definition, TranslateError> {
    if !path.exists() {
        return Err(TranslateError::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path)?;
    let definition: Definition = serde_json::from_str(&contents)?;
    validate_definition(&definition)?;

    info!(
        path = %path.display(),
        tables = definition.tables.len(),
        "loaded definition"
    );
    Ok(definition)
}
