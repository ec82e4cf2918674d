//! Serialization and output of the generated artifacts.
//!
//! This module turns the derived route table into JSON for inspection and
//! writes generated files into the migration target.

use crate::deriver::RouteDescriptor;
use crate::templates::GeneratedFile;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Serializes the route table to pretty-printed JSON.
///
/// # Example
///
/// ```
/// use route_migrate::deriver::RouteDescriptor;
/// use route_migrate::serializer::serialize_routes_json;
///
/// let routes = vec![RouteDescriptor {
///     path: "/blog".to_string(),
///     has_page: true,
///     source: "./app/blog".to_string(),
///     children: vec![],
/// }];
/// let json = serialize_routes_json(&routes).unwrap();
/// assert!(json.contains("\"hasPage\": true"));
/// ```
pub fn serialize_routes_json(routes: &[RouteDescriptor]) -> Result<String> {
    debug!("Serializing route table to JSON");
    serde_json::to_string_pretty(routes)
        .context("Failed to serialize route table to JSON")
}

/// Writes string content to a file.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
/// Missing parent directories are created.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Writes every generated file below `target`, returning the written paths.
pub fn write_generated_files(
    files: &[GeneratedFile],
    target: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = target.join(file.name);
        write_to_file(&file.contents, &path)?;
        written.push(path);
    }
    Ok(written)
}
