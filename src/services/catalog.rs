use crate::core::validate_location;
use crate::error::CatalogError;
use crate::models::LocationRecord;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// A catalog entry that was left out of the loaded catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRecord {
    /// Position in the source array
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

/// Outcome of loading a catalog: the usable locations plus a report of the
/// records that were skipped
#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    pub locations: Vec<LocationRecord>,
    pub skipped: Vec<SkippedRecord>,
}

/// Parse a JSON array of locations.
///
/// A record that does not deserialize or fails validation is skipped and
/// reported; it never prevents the rest of the catalog from loading.
pub fn load_catalog_from_str(json: &str) -> Result<CatalogLoad, CatalogError> {
    let documents: Vec<Value> = serde_json::from_str(json)?;
    let mut load = CatalogLoad::default();

    for (index, doc) in documents.into_iter().enumerate() {
        let id = doc.get("id").and_then(|v| v.as_str()).map(str::to_owned);

        let outcome = serde_json::from_value::<LocationRecord>(doc)
            .map_err(|e| e.to_string())
            .and_then(|record| {
                validate_location(&record)
                    .map(|_| record)
                    .map_err(|e| e.to_string())
            });

        match outcome {
            Ok(record) => load.locations.push(record),
            Err(reason) => {
                tracing::warn!("Skipping catalog record {} ({:?}): {}", index, id, reason);
                load.skipped.push(SkippedRecord { index, id, reason });
            }
        }
    }

    tracing::info!(
        "Parsed catalog: {} locations, {} skipped",
        load.locations.len(),
        load.skipped.len()
    );

    Ok(load)
}

/// Read and parse a catalog file
pub async fn load_catalog_from_path<P: AsRef<Path>>(path: P) -> Result<CatalogLoad, CatalogError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    load_catalog_from_str(&contents)
}
