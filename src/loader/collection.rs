use crate::error::{ConvertError, Result};
use crate::models::collection::Collection;
use std::fs;
use std::path::Path;

/// Load a Postman collection from a JSON file
pub fn load_collection<P: AsRef<Path>>(path: P) -> Result<Collection> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        ConvertError::CollectionLoadError(format!("Failed to read file {}: {}", path.display(), e))
    })?;

    parse_collection(&content)
}

/// Parse a Postman collection from JSON text
pub fn parse_collection(content: &str) -> Result<Collection> {
    let document: serde_json::Value = serde_json::from_str(content).map_err(|e| {
        ConvertError::CollectionLoadError(format!("Failed to parse collection JSON: {}", e))
    })?;

    // The only structural requirement checked up front is the top-level item array
    if !document.get("item").is_some_and(serde_json::Value::is_array) {
        return Err(ConvertError::InvalidCollection(
            "collection must have an 'item' array".to_string(),
        ));
    }

    serde_json::from_value(document)
        .map_err(|e| ConvertError::InvalidCollection(format!("Malformed collection item: {}", e)))
}
