use crate::error::InventoryError;
use crate::types::ReportData;

/// Pretty JSON document of the report. Non-finite converted prices become `null`.
///
/// # Errors
/// Returns [`InventoryError::Json`] if serialization fails.
pub fn to_json(data: &ReportData) -> Result<String, InventoryError> {
    Ok(serde_json::to_string_pretty(data)?)
}
