// Provider service — create/read/update/delete over the providers table.

use crate::db::{FoodDb, Provider, ProviderFields, ProviderSearch};
use crate::table::Table;

/// Create a provider from a full set of form fields.
pub fn create_provider(db: &FoodDb, fields: &ProviderFields) -> Result<String, String> {
    let id = db.insert_provider(fields).map_err(|e| e.to_string())?;
    log::info!("Provider '{}' created with id {}", fields.name, id);
    Ok(format!("Provider '{}' added successfully", fields.name))
}

/// Filtered search; no criteria returns the full table, newest first.
pub fn search_providers(db: &FoodDb, criteria: &ProviderSearch) -> Result<Table, String> {
    db.search_providers(criteria).map_err(|e| e.to_string())
}

/// Fetch the edit baseline for an update form.
pub fn get_provider(db: &FoodDb, id: i64) -> Result<Provider, String> {
    db.get_provider(id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Provider not found: {}", id))
}

/// Full-row replace. Every field must be supplied, current or new.
pub fn update_provider(db: &FoodDb, id: i64, fields: &ProviderFields) -> Result<String, String> {
    let affected = db.update_provider(id, fields).map_err(|e| e.to_string())?;
    if affected == 0 {
        return Err(format!("Provider not found: {}", id));
    }
    Ok("Provider updated successfully".to_string())
}

/// Hard delete by primary key. No cascade.
pub fn delete_provider(db: &FoodDb, id: i64) -> Result<String, String> {
    let affected = db.delete_provider(id).map_err(|e| e.to_string())?;
    if affected == 0 {
        return Err(format!("Provider not found: {}", id));
    }
    log::info!("Provider {} deleted", id);
    Ok("Provider deleted".to_string())
}
