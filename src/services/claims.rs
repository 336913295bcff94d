// Claim service — CRUD plus the one domain state transition: marking a
// claim Completed. Complete is one-way and idempotent; the full-field
// update remains the deliberate escape hatch that can set any status.

use crate::db::{Claim, ClaimFields, ClaimSearch, FoodDb};
use crate::table::Table;

/// Create a claim from a full set of form fields. Both foreign keys are
/// validated by the store at write time.
pub fn create_claim(db: &FoodDb, fields: &ClaimFields) -> Result<String, String> {
    let id = db.insert_claim(fields).map_err(|e| e.to_string())?;
    log::info!(
        "Claim {} created for listing {} by receiver {}",
        id,
        fields.food_id,
        fields.receiver_id
    );
    Ok("Claim created successfully".to_string())
}

/// Filtered search, joined to food and receiver display names.
pub fn search_claims(db: &FoodDb, criteria: &ClaimSearch) -> Result<Table, String> {
    db.search_claims(criteria).map_err(|e| e.to_string())
}

/// Fetch the edit baseline for an update form.
pub fn get_claim(db: &FoodDb, id: i64) -> Result<Claim, String> {
    db.get_claim(id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Claim not found: {}", id))
}

/// Full-row replace. Every field must be supplied, current or new.
pub fn update_claim(db: &FoodDb, id: i64, fields: &ClaimFields) -> Result<String, String> {
    let affected = db.update_claim(id, fields).map_err(|e| e.to_string())?;
    if affected == 0 {
        return Err(format!("Claim not found: {}", id));
    }
    Ok("Claim updated successfully".to_string())
}

/// Hard delete by primary key.
pub fn delete_claim(db: &FoodDb, id: i64) -> Result<String, String> {
    let affected = db.delete_claim(id).map_err(|e| e.to_string())?;
    if affected == 0 {
        return Err(format!("Claim not found: {}", id));
    }
    log::info!("Claim {} deleted", id);
    Ok("Claim deleted".to_string())
}

/// Claims awaiting completion, newest first, with display names — the
/// selection list for `complete_claim`.
pub fn list_open_claims(db: &FoodDb) -> Result<Table, String> {
    db.list_open_claims().map_err(|e| e.to_string())
}

/// Mark a claim Completed. Safe to re-invoke: the statement sets the status
/// unconditionally, so a second call changes nothing and reports success.
pub fn complete_claim(db: &FoodDb, id: i64) -> Result<String, String> {
    let affected = db.complete_claim(id).map_err(|e| e.to_string())?;
    if affected == 0 {
        return Err(format!("Claim not found: {}", id));
    }
    log::info!("Claim {} marked as Completed", id);
    Ok("Claim marked as Completed".to_string())
}
