// Food listing service — CRUD over food_listings, with the quantity bound
// enforced at this boundary (the store's CHECK constraint is the backstop).

use crate::db::{FoodDb, Listing, ListingFields, ListingSearch};
use crate::table::Table;

/// Create a listing from a full set of form fields. Quantity must be at
/// least 1; the provider reference is validated by the store.
pub fn create_listing(db: &FoodDb, fields: &ListingFields) -> Result<String, String> {
    validate_quantity(fields.quantity)?;
    let id = db.insert_listing(fields).map_err(|e| e.to_string())?;
    log::info!("Listing '{}' created with id {}", fields.food_name, id);
    Ok(format!("Food listing '{}' added successfully", fields.food_name))
}

/// Filtered search, joined to the provider display name.
pub fn search_listings(db: &FoodDb, criteria: &ListingSearch) -> Result<Table, String> {
    db.search_listings(criteria).map_err(|e| e.to_string())
}

/// Fetch the edit baseline for an update form.
pub fn get_listing(db: &FoodDb, id: i64) -> Result<Listing, String> {
    db.get_listing(id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Food listing not found: {}", id))
}

/// Full-row replace. Every field must be supplied, current or new.
pub fn update_listing(db: &FoodDb, id: i64, fields: &ListingFields) -> Result<String, String> {
    validate_quantity(fields.quantity)?;
    let affected = db.update_listing(id, fields).map_err(|e| e.to_string())?;
    if affected == 0 {
        return Err(format!("Food listing not found: {}", id));
    }
    Ok("Food listing updated successfully".to_string())
}

/// Hard delete by primary key. No cascade.
pub fn delete_listing(db: &FoodDb, id: i64) -> Result<String, String> {
    let affected = db.delete_listing(id).map_err(|e| e.to_string())?;
    if affected == 0 {
        return Err(format!("Food listing not found: {}", id));
    }
    log::info!("Listing {} deleted", id);
    Ok("Food listing deleted".to_string())
}

fn validate_quantity(quantity: i64) -> Result<(), String> {
    if quantity < 1 {
        return Err(format!("Quantity must be at least 1 (got {})", quantity));
    }
    Ok(())
}
