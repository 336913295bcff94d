// Receiver service — create/read/update/delete over the receivers table.

use crate::db::{FoodDb, Receiver, ReceiverFields, ReceiverSearch};
use crate::table::Table;

/// Create a receiver from a full set of form fields.
pub fn create_receiver(db: &FoodDb, fields: &ReceiverFields) -> Result<String, String> {
    let id = db.insert_receiver(fields).map_err(|e| e.to_string())?;
    log::info!("Receiver '{}' created with id {}", fields.name, id);
    Ok(format!("Receiver '{}' added successfully", fields.name))
}

/// Filtered search; no criteria returns the full table, newest first.
pub fn search_receivers(db: &FoodDb, criteria: &ReceiverSearch) -> Result<Table, String> {
    db.search_receivers(criteria).map_err(|e| e.to_string())
}

/// Fetch the edit baseline for an update form.
pub fn get_receiver(db: &FoodDb, id: i64) -> Result<Receiver, String> {
    db.get_receiver(id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("Receiver not found: {}", id))
}

/// Full-row replace. Every field must be supplied, current or new.
pub fn update_receiver(db: &FoodDb, id: i64, fields: &ReceiverFields) -> Result<String, String> {
    let affected = db.update_receiver(id, fields).map_err(|e| e.to_string())?;
    if affected == 0 {
        return Err(format!("Receiver not found: {}", id));
    }
    Ok("Receiver updated successfully".to_string())
}

/// Hard delete by primary key. No cascade.
pub fn delete_receiver(db: &FoodDb, id: i64) -> Result<String, String> {
    let affected = db.delete_receiver(id).map_err(|e| e.to_string())?;
    if affected == 0 {
        return Err(format!("Receiver not found: {}", id));
    }
    log::info!("Receiver {} deleted", id);
    Ok("Receiver deleted".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> FoodDb {
        FoodDb::open_in_memory().expect("open")
    }

    fn sample_fields() -> ReceiverFields {
        ReceiverFields {
            name: "Hope Shelter".to_string(),
            receiver_type: "NGO".to_string(),
            city: "Springfield".to_string(),
            contact: "555-0101".to_string(),
        }
    }

    #[test]
    fn test_create_then_read_matches_every_field() {
        let db = test_db();
        create_receiver(&db, &sample_fields()).expect("create");

        let table = search_receivers(
            &db,
            &ReceiverSearch {
                name: "hope".to_string(),
                ..Default::default()
            },
        )
        .expect("search");
        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, "Name").as_deref(), Some("Hope Shelter"));
        assert_eq!(table.cell(0, "Type").as_deref(), Some("NGO"));
        assert_eq!(table.cell(0, "City").as_deref(), Some("Springfield"));
        assert_eq!(table.cell(0, "Contact").as_deref(), Some("555-0101"));
    }

    #[test]
    fn test_update_full_replace_visible_on_read() {
        let db = test_db();
        create_receiver(&db, &sample_fields()).expect("create");
        let id = get_receiver_id(&db);

        let replacement = ReceiverFields {
            name: "Hope Shelter East".to_string(),
            receiver_type: "Charity".to_string(),
            city: "Ogdenville".to_string(),
            contact: "555-0177".to_string(),
        };
        update_receiver(&db, id, &replacement).expect("update");

        let receiver = get_receiver(&db, id).expect("get");
        assert_eq!(receiver.name, "Hope Shelter East");
        assert_eq!(receiver.receiver_type, "Charity");
        assert_eq!(receiver.city, "Ogdenville");
        assert_eq!(receiver.contact, "555-0177");
    }

    fn get_receiver_id(db: &FoodDb) -> i64 {
        let table = search_receivers(db, &ReceiverSearch::default()).expect("search");
        table
            .cell(0, "Receiver_ID")
            .expect("id cell")
            .parse()
            .expect("numeric id")
    }
}
