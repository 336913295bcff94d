use rusqlite::named_params;

use super::*;
use crate::filter::Search;

impl FoodDb {
    // =========================================================================
    // Claims
    // =========================================================================

    /// Insert a claim; the store assigns the primary key and enforces both
    /// foreign keys.
    pub fn insert_claim(&self, fields: &ClaimFields) -> Result<i64, ExecutionError> {
        self.write(
            "INSERT INTO claims (Food_ID, Receiver_ID, Status, Timestamp)
             VALUES (:food_id, :receiver_id, :status, :timestamp)",
            named_params! {
                ":food_id": fields.food_id,
                ":receiver_id": fields.receiver_id,
                ":status": fields.status.as_str(),
                ":timestamp": fields.timestamp.format(DATE_FORMAT).to_string(),
            },
        )?;
        Ok(self.last_insert_id())
    }

    /// Fetch a claim by primary key (the edit-form baseline).
    pub fn get_claim(&self, id: i64) -> Result<Option<Claim>, QueryError> {
        let mut stmt = self.conn.prepare(
            "SELECT Claim_ID, Food_ID, Receiver_ID, Status, Timestamp
             FROM claims
             WHERE Claim_ID = :id",
        )?;

        let mut rows = stmt.query_map(named_params! { ":id": id }, |row| {
            Ok(Claim {
                id: row.get(0)?,
                food_id: row.get(1)?,
                receiver_id: row.get(2)?,
                status: row.get(3)?,
                timestamp: row.get(4)?,
            })
        })?;

        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// Full-row replace by primary key. Accepts any status value — this is
    /// the intentional escape hatch around the one-way Complete transition.
    pub fn update_claim(&self, id: i64, fields: &ClaimFields) -> Result<usize, ExecutionError> {
        self.write(
            "UPDATE claims
             SET Food_ID = :food_id, Receiver_ID = :receiver_id,
                 Status = :status, Timestamp = :timestamp
             WHERE Claim_ID = :id",
            named_params! {
                ":food_id": fields.food_id,
                ":receiver_id": fields.receiver_id,
                ":status": fields.status.as_str(),
                ":timestamp": fields.timestamp.format(DATE_FORMAT).to_string(),
                ":id": id,
            },
        )
    }

    /// Hard delete by primary key.
    pub fn delete_claim(&self, id: i64) -> Result<usize, ExecutionError> {
        self.write(
            "DELETE FROM claims WHERE Claim_ID = :id",
            named_params! { ":id": id },
        )
    }

    /// Filtered search, left-joined to listings and receivers for display
    /// names. Status matches exactly; names are substring matches.
    pub fn search_claims(&self, criteria: &ClaimSearch) -> Result<Table, QueryError> {
        let mut search = Search::new();
        if let Some(status) = criteria.status {
            search.equals("c.Status", status.as_str());
        }
        search
            .contains("r.Name", &criteria.receiver_name)
            .contains("f.Food_Name", &criteria.food_name);

        let sql = format!(
            "SELECT c.Claim_ID, f.Food_Name, r.Name AS Receiver_Name, c.Status, c.Timestamp
             FROM claims c
             LEFT JOIN food_listings f ON c.Food_ID = f.Food_ID
             LEFT JOIN receivers r ON c.Receiver_ID = r.Receiver_ID{}
             ORDER BY c.Claim_ID DESC",
            search.where_clause()
        );
        self.read(&sql, &search.params())
    }

    /// Every claim not yet completed, newest first, with food and receiver
    /// display names. Feeds the Complete selection list.
    pub fn list_open_claims(&self) -> Result<Table, QueryError> {
        self.read(
            "SELECT c.Claim_ID, f.Food_Name, r.Name AS Receiver, c.Status
             FROM claims c
             JOIN food_listings f ON c.Food_ID = f.Food_ID
             JOIN receivers r ON c.Receiver_ID = r.Receiver_ID
             WHERE c.Status <> 'Completed'
             ORDER BY c.Claim_ID DESC",
            &[],
        )
    }

    /// Set a claim's status to Completed unconditionally. Idempotent:
    /// re-applying to an already-completed claim is a no-op for the caller.
    pub fn complete_claim(&self, id: i64) -> Result<usize, ExecutionError> {
        self.write(
            "UPDATE claims SET Status = 'Completed' WHERE Claim_ID = :id",
            named_params! { ":id": id },
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::super::tests::test_db;
    use super::*;

    /// Seed one provider, one listing, one receiver; return (food_id, receiver_id).
    fn seed(db: &FoodDb) -> (i64, i64) {
        let pid = db
            .insert_provider(&ProviderFields {
                name: "Green Grocer".to_string(),
                provider_type: "Retail".to_string(),
                city: "Springfield".to_string(),
                contact: "555-0100".to_string(),
                address: "1 Main St".to_string(),
            })
            .expect("insert provider");
        let fid = db
            .insert_listing(&ListingFields {
                food_name: "Rice".to_string(),
                quantity: 50,
                expiry_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                provider_id: pid,
                provider_type: "Retail".to_string(),
                location: "Springfield".to_string(),
                food_type: "Grain".to_string(),
                meal_type: "Dinner".to_string(),
            })
            .expect("insert listing");
        let rid = db
            .insert_receiver(&ReceiverFields {
                name: "Hope Shelter".to_string(),
                receiver_type: "NGO".to_string(),
                city: "Springfield".to_string(),
                contact: "555-0101".to_string(),
            })
            .expect("insert receiver");
        (fid, rid)
    }

    fn pending_claim(food_id: i64, receiver_id: i64) -> ClaimFields {
        ClaimFields {
            food_id,
            receiver_id,
            status: ClaimStatus::Pending,
            timestamp: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
        }
    }

    #[test]
    fn test_insert_and_get() {
        let db = test_db();
        let (fid, rid) = seed(&db);
        let id = db.insert_claim(&pending_claim(fid, rid)).expect("insert");

        let claim = db.get_claim(id).expect("get").expect("row exists");
        assert_eq!(claim.food_id, fid);
        assert_eq!(claim.receiver_id, rid);
        assert_eq!(claim.status, "Pending");
        assert_eq!(claim.timestamp, "2026-08-20");
    }

    #[test]
    fn test_insert_rejects_unknown_food_or_receiver() {
        let db = test_db();
        let (fid, rid) = seed(&db);
        assert!(db.insert_claim(&pending_claim(999, rid)).is_err());
        assert!(db.insert_claim(&pending_claim(fid, 999)).is_err());
    }

    #[test]
    fn test_complete_is_idempotent() {
        let db = test_db();
        let (fid, rid) = seed(&db);
        let id = db.insert_claim(&pending_claim(fid, rid)).expect("insert");

        db.complete_claim(id).expect("first complete");
        let claim = db.get_claim(id).expect("get").expect("row exists");
        assert_eq!(claim.status, "Completed");

        db.complete_claim(id).expect("second complete must not error");
        let claim = db.get_claim(id).expect("get").expect("row exists");
        assert_eq!(claim.status, "Completed");
    }

    #[test]
    fn test_open_claims_excludes_completed() {
        let db = test_db();
        let (fid, rid) = seed(&db);
        let first = db.insert_claim(&pending_claim(fid, rid)).expect("insert");
        let second = db.insert_claim(&pending_claim(fid, rid)).expect("insert");
        db.complete_claim(first).expect("complete");

        let table = db.list_open_claims().expect("open claims");
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.cell(0, "Claim_ID").as_deref(),
            Some(second.to_string().as_str())
        );
        assert_eq!(table.cell(0, "Food_Name").as_deref(), Some("Rice"));
        assert_eq!(table.cell(0, "Receiver").as_deref(), Some("Hope Shelter"));
    }

    #[test]
    fn test_update_can_reopen_a_claim() {
        // The escape hatch: a full-field update may set any status.
        let db = test_db();
        let (fid, rid) = seed(&db);
        let id = db.insert_claim(&pending_claim(fid, rid)).expect("insert");
        db.complete_claim(id).expect("complete");

        let mut fields = pending_claim(fid, rid);
        fields.status = ClaimStatus::Pending;
        db.update_claim(id, &fields).expect("update");

        let claim = db.get_claim(id).expect("get").expect("row exists");
        assert_eq!(claim.status, "Pending");
    }

    #[test]
    fn test_search_by_status_and_names() {
        let db = test_db();
        let (fid, rid) = seed(&db);
        let first = db.insert_claim(&pending_claim(fid, rid)).expect("insert");
        db.insert_claim(&pending_claim(fid, rid)).expect("insert");
        db.complete_claim(first).expect("complete");

        let criteria = ClaimSearch {
            status: Some(ClaimStatus::Completed),
            receiver_name: "hope".to_string(),
            food_name: "rice".to_string(),
        };
        let table = db.search_claims(&criteria).expect("search");
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.cell(0, "Claim_ID").as_deref(),
            Some(first.to_string().as_str())
        );
        assert_eq!(table.cell(0, "Status").as_deref(), Some("Completed"));
    }

    #[test]
    fn test_search_without_criteria_returns_all() {
        let db = test_db();
        let (fid, rid) = seed(&db);
        db.insert_claim(&pending_claim(fid, rid)).expect("insert");
        db.insert_claim(&pending_claim(fid, rid)).expect("insert");

        let table = db.search_claims(&ClaimSearch::default()).expect("search");
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.columns,
            vec![
                "Claim_ID",
                "Food_Name",
                "Receiver_Name",
                "Status",
                "Timestamp"
            ]
        );
    }
}
