use rusqlite::named_params;

use super::*;
use crate::filter::Search;

impl FoodDb {
    // =========================================================================
    // Receivers
    // =========================================================================

    /// Insert a receiver; the store assigns the primary key.
    pub fn insert_receiver(&self, fields: &ReceiverFields) -> Result<i64, ExecutionError> {
        self.write(
            "INSERT INTO receivers (Name, Type, City, Contact)
             VALUES (:name, :type, :city, :contact)",
            named_params! {
                ":name": fields.name,
                ":type": fields.receiver_type,
                ":city": fields.city,
                ":contact": fields.contact,
            },
        )?;
        Ok(self.last_insert_id())
    }

    /// Fetch a receiver by primary key (the edit-form baseline).
    pub fn get_receiver(&self, id: i64) -> Result<Option<Receiver>, QueryError> {
        let mut stmt = self.conn.prepare(
            "SELECT Receiver_ID, Name, Type, City, Contact
             FROM receivers
             WHERE Receiver_ID = :id",
        )?;

        let mut rows = stmt.query_map(named_params! { ":id": id }, |row| {
            Ok(Receiver {
                id: row.get(0)?,
                name: row.get(1)?,
                receiver_type: row.get(2)?,
                city: row.get(3)?,
                contact: row.get(4)?,
            })
        })?;

        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// Full-row replace by primary key.
    pub fn update_receiver(
        &self,
        id: i64,
        fields: &ReceiverFields,
    ) -> Result<usize, ExecutionError> {
        self.write(
            "UPDATE receivers
             SET Name = :name, Type = :type, City = :city, Contact = :contact
             WHERE Receiver_ID = :id",
            named_params! {
                ":name": fields.name,
                ":type": fields.receiver_type,
                ":city": fields.city,
                ":contact": fields.contact,
                ":id": id,
            },
        )
    }

    /// Hard delete by primary key.
    pub fn delete_receiver(&self, id: i64) -> Result<usize, ExecutionError> {
        self.write(
            "DELETE FROM receivers WHERE Receiver_ID = :id",
            named_params! { ":id": id },
        )
    }

    /// Filtered search over name, city, and type, newest first.
    pub fn search_receivers(&self, criteria: &ReceiverSearch) -> Result<Table, QueryError> {
        let mut search = Search::new();
        search
            .contains("Name", &criteria.name)
            .contains("City", &criteria.city)
            .contains("Type", &criteria.receiver_type);

        let sql = format!(
            "SELECT Receiver_ID, Name, Type, City, Contact
             FROM receivers{}
             ORDER BY Receiver_ID DESC",
            search.where_clause()
        );
        self.read(&sql, &search.params())
    }
}
