use rusqlite::named_params;

use super::*;
use crate::filter::Search;

impl FoodDb {
    // =========================================================================
    // Providers
    // =========================================================================

    /// Insert a provider; the store assigns the primary key.
    pub fn insert_provider(&self, fields: &ProviderFields) -> Result<i64, ExecutionError> {
        self.write(
            "INSERT INTO providers (Name, Type, City, Contact, Address)
             VALUES (:name, :type, :city, :contact, :address)",
            named_params! {
                ":name": fields.name,
                ":type": fields.provider_type,
                ":city": fields.city,
                ":contact": fields.contact,
                ":address": fields.address,
            },
        )?;
        Ok(self.last_insert_id())
    }

    /// Fetch a provider by primary key (the edit-form baseline).
    pub fn get_provider(&self, id: i64) -> Result<Option<Provider>, QueryError> {
        let mut stmt = self.conn.prepare(
            "SELECT Provider_ID, Name, Type, City, Contact, Address
             FROM providers
             WHERE Provider_ID = :id",
        )?;

        let mut rows = stmt.query_map(named_params! { ":id": id }, |row| {
            Ok(Provider {
                id: row.get(0)?,
                name: row.get(1)?,
                provider_type: row.get(2)?,
                city: row.get(3)?,
                contact: row.get(4)?,
                address: row.get(5)?,
            })
        })?;

        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// Full-row replace by primary key. Every column is re-submitted.
    pub fn update_provider(
        &self,
        id: i64,
        fields: &ProviderFields,
    ) -> Result<usize, ExecutionError> {
        self.write(
            "UPDATE providers
             SET Name = :name, Type = :type, City = :city, Contact = :contact,
                 Address = :address
             WHERE Provider_ID = :id",
            named_params! {
                ":name": fields.name,
                ":type": fields.provider_type,
                ":city": fields.city,
                ":contact": fields.contact,
                ":address": fields.address,
                ":id": id,
            },
        )
    }

    /// Hard delete by primary key. No cascade: listings referencing this
    /// provider make the delete fail under FK enforcement.
    pub fn delete_provider(&self, id: i64) -> Result<usize, ExecutionError> {
        self.write(
            "DELETE FROM providers WHERE Provider_ID = :id",
            named_params! { ":id": id },
        )
    }

    /// Filtered search: optional substring predicates on name, city, and
    /// type, newest first. No predicates returns the full table.
    pub fn search_providers(&self, criteria: &ProviderSearch) -> Result<Table, QueryError> {
        let mut search = Search::new();
        search
            .contains("Name", &criteria.name)
            .contains("City", &criteria.city)
            .contains("Type", &criteria.provider_type);

        let sql = format!(
            "SELECT Provider_ID, Name, Type, City, Contact, Address
             FROM providers{}
             ORDER BY Provider_ID DESC",
            search.where_clause()
        );
        self.read(&sql, &search.params())
    }
}
