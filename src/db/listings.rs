use rusqlite::named_params;

use super::*;
use crate::filter::Search;

impl FoodDb {
    // =========================================================================
    // Food listings
    // =========================================================================

    /// Insert a listing; the store assigns the primary key and enforces the
    /// provider foreign key.
    pub fn insert_listing(&self, fields: &ListingFields) -> Result<i64, ExecutionError> {
        self.write(
            "INSERT INTO food_listings (Food_Name, Quantity, Expiry_Date, Provider_ID,
                                        Provider_Type, Location, Food_Type, Meal_Type)
             VALUES (:food_name, :quantity, :expiry_date, :provider_id,
                     :provider_type, :location, :food_type, :meal_type)",
            named_params! {
                ":food_name": fields.food_name,
                ":quantity": fields.quantity,
                ":expiry_date": fields.expiry_date.format(DATE_FORMAT).to_string(),
                ":provider_id": fields.provider_id,
                ":provider_type": fields.provider_type,
                ":location": fields.location,
                ":food_type": fields.food_type,
                ":meal_type": fields.meal_type,
            },
        )?;
        Ok(self.last_insert_id())
    }

    /// Fetch a listing by primary key (the edit-form baseline).
    pub fn get_listing(&self, id: i64) -> Result<Option<Listing>, QueryError> {
        let mut stmt = self.conn.prepare(
            "SELECT Food_ID, Food_Name, Quantity, Expiry_Date, Provider_ID,
                    Provider_Type, Location, Food_Type, Meal_Type
             FROM food_listings
             WHERE Food_ID = :id",
        )?;

        let mut rows = stmt.query_map(named_params! { ":id": id }, |row| {
            Ok(Listing {
                id: row.get(0)?,
                food_name: row.get(1)?,
                quantity: row.get(2)?,
                expiry_date: row.get(3)?,
                provider_id: row.get(4)?,
                provider_type: row.get(5)?,
                location: row.get(6)?,
                food_type: row.get(7)?,
                meal_type: row.get(8)?,
            })
        })?;

        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    /// Full-row replace by primary key. Every column is re-submitted,
    /// including the provider reference.
    pub fn update_listing(&self, id: i64, fields: &ListingFields) -> Result<usize, ExecutionError> {
        self.write(
            "UPDATE food_listings
             SET Food_Name = :food_name, Quantity = :quantity,
                 Expiry_Date = :expiry_date, Provider_ID = :provider_id,
                 Provider_Type = :provider_type, Location = :location,
                 Food_Type = :food_type, Meal_Type = :meal_type
             WHERE Food_ID = :id",
            named_params! {
                ":food_name": fields.food_name,
                ":quantity": fields.quantity,
                ":expiry_date": fields.expiry_date.format(DATE_FORMAT).to_string(),
                ":provider_id": fields.provider_id,
                ":provider_type": fields.provider_type,
                ":location": fields.location,
                ":food_type": fields.food_type,
                ":meal_type": fields.meal_type,
                ":id": id,
            },
        )
    }

    /// Hard delete by primary key.
    pub fn delete_listing(&self, id: i64) -> Result<usize, ExecutionError> {
        self.write(
            "DELETE FROM food_listings WHERE Food_ID = :id",
            named_params! { ":id": id },
        )
    }

    /// Filtered search, left-joined to providers for the display name.
    /// Newest listings first; no predicates returns the full joined table.
    pub fn search_listings(&self, criteria: &ListingSearch) -> Result<Table, QueryError> {
        let mut search = Search::new();
        search
            .contains("f.Food_Name", &criteria.food_name)
            .contains("f.Food_Type", &criteria.food_type)
            .contains("f.Meal_Type", &criteria.meal_type)
            .contains("f.Location", &criteria.location);

        let sql = format!(
            "SELECT f.Food_ID, f.Food_Name, f.Food_Type, f.Meal_Type, f.Quantity,
                    f.Expiry_Date, f.Provider_ID, p.Name AS Provider_Name, f.Location
             FROM food_listings f
             LEFT JOIN providers p ON f.Provider_ID = p.Provider_ID{}
             ORDER BY f.Food_ID DESC",
            search.where_clause()
        );
        self.read(&sql, &search.params())
    }
}
