//! Dashboard service — the summary reads behind the landing page: headline
//! totals, wastage-risk preview, contact lists, latest records, and the
//! distinct values that feed the sidebar filters.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::db::{FoodDb, DATE_FORMAT};
use crate::table::Table;

/// Headline metrics: one scalar row over the whole store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewTotals {
    pub providers: i64,
    pub receivers: i64,
    pub total_quantity: i64,
}

/// The four browsable tables, for the "latest records" quick view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Providers,
    Receivers,
    Listings,
    Claims,
}

impl EntityKind {
    fn table(&self) -> &'static str {
        match self {
            EntityKind::Providers => "providers",
            EntityKind::Receivers => "receivers",
            EntityKind::Listings => "food_listings",
            EntityKind::Claims => "claims",
        }
    }

    fn primary_key(&self) -> &'static str {
        match self {
            EntityKind::Providers => "Provider_ID",
            EntityKind::Receivers => "Receiver_ID",
            EntityKind::Listings => "Food_ID",
            EntityKind::Claims => "Claim_ID",
        }
    }
}

/// Distinct non-null values feeding the sidebar filter widgets.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub providers: Vec<String>,
    pub food_types: Vec<String>,
    pub meal_types: Vec<String>,
}

/// Provider/receiver counts and total listed quantity.
pub fn overview_totals(db: &FoodDb) -> Result<OverviewTotals, String> {
    let table = db
        .read(
            "SELECT
                (SELECT IFNULL(COUNT(*), 0) FROM providers) AS providers_count,
                (SELECT IFNULL(COUNT(*), 0) FROM receivers) AS receivers_count,
                (SELECT IFNULL(SUM(Quantity), 0) FROM food_listings) AS total_quantity",
            &[],
        )
        .map_err(|e| e.to_string())?;

    Ok(OverviewTotals {
        providers: scalar(&table, "providers_count")?,
        receivers: scalar(&table, "receivers_count")?,
        total_quantity: scalar(&table, "total_quantity")?,
    })
}

/// Listings expiring within the next 3 days inclusive of today, soonest
/// first, capped at 5 rows.
pub fn near_expiry_preview(db: &FoodDb) -> Result<Table, String> {
    near_expiry_preview_as_of(db, Local::now().date_naive())
}

/// Same window evaluated against an explicit "today".
pub fn near_expiry_preview_as_of(db: &FoodDb, today: NaiveDate) -> Result<Table, String> {
    let today = today.format(DATE_FORMAT).to_string();
    db.read(
        "SELECT Food_Name, Expiry_Date, Quantity
         FROM food_listings
         WHERE Expiry_Date BETWEEN date(:today) AND date(:today, '+3 days')
         ORDER BY Expiry_Date ASC
         LIMIT 5",
        &[(":today", &today)],
    )
    .map_err(|e| e.to_string())
}

/// Short provider contact list for the landing-page card.
pub fn top_provider_contacts(db: &FoodDb) -> Result<Table, String> {
    db.read(
        "SELECT Name, City, Contact FROM providers LIMIT 5",
        &[],
    )
    .map_err(|e| e.to_string())
}

/// Full provider contact directory, alphabetical, capped at 500 rows.
pub fn contact_directory(db: &FoodDb) -> Result<Table, String> {
    db.read(
        "SELECT Name, City, Contact, Address
         FROM providers
         ORDER BY Name
         LIMIT 500",
        &[],
    )
    .map_err(|e| e.to_string())
}

/// The last 10 rows of one table, newest first.
pub fn latest_records(db: &FoodDb, kind: EntityKind) -> Result<Table, String> {
    let sql = format!(
        "SELECT * FROM {} ORDER BY {} DESC LIMIT 10",
        kind.table(),
        kind.primary_key()
    );
    db.read(&sql, &[]).map_err(|e| e.to_string())
}

/// The joined listing preview: food columns plus the provider's display
/// fields, newest first.
pub fn listing_preview(db: &FoodDb) -> Result<Table, String> {
    db.read(
        "SELECT f.Food_Name, f.Food_Type, f.Quantity, f.Expiry_Date, f.Meal_Type,
                p.Name AS Provider_Name, p.City, p.Contact, p.Address
         FROM food_listings f
         JOIN providers p ON f.Provider_ID = p.Provider_ID
         ORDER BY f.Food_ID DESC",
        &[],
    )
    .map_err(|e| e.to_string())
}

/// Distinct filter values across providers and listings.
pub fn filter_options(db: &FoodDb) -> Result<FilterOptions, String> {
    Ok(FilterOptions {
        cities: distinct(db, "SELECT DISTINCT City FROM providers WHERE City IS NOT NULL ORDER BY City")?,
        providers: distinct(db, "SELECT DISTINCT Name FROM providers WHERE Name IS NOT NULL ORDER BY Name")?,
        food_types: distinct(
            db,
            "SELECT DISTINCT Food_Type FROM food_listings WHERE Food_Type IS NOT NULL ORDER BY Food_Type",
        )?,
        meal_types: distinct(
            db,
            "SELECT DISTINCT Meal_Type FROM food_listings WHERE Meal_Type IS NOT NULL ORDER BY Meal_Type",
        )?,
    })
}

fn distinct(db: &FoodDb, sql: &str) -> Result<Vec<String>, String> {
    let table = db.read(sql, &[]).map_err(|e| e.to_string())?;
    let column = match table.columns.first() {
        Some(name) => name.clone(),
        None => return Ok(Vec::new()),
    };
    Ok((0..table.len())
        .filter_map(|i| table.cell(i, &column))
        .collect())
}

fn scalar(table: &Table, column: &str) -> Result<i64, String> {
    table
        .cell(0, column)
        .ok_or_else(|| format!("Missing column: {}", column))?
        .parse()
        .map_err(|e| format!("Non-numeric value in {}: {}", column, e))
}
