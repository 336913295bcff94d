//! The report catalog: a fixed registry of named aggregate queries.
//!
//! Three categories, twelve entries, no caller-supplied parameters. Each
//! entry carries an explicit render hint instead of the old "second column
//! numeric ⇒ chart" guess, so a date-valued second column (Food Near Expiry)
//! stays a table. The one time-sensitive entry binds the current date at run
//! time, which makes its result set drift as the wall clock moves with no
//! change to underlying data.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::db::{FoodDb, DATE_FORMAT};
use crate::error::QueryError;
use crate::table::Table;

/// The three fixed report groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ReportCategory {
    ProviderReceiverInsights,
    DonationClaimTrends,
    WastageEfficiency,
}

impl ReportCategory {
    pub fn title(&self) -> &'static str {
        match self {
            ReportCategory::ProviderReceiverInsights => "Provider & Receiver Insights",
            ReportCategory::DonationClaimTrends => "Donation & Claim Trends",
            ReportCategory::WastageEfficiency => "Wastage & Efficiency",
        }
    }
}

/// How the presentation layer should render a report's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderHint {
    Table,
    Bar,
    Pie,
}

/// One catalog entry: a display title and a read-only statement.
#[derive(Debug)]
pub struct Report {
    pub id: &'static str,
    pub title: &'static str,
    pub category: ReportCategory,
    pub hint: RenderHint,
    /// True when the SQL binds `:today` and the result drifts with the clock.
    pub time_sensitive: bool,
    sql: &'static str,
}

impl Report {
    /// Run against the wall-clock current date.
    pub fn run(&self, db: &FoodDb) -> Result<Table, QueryError> {
        self.run_as_of(db, Local::now().date_naive())
    }

    /// Run with an explicit "today". Only the time-sensitive entry reads it;
    /// the rest execute with no parameters.
    pub fn run_as_of(&self, db: &FoodDb, today: NaiveDate) -> Result<Table, QueryError> {
        if self.time_sensitive {
            let today = today.format(DATE_FORMAT).to_string();
            db.read(self.sql, &[(":today", &today)])
        } else {
            db.read(self.sql, &[])
        }
    }
}

/// The full fixed registry, in display order.
pub fn catalog() -> &'static [Report] {
    CATALOG
}

/// Catalog entry by id.
pub fn find(id: &str) -> Option<&'static Report> {
    CATALOG.iter().find(|r| r.id == id)
}

/// Catalog entries belonging to one category, in display order.
pub fn by_category(category: ReportCategory) -> impl Iterator<Item = &'static Report> {
    CATALOG.iter().filter(move |r| r.category == category)
}

const CATALOG: &[Report] = &[
    // -------------------------------------------------------------------------
    // Provider & Receiver Insights
    // -------------------------------------------------------------------------
    Report {
        id: "providers-by-city",
        title: "Providers by City",
        category: ReportCategory::ProviderReceiverInsights,
        hint: RenderHint::Bar,
        time_sensitive: false,
        sql: "SELECT City, COUNT(*) AS Total_Providers
              FROM providers
              GROUP BY City
              ORDER BY Total_Providers DESC",
    },
    Report {
        id: "receivers-by-city",
        title: "Receivers by City",
        category: ReportCategory::ProviderReceiverInsights,
        hint: RenderHint::Bar,
        time_sensitive: false,
        sql: "SELECT City, COUNT(*) AS Total_Receivers
              FROM receivers
              GROUP BY City
              ORDER BY Total_Receivers DESC",
    },
    Report {
        id: "most-active-providers",
        title: "Most Active Food Providers",
        category: ReportCategory::ProviderReceiverInsights,
        hint: RenderHint::Bar,
        time_sensitive: false,
        sql: "SELECT p.Name AS Provider_Name, COUNT(f.Food_ID) AS Total_Donations
              FROM food_listings f
              JOIN providers p ON f.Provider_ID = p.Provider_ID
              GROUP BY p.Provider_ID, p.Name
              ORDER BY Total_Donations DESC
              LIMIT 10",
    },
    Report {
        id: "quantity-donated-per-provider",
        title: "Total Food Quantity Donated per Provider",
        category: ReportCategory::ProviderReceiverInsights,
        hint: RenderHint::Bar,
        time_sensitive: false,
        sql: "SELECT p.Name AS Provider_Name, SUM(f.Quantity) AS Total_Quantity
              FROM food_listings f
              JOIN providers p ON f.Provider_ID = p.Provider_ID
              GROUP BY p.Provider_ID, p.Name
              ORDER BY Total_Quantity DESC",
    },
    // -------------------------------------------------------------------------
    // Donation & Claim Trends
    // -------------------------------------------------------------------------
    Report {
        id: "provider-types-by-volume",
        title: "Top Provider Types by Donation Volume",
        category: ReportCategory::DonationClaimTrends,
        hint: RenderHint::Bar,
        time_sensitive: false,
        sql: "SELECT p.Type AS Provider_Type, SUM(f.Quantity) AS Total_Quantity_Donated
              FROM food_listings f
              JOIN providers p ON f.Provider_ID = p.Provider_ID
              GROUP BY p.Type
              ORDER BY Total_Quantity_Donated DESC",
    },
    Report {
        id: "top-foods-by-claims",
        title: "Top Food Items by Number of Claims",
        category: ReportCategory::DonationClaimTrends,
        hint: RenderHint::Bar,
        time_sensitive: false,
        sql: "SELECT f.Food_Name, COUNT(c.Claim_ID) AS Claim_Count
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              GROUP BY f.Food_Name
              ORDER BY Claim_Count DESC
              LIMIT 10",
    },
    Report {
        id: "avg-quantity-per-provider-type",
        title: "Average Quantity Donated per Provider Type",
        category: ReportCategory::DonationClaimTrends,
        hint: RenderHint::Bar,
        time_sensitive: false,
        sql: "SELECT p.Type AS Provider_Type, ROUND(AVG(f.Quantity), 2) AS Avg_Quantity
              FROM food_listings f
              JOIN providers p ON f.Provider_ID = p.Provider_ID
              GROUP BY p.Type",
    },
    Report {
        id: "avg-quantity-claimed-per-receiver",
        title: "Average Quantity Claimed per Receiver",
        category: ReportCategory::DonationClaimTrends,
        hint: RenderHint::Bar,
        time_sensitive: false,
        sql: "SELECT r.Name AS Receiver_Name, ROUND(AVG(f.Quantity), 2) AS Avg_Quantity_Claimed
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              JOIN receivers r ON c.Receiver_ID = r.Receiver_ID
              GROUP BY r.Receiver_ID, r.Name
              ORDER BY Avg_Quantity_Claimed DESC",
    },
    // -------------------------------------------------------------------------
    // Wastage & Efficiency
    // -------------------------------------------------------------------------
    Report {
        id: "common-food-types",
        title: "Most Common Donated Food Types",
        category: ReportCategory::WastageEfficiency,
        hint: RenderHint::Bar,
        time_sensitive: false,
        sql: "SELECT f.Food_Type, COUNT(f.Food_ID) AS Total_Listings
              FROM food_listings f
              GROUP BY f.Food_Type
              ORDER BY Total_Listings DESC",
    },
    Report {
        id: "most-claimed-meal-types",
        title: "Most Claimed Meal Types",
        category: ReportCategory::WastageEfficiency,
        hint: RenderHint::Bar,
        time_sensitive: false,
        sql: "SELECT f.Meal_Type, COUNT(c.Claim_ID) AS Total_Claims
              FROM claims c
              JOIN food_listings f ON c.Food_ID = f.Food_ID
              GROUP BY f.Meal_Type
              ORDER BY Total_Claims DESC",
    },
    Report {
        id: "food-near-expiry",
        title: "Food Near Expiry (Wastage Risk)",
        category: ReportCategory::WastageEfficiency,
        // Second column is a date; never chart this one.
        hint: RenderHint::Table,
        time_sensitive: true,
        sql: "SELECT Food_ID, Food_Name, Expiry_Date, Quantity
              FROM food_listings
              WHERE Expiry_Date BETWEEN date(:today) AND date(:today, '+3 days')
              ORDER BY Expiry_Date ASC",
    },
    Report {
        id: "donation-vs-claim",
        title: "Donation vs Claim Comparison",
        category: ReportCategory::WastageEfficiency,
        hint: RenderHint::Bar,
        time_sensitive: false,
        sql: "SELECT
                (SELECT IFNULL(SUM(Quantity), 0) FROM food_listings) AS Total_Donated,
                (SELECT IFNULL(SUM(f.Quantity), 0)
                 FROM claims c
                 JOIN food_listings f ON c.Food_ID = f.Food_ID) AS Total_Claimed",
    },
];
