//! Typed rows and field records for the four entities.
//!
//! Row structs mirror stored columns one-to-one (dates stay in their stored
//! `YYYY-MM-DD` text form). Field records are the typed configuration each
//! create/update form submits: every column except the store-assigned primary
//! key, validated at the boundary before any statement is built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored date format shared by listings and claims.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Rows
// =============================================================================

/// A row from the `providers` table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub provider_type: String,
    pub city: String,
    pub contact: String,
    pub address: String,
}

/// A row from the `receivers` table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receiver {
    pub id: i64,
    pub name: String,
    pub receiver_type: String,
    pub city: String,
    pub contact: String,
}

/// A row from the `food_listings` table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub food_name: String,
    pub quantity: i64,
    pub expiry_date: String,
    pub provider_id: i64,
    pub provider_type: String,
    pub location: String,
    pub food_type: String,
    pub meal_type: String,
}

/// A row from the `claims` table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: i64,
    pub food_id: i64,
    pub receiver_id: i64,
    pub status: String,
    pub timestamp: String,
}

// =============================================================================
// Field records (create/update input)
// =============================================================================

/// All provider columns except the primary key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderFields {
    pub name: String,
    pub provider_type: String,
    pub city: String,
    pub contact: String,
    pub address: String,
}

/// All receiver columns except the primary key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverFields {
    pub name: String,
    pub receiver_type: String,
    pub city: String,
    pub contact: String,
}

/// All listing columns except the primary key. `quantity >= 1` is checked at
/// the service boundary before a statement is issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFields {
    pub food_name: String,
    pub quantity: i64,
    pub expiry_date: NaiveDate,
    pub provider_id: i64,
    pub provider_type: String,
    pub location: String,
    pub food_type: String,
    pub meal_type: String,
}

/// All claim columns except the primary key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimFields {
    pub food_id: i64,
    pub receiver_id: i64,
    pub status: ClaimStatus,
    pub timestamp: NaiveDate,
}

/// The two-state claim lifecycle. The only guarded transition is
/// Pending → Completed; a full-field update remains the escape hatch that can
/// set either value directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Pending,
    Completed,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Search criteria (one record per entity, every predicate optional)
// =============================================================================

/// Optional provider predicates; blank fields are skipped.
#[derive(Debug, Clone, Default)]
pub struct ProviderSearch {
    pub name: String,
    pub city: String,
    pub provider_type: String,
}

/// Optional receiver predicates; blank fields are skipped.
#[derive(Debug, Clone, Default)]
pub struct ReceiverSearch {
    pub name: String,
    pub city: String,
    pub receiver_type: String,
}

/// Optional listing predicates; blank fields are skipped.
#[derive(Debug, Clone, Default)]
pub struct ListingSearch {
    pub food_name: String,
    pub food_type: String,
    pub meal_type: String,
    pub location: String,
}

/// Optional claim predicates. Status is an exact match; the name fields are
/// substring matches against the joined display names.
#[derive(Debug, Clone, Default)]
pub struct ClaimSearch {
    pub status: Option<ClaimStatus>,
    pub receiver_name: String,
    pub food_name: String,
}
