//! # Roster
//!
//! Shared definitions for the RSVP service: the stored record, the payloads
//! both sides of the wire agree on, the form validation rules, and the
//! occupancy math. The server enables the `store` feature to map records
//! straight out of Postgres rows; clients only need the JSON side.
//!
//! Wire field names are fixed by the existing frontend contract
//! (`peopleCount`, `created_at`) and must not drift.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod stats;
pub mod validate;

/// One confirmed party: who is coming and how many people they bring.
///
/// Rows are append-only. `id` and `created_at` are assigned by the store on
/// insert and never change; nothing in this system updates or deletes a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "store", derive(sqlx::FromRow))]
pub struct Rsvp {
    pub id: i64,

    pub name: String,

    #[serde(rename = "peopleCount")]
    #[cfg_attr(feature = "store", sqlx(rename = "peopleCount"))]
    pub people_count: i32,

    pub created_at: DateTime<Utc>,
}

/// Success body of `/api/confirm`: the acknowledgement plus the row as the
/// store persisted it.
#[derive(Debug, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
    pub data: Rsvp,
}

/// Success body of `/api/get-list`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GuestList {
    pub data: Vec<Rsvp>,
}

/// Every error body. `error` carries store detail only on the submission
/// path; all other failures keep it empty.
#[derive(Debug, Serialize, Deserialize)]
pub struct Failure {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::Rsvp;

    #[test]
    fn wire_names_match_the_frontend_contract() {
        let guest = Rsvp {
            id: 7,
            name: "Drácula".to_string(),
            people_count: 5,
            created_at: Utc.with_ymd_and_hms(2025, 10, 31, 20, 0, 0).unwrap(),
        };

        let json = serde_json::to_value(&guest).unwrap();
        assert_eq!(json["peopleCount"], 5);
        assert_eq!(json["name"], "Drácula");
        assert!(json["created_at"].is_string());

        let back: Rsvp = serde_json::from_value(json).unwrap();
        assert_eq!(back, guest);
    }
}
