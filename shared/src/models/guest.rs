//! Guest directory, RSVP and site access models

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Guest directory response: every confirmed attendee name
///
/// Order is first-submission order. The directory makes no uniqueness
/// promise; consumers treat repeated names as distinct guests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestDirectory {
    pub names: Vec<String>,
}

/// RSVP submission payload
///
/// Fields default to empty so a missing field reaches validation instead of
/// failing JSON extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RsvpRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    #[validate(email, length(max = 254))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub meal: String,
}

impl RsvpRequest {
    /// True when any of the three required fields is blank
    pub fn has_missing_fields(&self) -> bool {
        self.name.trim().is_empty() || self.email.trim().is_empty() || self.meal.trim().is_empty()
    }
}

/// Stored RSVP record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rsvp {
    /// Position in the guest directory, fixed at first submission
    pub sequence: u64,
    pub name: String,
    /// Lower-cased, trimmed email; the upsert key
    pub email: String,
    pub meal_preference: String,
    /// Last submission time (UTC millis)
    pub submitted_at: i64,
}

/// Site access request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccessRequest {
    #[serde(default)]
    pub password: String,
}

/// Site access response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessResponse {
    pub authenticated: bool,
}

/// Message returned by a successful RSVP submission
pub const RSVP_SUCCESS_MESSAGE: &str = "RSVP submitted successfully!";

/// Normalise an email for use as the RSVP key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
