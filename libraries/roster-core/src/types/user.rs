/// User domain types
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A registered user record
///
/// `id` is the primary key: unique across the registry and never
/// reassigned. `birthdate` carries no time component and serializes as an
/// ISO-8601 date string (`YYYY-MM-DD`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: i64,

    /// Display name
    pub username: String,

    /// Account balance
    pub wallet: f64,

    /// Date of birth
    pub birthdate: NaiveDate,
}

/// Partial update for an existing user
///
/// Absent fields mean "leave unchanged". No stored field is nullable, so
/// `None` always means "not provided" rather than "set to empty"; a JSON
/// `null` is treated the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdate {
    /// New display name, if provided
    #[serde(default)]
    pub username: Option<String>,

    /// New balance, if provided
    #[serde(default)]
    pub wallet: Option<f64>,

    /// New date of birth, if provided
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
}

impl User {
    /// Overwrite the fields present in `update`, leaving the rest untouched
    pub fn apply(&mut self, update: UserUpdate) {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(wallet) = update.wallet {
            self.wallet = wallet;
        }
        if let Some(birthdate) = update.birthdate {
            self.birthdate = birthdate;
        }
    }
}
