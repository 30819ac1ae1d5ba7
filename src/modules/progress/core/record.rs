// Record types stored per user.
//
// Purpose
// - Give the store boundary an explicit schema instead of free-form documents.
//
// Responsibilities
// - One UserRecord per normalized email, holding identity, the denormalized
//   "latest update" fields, and the full day-by-day history.

use serde::{Deserialize, Serialize};

/// One calendar date's activity for one user. `module` is the latest value
/// recorded for the date, `modules` every distinct value in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: String,
    pub module: String,
    pub modules: Vec<String>,
    pub need_guidelines: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub email: String,
    pub name: String,
    pub last_module: String,
    pub last_date: String,
    pub last_need_guidelines: bool,
    pub created_at: i64,
    pub updated_at: i64,
    pub history: Vec<DayRecord>,
}
