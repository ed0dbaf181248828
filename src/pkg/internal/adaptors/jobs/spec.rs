use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobEntry {
    pub id: i32,
    pub title: String,
    pub company_name: String,
    pub employer_id: String,
    pub salary: i64,
    pub currency: String,
    pub location: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// A job row as seen by a particular applicant: carries whether that
/// applicant already has an application on file for it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobWithApplied {
    pub id: i32,
    pub title: String,
    pub company_name: String,
    pub employer_id: String,
    pub salary: i64,
    pub currency: String,
    pub location: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub applied: bool,
}
