use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmployerEntry {
    pub employer_id: String,
    pub email: String,
    pub company_name: String,
}
