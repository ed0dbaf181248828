use sqlx::PgConnection;

use crate::{pkg::internal::adaptors::employers::spec::EmployerEntry, prelude::Result};

pub struct EmployerSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EmployerSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EmployerSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: &str) -> Result<Option<EmployerEntry>> {
        let row = sqlx::query_as::<_, EmployerEntry>(
            "SELECT employer_id, email, company_name
             FROM employers WHERE employer_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn get_by_company(&mut self, company_name: &str) -> Result<Option<EmployerEntry>> {
        let row = sqlx::query_as::<_, EmployerEntry>(
            "SELECT employer_id, email, company_name
             FROM employers WHERE company_name = $1",
        )
        .bind(company_name)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }
}
