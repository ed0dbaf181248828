use sqlx::PgConnection;
use uuid::Uuid;

use crate::pkg::internal::adaptors::build_update;
use crate::pkg::internal::adaptors::employers::selectors::EmployerSelector;
use crate::pkg::internal::adaptors::employers::spec::EmployerEntry;
use crate::prelude::Result;

pub struct EmployerMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> EmployerMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        EmployerMutator { pool }
    }

    pub async fn create(&mut self, email: &str, company_name: &str) -> Result<EmployerEntry> {
        let row = sqlx::query_as::<_, EmployerEntry>(
            r#"
            INSERT INTO employers (employer_id, email, company_name)
            VALUES ($1, $2, $3)
            RETURNING employer_id, email, company_name
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(email)
        .bind(company_name)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(
        &mut self,
        id: &str,
        company_name: Option<String>,
    ) -> Result<Option<EmployerEntry>> {
        let clauses = match build_update(&[("company_name", company_name.is_some())]) {
            Some(clauses) => clauses,
            None => return EmployerSelector::new(&mut *self.pool).get_by_id(id).await,
        };
        let query = format!(
            "UPDATE employers SET {} WHERE employer_id = $1
             RETURNING employer_id, email, company_name",
            clauses
        );

        let mut q = sqlx::query_as::<_, EmployerEntry>(&query).bind(id);
        if let Some(company_name) = company_name {
            q = q.bind(company_name);
        }
        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }
}
