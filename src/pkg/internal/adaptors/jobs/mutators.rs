use sqlx::PgConnection;

use crate::pkg::internal::adaptors::jobs::spec::JobEntry;
use crate::prelude::Result;

pub struct CreateJobData<'a> {
    pub title: &'a str,
    pub company_name: &'a str,
    pub employer_id: &'a str,
    pub salary: i64,
    pub currency: &'a str,
    pub location: &'a str,
    pub description: &'a str,
}

pub struct JobMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobMutator { pool }
    }

    pub async fn create(&mut self, job: CreateJobData<'_>) -> Result<JobEntry> {
        let row = sqlx::query_as::<_, JobEntry>(
            r#"
            INSERT INTO jobs (title, company_name, employer_id, salary, currency, location, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, company_name, employer_id, salary, currency, location, description, created_at
            "#,
        )
        .bind(job.title)
        .bind(job.company_name)
        .bind(job.employer_id)
        .bind(job.salary)
        .bind(job.currency)
        .bind(job.location)
        .bind(job.description)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }
}
