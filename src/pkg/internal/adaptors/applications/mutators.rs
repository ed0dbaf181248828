use sqlx::PgConnection;

use crate::prelude::Result;

pub struct ApplicationMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationMutator { pool }
    }

    /// Records that the applicant applied to the job. Idempotent: applying
    /// twice to the same job leaves a single row. Returns false when the
    /// pair was already on file.
    pub async fn record(&mut self, applicant_id: &str, job_id: i32) -> Result<bool> {
        let result = sqlx::query(
            "INSERT INTO applications (applicant_id, job_id) VALUES ($1, $2)
             ON CONFLICT (applicant_id, job_id) DO NOTHING",
        )
        .bind(applicant_id)
        .bind(job_id)
        .execute(&mut *self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
