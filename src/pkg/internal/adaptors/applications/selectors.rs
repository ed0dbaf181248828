use sqlx::PgConnection;

use crate::prelude::Result;

pub struct ApplicationSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicationSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicationSelector { pool }
    }

    /// False for unknown applicant or job ids as well as unapplied pairs.
    pub async fn exists(&mut self, applicant_id: &str, job_id: i32) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM applications WHERE applicant_id = $1 AND job_id = $2)",
        )
        .bind(applicant_id)
        .bind(job_id)
        .fetch_one(&mut *self.pool)
        .await?;

        Ok(exists)
    }
}
