use sqlx::PgConnection;
use uuid::Uuid;

use crate::pkg::internal::adaptors::applicants::selectors::ApplicantSelector;
use crate::pkg::internal::adaptors::applicants::spec::ApplicantEntry;
use crate::pkg::internal::adaptors::build_update;
use crate::prelude::Result;

pub struct ApplicantMutator<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> ApplicantMutator<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        ApplicantMutator { pool }
    }

    /// Registration is idempotent on email: re-signing up refreshes the name
    /// fields and leaves the resume blob untouched.
    pub async fn upsert(
        &mut self,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<ApplicantEntry> {
        let row = sqlx::query_as::<_, ApplicantEntry>(
            r#"
            INSERT INTO applicants (applicant_id, email, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO UPDATE
            SET first_name = EXCLUDED.first_name, last_name = EXCLUDED.last_name
            RETURNING applicant_id, email, first_name, last_name, resume
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(email)
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&mut *self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(
        &mut self,
        id: &str,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<Option<ApplicantEntry>> {
        let clauses = match build_update(&[
            ("first_name", first_name.is_some()),
            ("last_name", last_name.is_some()),
        ]) {
            Some(clauses) => clauses,
            // nothing to overwrite, hand back the current row
            None => return ApplicantSelector::new(&mut *self.pool).get_by_id(id).await,
        };
        let query = format!(
            "UPDATE applicants SET {} WHERE applicant_id = $1
             RETURNING applicant_id, email, first_name, last_name, resume",
            clauses
        );

        let mut q = sqlx::query_as::<_, ApplicantEntry>(&query).bind(id);
        if let Some(first_name) = first_name {
            q = q.bind(first_name);
        }
        if let Some(last_name) = last_name {
            q = q.bind(last_name);
        }
        let row = q.fetch_optional(&mut *self.pool).await?;
        Ok(row)
    }
}
