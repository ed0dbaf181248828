use sqlx::PgConnection;

use crate::{
    pkg::internal::adaptors::jobs::spec::{JobEntry, JobWithApplied},
    prelude::Result,
};

/// Wraps the free-text filter for a case-insensitive substring match.
/// LIKE metacharacters in the filter are literals, not wildcards.
pub fn like_pattern(filter: &str) -> String {
    let escaped = filter
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

// shared by count and list so both always agree on what matches
const FILTER_CLAUSE: &str =
    "(title ILIKE $1 OR company_name ILIKE $1 OR location ILIKE $1 OR description ILIKE $1)";

pub struct JobSelector<'a> {
    pool: &'a mut PgConnection,
}

impl<'a> JobSelector<'a> {
    pub fn new(pool: &'a mut PgConnection) -> Self {
        JobSelector { pool }
    }

    pub async fn get_by_id(&mut self, id: i32) -> Result<Option<JobEntry>> {
        let row = sqlx::query_as::<_, JobEntry>(
            "SELECT id, title, company_name, employer_id, salary, currency, location, description, created_at
             FROM jobs WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.pool)
        .await?;

        Ok(row)
    }

    pub async fn count(&mut self, filter: Option<&str>) -> Result<i64> {
        let value = match filter {
            None => {
                sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs")
                    .fetch_one(&mut *self.pool)
                    .await?
            }
            Some(filter) => {
                sqlx::query_scalar::<_, i64>(&format!(
                    "SELECT COUNT(*) FROM jobs WHERE {}",
                    FILTER_CLAUSE
                ))
                .bind(like_pattern(filter))
                .fetch_one(&mut *self.pool)
                .await?
            }
        };
        Ok(value)
    }

    /// Jobs by recency, offset/limit paginated, each flagged with whether
    /// `applicant_id` already applied to it. A missing limit returns the
    /// whole tail; an unknown or absent applicant flags everything false.
    pub async fn list(
        &mut self,
        applicant_id: Option<&str>,
        first: Option<i64>,
        offset: i64,
        filter: Option<&str>,
    ) -> Result<Vec<JobWithApplied>> {
        let rows = match filter {
            None => {
                sqlx::query_as::<_, JobWithApplied>(
                    "SELECT j.id, j.title, j.company_name, j.employer_id, j.salary, j.currency,
                            j.location, j.description, j.created_at,
                            EXISTS(SELECT 1 FROM applications a
                                   WHERE a.applicant_id = $1 AND a.job_id = j.id) AS applied
                     FROM jobs j
                     ORDER BY j.created_at DESC
                     OFFSET $2 LIMIT $3",
                )
                .bind(applicant_id)
                .bind(offset)
                .bind(first)
                .fetch_all(&mut *self.pool)
                .await?
            }
            Some(filter) => {
                sqlx::query_as::<_, JobWithApplied>(&format!(
                    "SELECT j.id, j.title, j.company_name, j.employer_id, j.salary, j.currency,
                            j.location, j.description, j.created_at,
                            EXISTS(SELECT 1 FROM applications a
                                   WHERE a.applicant_id = $2 AND a.job_id = j.id) AS applied
                     FROM jobs j
                     WHERE {}
                     ORDER BY j.created_at DESC
                     OFFSET $3 LIMIT $4",
                    FILTER_CLAUSE
                ))
                .bind(like_pattern(filter))
                .bind(applicant_id)
                .bind(offset)
                .bind(first)
                .fetch_all(&mut *self.pool)
                .await?
            }
        };
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn test_like_pattern_wraps_for_substring_match() {
        assert_eq!(like_pattern("rust"), "%rust%");
    }

    #[test]
    fn test_like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("100%_\\"), "%100\\%\\_\\\\%");
    }
}
