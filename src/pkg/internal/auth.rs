use crate::{
    pkg::{
        internal::{
            adaptors::applicants::spec::ApplicantEntry,
            email::{SendEmail, logincode::LoginCodeTemplate},
        },
        server::state::AppState,
    },
    prelude::Result,
};
use axum::http::StatusCode;
use rand::Rng;
use sqlx::{
    prelude::{FromRow, Type},
    types::time::OffsetDateTime,
};
use standard_error::{StandardError, Status};
use uuid::Uuid;

#[derive(Debug, Type)]
#[sqlx(type_name = "session_status", rename_all = "lowercase")]
pub enum SessionStatus {
    Pending,
    Verified,
    Rejected,
    Expired,
}

#[derive(FromRow, Debug)]
pub struct Session {
    pub token: Uuid,
    pub applicant_id: String,
    pub code: String,
    pub expiry: OffsetDateTime,
    pub status: SessionStatus,
}

/// The authenticated caller. The authn middleware attaches this to the
/// request; handlers receive it as an explicit extension value.
#[derive(Debug, Clone)]
pub struct Caller {
    pub applicant_id: String,
}

impl Session {
    fn generate_code() -> String {
        let mut rng = rand::rng();
        (0..6)
            .map(|_| rng.random_range(0..10).to_string())
            .collect()
    }

    /// Opens a pending session for the applicant and emails them the code.
    pub async fn issue(state: &AppState, applicant: &ApplicantEntry) -> Result<()> {
        let code = Self::generate_code();
        tracing::debug!("issued code for {}", &applicant.applicant_id);
        sqlx::query(
            "INSERT INTO sessions (applicant_id, code, expiry)
             VALUES ($1, $2, NOW() + interval '1 hour')",
        )
        .bind(&applicant.applicant_id)
        .bind(&code)
        .execute(&*state.db_pool)
        .await?;
        LoginCodeTemplate {
            name: &applicant.first_name,
            code: &code,
        }
        .send(&state.mailer, &applicant.email)?;
        Ok(())
    }

    /// Exchanges a pending code for a verified session token. A wrong code
    /// rejects the session; a fresh one has to be issued.
    pub async fn verify_code(state: &AppState, applicant_id: &str, code: &str) -> Result<Uuid> {
        let pool = &*state.db_pool;
        let session = sqlx::query_as::<_, Session>(
            "SELECT token, applicant_id, code, expiry, status FROM sessions
             WHERE applicant_id = $1 AND status = $2 AND expiry > NOW()
             ORDER BY expiry DESC LIMIT 1",
        )
        .bind(applicant_id)
        .bind(SessionStatus::Pending)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| StandardError::new("ERR-AUTH-001").code(StatusCode::UNAUTHORIZED))?;

        if session.code != code {
            sqlx::query("UPDATE sessions SET status = $1 WHERE token = $2")
                .bind(SessionStatus::Rejected)
                .bind(session.token)
                .execute(pool)
                .await?;
            return Err(StandardError::new("ERR-AUTH-003").code(StatusCode::UNAUTHORIZED));
        }

        sqlx::query("UPDATE sessions SET status = $1 WHERE token = $2")
            .bind(SessionStatus::Verified)
            .bind(session.token)
            .execute(pool)
            .await?;
        Ok(session.token)
    }

    pub async fn check_token_validity(state: &AppState, token_str: &str) -> Result<Caller> {
        let token = token_str
            .parse::<Uuid>()
            .map_err(|_| StandardError::new("ERR-AUTH-002"))?;

        let applicant_id = sqlx::query_scalar::<_, String>(
            "SELECT applicant_id FROM sessions
             WHERE token = $1 AND status = $2 AND expiry > NOW()",
        )
        .bind(token)
        .bind(SessionStatus::Verified)
        .fetch_optional(&*state.db_pool)
        .await?;

        match applicant_id {
            Some(applicant_id) => Ok(Caller { applicant_id }),
            None => Err(StandardError::new("ERR-AUTH-001")),
        }
    }

    /// Logout: every verified session for the applicant goes stale.
    pub async fn expire_all(state: &AppState, applicant_id: &str) -> Result<()> {
        sqlx::query("UPDATE sessions SET status = $1 WHERE applicant_id = $2 AND status = $3")
            .bind(SessionStatus::Expired)
            .bind(applicant_id)
            .bind(SessionStatus::Verified)
            .execute(&*state.db_pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::Session;

    #[test]
    #[traced_test]
    fn test_generated_code_is_six_digits() {
        let code = Session::generate_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}
