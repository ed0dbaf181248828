use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use standard_error::{StandardError, Status};

use crate::{
    pkg::{
        internal::{
            adaptors::{
                applicants::selectors::ApplicantSelector,
                applications::{mutators::ApplicationMutator, selectors::ApplicationSelector},
                employers::selectors::EmployerSelector,
                jobs::selectors::JobSelector,
            },
            auth::Caller,
            email::{SendEmail, application::ApplicationNotice},
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

#[derive(Deserialize)]
pub struct ApplicationExistsQuery {
    pub applicant_id: String,
    pub job_id: i32,
}

pub async fn exists(
    State(state): State<AppState>,
    Query(params): Query<ApplicationExistsQuery>,
) -> Result<Json<bool>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let exists = ApplicationSelector::new(&mut *tx)
        .exists(&params.applicant_id, params.job_id)
        .await?;
    Ok(Json(exists))
}

#[derive(Deserialize)]
pub struct ApplyInput {
    pub job_id: i32,
}

/// The apply workflow: validate applicant, job, and owning employer, record
/// the application, then hand the employer notice to the mailer. The
/// response never waits on delivery.
pub async fn apply(
    State(state): State<AppState>,
    Extension(caller): Extension<Arc<Caller>>,
    Json(input): Json<ApplyInput>,
) -> Result<()> {
    let mut tx = state.db_pool.begin_txn().await?;

    let applicant = ApplicantSelector::new(&mut *tx)
        .get_by_id(&caller.applicant_id)
        .await?
        .ok_or_else(|| {
            StandardError::new(&format!(
                "ERR-APPLICANT-001: Applicant with id: {} does not exist",
                &caller.applicant_id
            ))
            .code(StatusCode::NOT_FOUND)
        })?;

    let job = JobSelector::new(&mut *tx)
        .get_by_id(input.job_id)
        .await?
        .ok_or_else(|| {
            StandardError::new(&format!(
                "ERR-JOB-001: Job with id: {} does not exist",
                input.job_id
            ))
            .code(StatusCode::NOT_FOUND)
        })?;

    let employer = EmployerSelector::new(&mut *tx)
        .get_by_id(&job.employer_id)
        .await?
        .ok_or_else(|| {
            StandardError::new(&format!(
                "ERR-EMPLOYER-001: Employer with id: {} does not exist",
                &job.employer_id
            ))
            .code(StatusCode::NOT_FOUND)
        })?;

    let newly_recorded = ApplicationMutator::new(&mut *tx)
        .record(&applicant.applicant_id, job.id)
        .await?;
    tx.commit().await?;
    if !newly_recorded {
        tracing::debug!(
            "applicant {} re-applied to job {}",
            &applicant.applicant_id,
            job.id
        );
    }

    ApplicationNotice {
        job_title: &job.title,
        first_name: &applicant.first_name,
        last_name: &applicant.last_name,
    }
    .send(&state.mailer, &employer.email)?;

    Ok(())
}
