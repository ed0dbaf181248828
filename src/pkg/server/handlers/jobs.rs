use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use standard_error::{Interpolate, StandardError, Status};
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::{
            employers::selectors::EmployerSelector,
            jobs::{
                mutators::{CreateJobData, JobMutator},
                selectors::JobSelector,
                spec::{JobEntry, JobWithApplied},
            },
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct CreateJobInput {
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub company_name: String,
    #[validate(range(min = 0))]
    pub salary: i64,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub currency: String,
    pub location: String,
    pub description: String,
}

/// Posting a job pins it to the employer owning the company name, so later
/// lookups never depend on a text match.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateJobInput>,
) -> Result<Json<JobEntry>> {
    input.validate().map_err(|e| {
        StandardError::new("ERR-VALIDATION-001")
            .interpolate_err(e.to_string())
            .code(StatusCode::BAD_REQUEST)
    })?;
    let mut tx = state.db_pool.begin_txn().await?;
    let employer = EmployerSelector::new(&mut *tx)
        .get_by_company(&input.company_name)
        .await?
        .ok_or_else(|| {
            StandardError::new(&format!(
                "ERR-EMPLOYER-001: Employer with name: {} does not exist",
                &input.company_name
            ))
            .code(StatusCode::NOT_FOUND)
        })?;
    let job = JobMutator::new(&mut *tx)
        .create(CreateJobData {
            title: &input.title,
            company_name: &employer.company_name,
            employer_id: &employer.employer_id,
            salary: input.salary,
            currency: &input.currency,
            location: &input.location,
            description: &input.description,
        })
        .await?;
    tx.commit().await?;
    Ok(Json(job))
}

#[derive(Deserialize)]
pub struct ListJobsQuery {
    pub applicant_id: Option<String>,
    pub first: Option<i64>,
    pub offset: Option<i64>,
    pub filter: Option<String>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListJobsQuery>,
) -> Result<Json<Vec<JobWithApplied>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let jobs = JobSelector::new(&mut *tx)
        .list(
            params.applicant_id.as_deref(),
            params.first,
            params.offset.unwrap_or(0),
            params.filter.as_deref(),
        )
        .await?;
    Ok(Json(jobs))
}

#[derive(Serialize)]
pub struct JobCount {
    pub value: i64,
}

#[derive(Deserialize)]
pub struct JobCountQuery {
    pub filter: Option<String>,
}

pub async fn count(
    State(state): State<AppState>,
    Query(params): Query<JobCountQuery>,
) -> Result<Json<JobCount>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let value = JobSelector::new(&mut *tx)
        .count(params.filter.as_deref())
        .await?;
    Ok(Json(JobCount { value }))
}
