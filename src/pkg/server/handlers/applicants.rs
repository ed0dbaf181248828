use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use standard_error::{StandardError, Status};

use crate::{
    pkg::{
        internal::adaptors::applicants::{
            mutators::ApplicantMutator, selectors::ApplicantSelector, spec::ApplicantEntry,
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

/// Single-entity lookup: a missing applicant is a null body, not an error.
pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<ApplicantEntry>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let applicant = ApplicantSelector::new(&mut *tx).get_by_id(&id).await?;
    Ok(Json(applicant))
}

#[derive(Deserialize)]
pub struct UpdateApplicantInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateApplicantInput>,
) -> Result<Json<ApplicantEntry>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let applicant = ApplicantMutator::new(&mut *tx)
        .update(&id, input.first_name, input.last_name)
        .await?
        .ok_or_else(|| {
            StandardError::new(&format!(
                "ERR-APPLICANT-001: Applicant with id: {} does not exist",
                &id
            ))
            .code(StatusCode::NOT_FOUND)
        })?;
    tx.commit().await?;
    Ok(Json(applicant))
}

/// Same null-on-missing policy as `retrieve`; otherwise true iff the resume
/// blob holds something other than the sentinel.
pub async fn resume_exists(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<bool>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let applicant = ApplicantSelector::new(&mut *tx).get_by_id(&id).await?;
    Ok(Json(applicant.map(|a| a.has_resume())))
}
