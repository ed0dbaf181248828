use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use standard_error::{Interpolate, StandardError, Status};
use validator::Validate;

use crate::{
    pkg::{
        internal::adaptors::employers::{
            mutators::EmployerMutator, selectors::EmployerSelector, spec::EmployerEntry,
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct CreateEmployerInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub company_name: String,
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEmployerInput>,
) -> Result<Json<EmployerEntry>> {
    input.validate().map_err(|e| {
        StandardError::new("ERR-VALIDATION-001")
            .interpolate_err(e.to_string())
            .code(StatusCode::BAD_REQUEST)
    })?;
    let mut tx = state.db_pool.begin_txn().await?;
    let employer = EmployerMutator::new(&mut *tx)
        .create(&input.email, &input.company_name)
        .await?;
    tx.commit().await?;
    Ok(Json(employer))
}

pub async fn retrieve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<EmployerEntry>>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let employer = EmployerSelector::new(&mut *tx).get_by_id(&id).await?;
    Ok(Json(employer))
}

#[derive(Deserialize)]
pub struct UpdateEmployerInput {
    pub company_name: Option<String>,
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateEmployerInput>,
) -> Result<Json<EmployerEntry>> {
    let mut tx = state.db_pool.begin_txn().await?;
    let employer = EmployerMutator::new(&mut *tx)
        .update(&id, input.company_name)
        .await?
        .ok_or_else(|| {
            StandardError::new(&format!(
                "ERR-EMPLOYER-001: Employer with id: {} does not exist",
                &id
            ))
            .code(StatusCode::NOT_FOUND)
        })?;
    tx.commit().await?;
    Ok(Json(employer))
}
