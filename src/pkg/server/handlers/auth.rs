use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode, header::SET_COOKIE},
};
use serde::Deserialize;
use serde_json::{Value, json};
use standard_error::{Interpolate, StandardError, Status};
use validator::Validate;

use crate::{
    pkg::{
        internal::{
            adaptors::applicants::{mutators::ApplicantMutator, selectors::ApplicantSelector},
            auth::{Caller, Session},
        },
        server::state::{AppState, GetTxn},
    },
    prelude::Result,
};

#[derive(Deserialize, Validate)]
pub struct SignupInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Field cannot be empty"))]
    pub last_name: String,
}

#[derive(Deserialize, Validate)]
pub struct VerifyInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(equal = 6))]
    pub code: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupInput>,
) -> Result<Json<Value>> {
    input.validate().map_err(|e| {
        StandardError::new("ERR-VALIDATION-001")
            .interpolate_err(e.to_string())
            .code(StatusCode::BAD_REQUEST)
    })?;
    let mut tx = state.db_pool.begin_txn().await?;
    let applicant = ApplicantMutator::new(&mut *tx)
        .upsert(&input.email, &input.first_name, &input.last_name)
        .await?;
    tx.commit().await?;
    Session::issue(&state, &applicant).await?;
    Ok(Json(json!({"status": "verification code sent"})))
}

pub async fn verify(
    State(state): State<AppState>,
    Json(input): Json<VerifyInput>,
) -> Result<(HeaderMap, Json<Value>)> {
    input.validate().map_err(|e| {
        StandardError::new("ERR-VALIDATION-001")
            .interpolate_err(e.to_string())
            .code(StatusCode::BAD_REQUEST)
    })?;
    let mut tx = state.db_pool.begin_txn().await?;
    let applicant = ApplicantSelector::new(&mut *tx)
        .get_by_email(&input.email)
        .await?
        .ok_or_else(|| StandardError::new("ERR-AUTH-001").code(StatusCode::UNAUTHORIZED))?;
    drop(tx);

    let token = Session::verify_code(&state, &applicant.applicant_id, &input.code).await?;
    let mut headers = HeaderMap::new();
    headers.insert(
        SET_COOKIE,
        HeaderValue::from_str(&format!("_Host_token={}", &token))?,
    );
    Ok((headers, Json(json!({"status": "verified"}))))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(caller): Extension<Arc<Caller>>,
) -> Result<Json<Value>> {
    Session::expire_all(&state, &caller.applicant_id).await?;
    tracing::info!("applicant {} logged out", &caller.applicant_id);
    Ok(Json(json!({"status": "logged out"})))
}
