//! Site access handler

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use shared::models::{AccessRequest, AccessResponse};

use crate::core::ServerState;
use crate::utils::validation::rejection_error;
use crate::utils::{AppResult, ErrorCode};

/// POST /api/access - check the site password
///
/// A wrong password is a normal answer, not an error.
pub async fn check(
    State(state): State<ServerState>,
    payload: Result<Json<AccessRequest>, JsonRejection>,
) -> AppResult<Json<AccessResponse>> {
    let Json(req) = payload.map_err(|e| rejection_error(e, ErrorCode::InvalidRequest))?;

    let authenticated = req.password == state.config.site_password();
    if !authenticated {
        tracing::info!("Site access denied");
    }

    Ok(Json(AccessResponse { authenticated }))
}
