//! Request validation helpers
//!
//! Map `validator` failures and JSON extraction rejections onto the shared
//! error codes.

use axum::extract::rejection::JsonRejection;
use validator::ValidationErrors;

use crate::utils::{AppError, ErrorCode};

/// Convert field validation failures into an `AppError`
///
/// An invalid email gets its own code; anything else is reported as a
/// generic validation failure. Failing field names go into `details`.
pub fn validation_error(errors: &ValidationErrors, email_field: &str) -> AppError {
    let fields = errors.field_errors();
    let code = if fields.contains_key(email_field) {
        ErrorCode::RsvpInvalidEmail
    } else {
        ErrorCode::ValidationFailed
    };

    let mut names: Vec<String> = fields.keys().map(|k| k.to_string()).collect();
    names.sort_unstable();
    AppError::new(code).with_detail("fields", names)
}

/// Convert a JSON body rejection into `code`, keeping the reason in `details`
pub fn rejection_error(rejection: JsonRejection, code: ErrorCode) -> AppError {
    tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
    AppError::new(code).with_detail("reason", rejection.body_text())
}
