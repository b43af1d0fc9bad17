//! Client wrapper for the OTP verification endpoint. Keeps the path and
//! request shape in one place so route code never assembles HTTP calls
//! directly.

use crate::{
    app_lib::{AppError, post_json},
    features::otp::types::{ValidateOtpRequest, ValidateOtpResponse},
};

/// Submits an assembled code for verification.
/// Returns the server's confirmation message on success.
pub async fn validate_otp(
    request: &ValidateOtpRequest,
) -> Result<ValidateOtpResponse, AppError> {
    post_json("otp/validate", request).await
}
