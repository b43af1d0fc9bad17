//! Wire types for the OTP verification endpoint.

use serde::{Deserialize, Serialize};

/// Body of `POST otp/validate`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateOtpRequest {
    /// The joined code, exactly six decimal digits once local validation has
    /// passed.
    pub otp: String,
}

/// Payload returned by the verification service on both the success and the
/// rejection path; `message` is shown to the user verbatim.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateOtpResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ValidateOtpRequest, ValidateOtpResponse};

    #[test]
    fn request_serializes_to_the_expected_shape() {
        let request = ValidateOtpRequest {
            otp: "123456".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "otp": "123456" }));
    }

    #[test]
    fn response_deserializes_the_message_field() {
        let response: ValidateOtpResponse =
            serde_json::from_value(json!({ "message": "OTP verified" })).unwrap();
        assert_eq!(response.message, "OTP verified");
    }

    #[test]
    fn wire_types_round_trip_in_both_directions() {
        let request: ValidateOtpRequest =
            serde_json::from_value(json!({ "otp": "654321" })).unwrap();
        assert_eq!(request.otp, "654321");

        let response = ValidateOtpResponse {
            message: "OTP verified".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({ "message": "OTP verified" }));
    }
}
