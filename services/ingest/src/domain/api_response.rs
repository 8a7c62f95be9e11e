/// API Gateway response types
use std::collections::HashMap;

use serde::Serialize;
use serde_json::{Value, json};

/// Response returned to API Gateway
///
/// Field names follow the proxy integration contract
/// (statusCode / headers / body). The body is a serialized
/// JSON string, not a nested object.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Serialized JSON body
    pub body: String,
}

impl ApiResponse {
    /// Create the fixed success response for a completed write
    pub fn ok() -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        ApiResponse {
            status_code: 200,
            headers,
            body: json!({"message": "Successfully inserted data!"}).to_string(),
        }
    }

    /// Convert the response into a JSON value for the Lambda runtime
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(json!(null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Success response shape
    #[test]
    fn test_ok_response_fields() {
        let response = ApiResponse::ok();

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(response.body, r#"{"message":"Successfully inserted data!"}"#);
    }

    // Serialized field names follow the proxy integration contract
    #[test]
    fn test_ok_response_to_value() {
        let value = ApiResponse::ok().to_value();

        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["headers"]["Content-Type"], "application/json");

        // body is a string, not a nested object
        let body = value["body"].as_str().expect("body must be a string");
        let body_json: Value = serde_json::from_str(body).expect("body must be valid JSON");
        assert_eq!(body_json["message"], "Successfully inserted data!");
    }
}
