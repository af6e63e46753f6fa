use crate::domain::{GenerationError, GenerationOutcome, GenerationRequest};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Generation endpoint used when none is configured.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable overriding the generation endpoint.
const BASE_URL_VAR: &str = "COUPON_SERVICE_URL";

#[derive(Serialize)]
struct GenerateCouponBody<'a> {
    retailer: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateCouponReply {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the remote coupon generation service.
pub struct CouponService {
    client: Client,
    base_url: String,
}

impl CouponService {
    /// Creates a client against the configured endpoint.
    ///
    /// The base URL is read from `COUPON_SERVICE_URL`, falling back to
    /// the local development default.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Performs the single outbound call for a generation request.
    ///
    /// One POST per request; there is no retry and no client-side
    /// timeout, so failure timing is whatever the transport reports.
    /// A request that gets no response at all maps to
    /// [`GenerationError::Transport`].
    pub fn generate(&self, request: &GenerationRequest) -> GenerationOutcome {
        let url = format!("{}/generate-coupon", self.base_url);
        let body = GenerateCouponBody {
            retailer: request.retailer.name(),
        };

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .map_err(|_| GenerationError::Transport)?;

        let success = response.status().is_success();
        let reply = response.json::<GenerateCouponReply>().unwrap_or_default();
        interpret_reply(success, reply)
    }
}

/// Maps a service reply onto the generation outcome.
///
/// Pure over the decoded reply so the taxonomy stays testable without a
/// transport in play: a failure status surfaces the service's error text
/// when present, and a success status must carry a non-empty code.
fn interpret_reply(success: bool, reply: GenerateCouponReply) -> GenerationOutcome {
    if !success {
        let message = reply
            .error
            .unwrap_or_else(|| "Failed to generate coupon".to_string());
        return Err(GenerationError::Service(message));
    }

    match reply.code {
        Some(code) if !code.is_empty() => Ok(code),
        _ => Err(GenerationError::MissingCode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> GenerateCouponReply {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let body = GenerateCouponBody { retailer: "Amazon" };
        let encoded = serde_json::to_value(&body).unwrap();
        assert_eq!(encoded, serde_json::json!({ "retailer": "Amazon" }));
    }

    #[test]
    fn test_success_reply_yields_code() {
        let outcome = interpret_reply(true, reply(r#"{"code":"ABC123"}"#));
        assert_eq!(outcome, Ok("ABC123".to_string()));
    }

    #[test]
    fn test_failure_reply_surfaces_service_error() {
        let outcome = interpret_reply(false, reply(r#"{"error":"rate limited"}"#));
        assert_eq!(
            outcome,
            Err(GenerationError::Service("rate limited".to_string()))
        );
    }

    #[test]
    fn test_failure_reply_without_error_text_uses_fallback() {
        let outcome = interpret_reply(false, reply("{}"));
        assert_eq!(
            outcome,
            Err(GenerationError::Service(
                "Failed to generate coupon".to_string()
            ))
        );
    }

    #[test]
    fn test_success_reply_without_code_is_rejected() {
        let outcome = interpret_reply(true, reply("{}"));
        assert_eq!(outcome, Err(GenerationError::MissingCode));
    }

    #[test]
    fn test_empty_code_counts_as_missing() {
        let outcome = interpret_reply(true, reply(r#"{"code":""}"#));
        assert_eq!(outcome, Err(GenerationError::MissingCode));
    }

    #[test]
    fn test_stray_reply_fields_are_tolerated() {
        let outcome = interpret_reply(true, reply(r#"{"code":"XYZ","source":"cache"}"#));
        assert_eq!(outcome, Ok("XYZ".to_string()));
    }

    #[test]
    fn test_transport_error_message_is_user_safe() {
        assert_eq!(
            GenerationError::Transport.to_string(),
            "Failed to generate coupon. Please try again."
        );
    }
}
