//! REST client for the Lensight backend
//!
//! Thin typed wrappers over gloo-net. Callers in the state layer decide what
//! to do with failures; fire-and-forget callers log and drop them.

use gloo_net::http::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{BillingStatus, PreflightStatus, SignupRequest, TeamConfig, TeamConfigPatch};

/// Backend endpoints
pub mod endpoints {
    pub const BILLING_STATUS: &str = "/api/billing";
    pub const CURRENT_TEAM: &str = "/api/team";
    pub const PREFLIGHT: &str = "/api/preflight";
    pub const SIGNUP: &str = "/api/signup";
    pub const EVENT_CAPTURE: &str = "/api/event";
}

/// Errors surfaced by backend calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("request failed: {0}")]
    Request(String),
    /// The backend answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },
    /// The response body did not match the expected shape
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// Result type for backend calls
pub type Result<T> = std::result::Result<T, ApiError>;

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

async fn patch_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T> {
    let response = Request::patch(url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<()> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    Ok(())
}

/// Fetch the current billing alert and billing generation
pub async fn fetch_billing_status() -> Result<BillingStatus> {
    get_json(endpoints::BILLING_STATUS).await
}

/// Fetch the current team configuration
pub async fn fetch_current_team() -> Result<TeamConfig> {
    get_json(endpoints::CURRENT_TEAM).await
}

/// Fetch deployment preflight flags
pub async fn fetch_preflight() -> Result<PreflightStatus> {
    get_json(endpoints::PREFLIGHT).await
}

/// Apply a sparse team update; the response is the full updated record
pub async fn patch_current_team(patch: &TeamConfigPatch) -> Result<TeamConfig> {
    patch_json(endpoints::CURRENT_TEAM, patch).await
}

/// Submit a validated signup request
pub async fn post_signup(request: &SignupRequest) -> Result<()> {
    post_json(endpoints::SIGNUP, request).await
}

#[derive(Serialize)]
struct CaptureRequest<'a> {
    event: &'a str,
    properties: serde_json::Value,
}

/// One-way telemetry capture. The caller owns the fire-and-forget contract;
/// this function still reports failures so they can be logged.
pub async fn capture_event(event: &str, properties: serde_json::Value) -> Result<()> {
    post_json(endpoints::EVENT_CAPTURE, &CaptureRequest { event, properties }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Request("network down".to_string());
        assert_eq!(err.to_string(), "request failed: network down");

        let err = ApiError::Status {
            url: "/api/team".to_string(),
            status: 503,
        };
        assert_eq!(err.to_string(), "unexpected status 503 from /api/team");

        let err = ApiError::Decode {
            url: "/api/billing".to_string(),
            message: "missing field".to_string(),
        };
        assert!(err.to_string().contains("/api/billing"));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_endpoints_are_api_rooted() {
        let all = [
            endpoints::BILLING_STATUS,
            endpoints::CURRENT_TEAM,
            endpoints::PREFLIGHT,
            endpoints::SIGNUP,
            endpoints::EVENT_CAPTURE,
        ];
        for endpoint in all {
            assert!(endpoint.starts_with("/api/"), "{} not under /api/", endpoint);
            assert!(!endpoint.ends_with('/'));
        }
    }

    #[test]
    fn test_capture_request_shape() {
        let body = CaptureRequest {
            event: "billing alert shown",
            properties: serde_json::json!({"status": "warning"}),
        };
        let json = serde_json::to_value(&body);
        assert_eq!(
            json.ok(),
            Some(serde_json::json!({
                "event": "billing alert shown",
                "properties": {"status": "warning"},
            }))
        );
    }
}
