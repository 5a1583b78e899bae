//! Preflight status
//!
//! Fetched once on startup; currently only the demo-environment flag is
//! consumed (it changes the signup submit button copy).

use serde::{Deserialize, Serialize};

/// Deployment-level flags reported by the backend before any auth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PreflightStatus {
    /// True when this instance serves the demo environment
    #[serde(default)]
    pub demo: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_non_demo() {
        let status: Result<PreflightStatus, _> = serde_json::from_str("{}");
        assert_eq!(status.ok(), Some(PreflightStatus { demo: false }));
    }

    #[test]
    fn test_demo_flag_parses() {
        let status: Result<PreflightStatus, _> = serde_json::from_str("{\"demo\":true}");
        assert_eq!(status.ok(), Some(PreflightStatus { demo: true }));
    }
}
