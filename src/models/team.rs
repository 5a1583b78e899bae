//! Team configuration types
//!
//! `TeamConfig` is the full server-side record; `TeamConfigPatch` is the
//! sparse payload a settings control sends when one field changes.

use serde::{Deserialize, Serialize};

/// Per-team configuration relevant to the settings panels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TeamConfig {
    /// Whether session recording is enabled for this team
    #[serde(default)]
    pub session_recording_opt_in: bool,
    /// Whether browser console logs are captured inside recordings
    #[serde(default)]
    pub capture_console_log_opt_in: bool,
    /// Domains where recordings may run; empty means no restriction
    #[serde(default)]
    pub recording_domains: Vec<String>,
}

impl TeamConfig {
    /// Pure merge used for optimistic updates before the server responds.
    #[must_use]
    pub fn apply(&self, patch: &TeamConfigPatch) -> Self {
        Self {
            session_recording_opt_in: patch
                .session_recording_opt_in
                .unwrap_or(self.session_recording_opt_in),
            capture_console_log_opt_in: patch
                .capture_console_log_opt_in
                .unwrap_or(self.capture_console_log_opt_in),
            recording_domains: patch
                .recording_domains
                .clone()
                .unwrap_or_else(|| self.recording_domains.clone()),
        }
    }
}

/// Partial team update; only set fields are serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TeamConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_recording_opt_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture_console_log_opt_in: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_domains: Option<Vec<String>>,
}

impl TeamConfigPatch {
    /// True when the patch carries no changes
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.session_recording_opt_in.is_none()
            && self.capture_console_log_opt_in.is_none()
            && self.recording_domains.is_none()
    }
}
