//! Billing alert types
//!
//! Alerts are supplied by the billing backend and treated as immutable for
//! the duration of a render cycle. Identity for "shown" reporting purposes is
//! the `Arc` reference, not the content; see
//! `components::billing::visibility`.

use serde::{Deserialize, Serialize};

/// Severity of a billing alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    /// Informational notice
    #[default]
    Info,
    /// Something needs attention soon
    Warning,
    /// Billing is broken; the banner cannot be dismissed
    Error,
}

impl AlertStatus {
    /// Error alerts stay up until the alert itself is cleared upstream.
    #[must_use]
    pub const fn is_dismissible(&self) -> bool {
        !matches!(self, Self::Error)
    }

    /// Get CSS class for styling
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Info => "alert-info",
            Self::Warning => "alert-warning",
            Self::Error => "alert-error",
        }
    }

    /// Get icon character for display
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Warning => "⚠",
            Self::Error => "✕",
        }
    }

    /// Get accent color for the banner
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Info => "#3b82f6",    // blue-500
            Self::Warning => "#f59e0b", // amber-500
            Self::Error => "#ef4444",   // red-500
        }
    }
}

impl std::fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A billing-status notice sourced from the billing backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAlert {
    /// Severity, which also decides whether the banner can be dismissed
    pub status: AlertStatus,
    /// Short headline
    pub title: String,
    /// Longer explanation shown under the headline
    pub message: String,
}

impl BillingAlert {
    /// Create a new alert
    #[must_use]
    pub fn new(status: AlertStatus, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Billing status payload returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BillingStatus {
    /// Current alert, if the billing system has one to surface
    #[serde(default)]
    pub alert: Option<BillingAlert>,
    /// Which billing system generation is active (e.g. "v2")
    #[serde(default)]
    pub version: String,
}
