//! Billing state handle
//!
//! Exposes the current billing alert (if any) and the active billing
//! generation as read signals, plus the one-way "alert shown" report action.
//! Alerts are wrapped in `Arc` so the visibility core can use reference
//! identity for its one-shot reporting guarantee.

use std::sync::Arc;

use leptos::prelude::*;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;

use crate::models::BillingAlert;
use crate::state::api;

/// Billing system generation this UI knows how to act on. Alerts under any
/// other generation are suppressed entirely.
pub const BILLING_VERSION: &str = "v2";

/// Telemetry event emitted when the banner's show-condition becomes true
pub const ALERT_SHOWN_EVENT: &str = "billing alert shown";

/// Read access to billing state plus the report action
#[derive(Clone, Copy)]
pub struct BillingHandle {
    /// Current alert, or `None` when billing has nothing to surface
    pub billing_alert: ReadSignal<Option<Arc<BillingAlert>>>,
    /// Active billing generation tag; empty until the first fetch lands
    pub billing_version: ReadSignal<String>,
}

/// Create the billing handle and kick off the initial status fetch
pub fn init_billing() -> BillingHandle {
    let (billing_alert, set_alert) = signal(None);
    let (billing_version, set_version) = signal(String::new());

    spawn_local(async move {
        match api::fetch_billing_status().await {
            Ok(status) => {
                set_version.set(status.version);
                set_alert.set(status.alert.map(Arc::new));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("billing status fetch failed: {}", e).into());
            }
        }
    });

    BillingHandle {
        billing_alert,
        billing_version,
    }
}

impl BillingHandle {
    /// Report sink invocation: fire-and-forget, no retry, failure is logged
    /// and absorbed. One-shot gating lives in the visibility core, not here.
    pub fn report_alert_shown(&self, alert: Arc<BillingAlert>) {
        spawn_local(async move {
            let properties = json!({
                "status": alert.status.to_string(),
                "title": alert.title,
            });
            if let Err(e) = api::capture_event(ALERT_SHOWN_EVENT, properties).await {
                web_sys::console::error_1(&format!("alert shown report failed: {}", e).into());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_billing_version() {
        assert_eq!(BILLING_VERSION, "v2");
    }

    #[test]
    fn test_alert_shown_event_name() {
        assert_eq!(ALERT_SHOWN_EVENT, "billing alert shown");
    }
}
