//! Billing alert banner
//!
//! Renders the current billing alert above the routed content. All decision
//! logic lives in `visibility`; this component is the imperative shell that
//! owns the per-instance dismissal flag, runs the one-shot report tracker in
//! a reactive effect, and dispatches the fire-and-forget "shown" report.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::alert_message::{AlertAction, AlertMessage};
use crate::router::routes;
use crate::state::billing::{BILLING_VERSION, BillingHandle};

pub mod visibility;


use visibility::{
    BannerState, ButtonAffordance, DismissState, ShownReportTracker, banner_state,
    button_affordance,
};

/// Billing alert banner bound to the billing state handle
#[component]
pub fn BillingAlerts(billing: BillingHandle) -> impl IntoView {
    // Dismissal is per component instance: recreating the banner resets it.
    let dismissal = RwSignal::new(DismissState::new());
    let tracker = StoredValue::new(ShownReportTracker::new());
    let location = use_location();

    // Transition detector for the one-shot report. Effects run after the
    // render decision for the same input snapshot; dismissal is not a gate.
    Effect::new(move |_| {
        let alert = billing.billing_alert.get();
        let version = billing.billing_version.get();
        let to_report = tracker
            .try_update_value(|t| t.observe(alert.as_ref(), &version, BILLING_VERSION))
            .flatten();
        if let Some(alert) = to_report {
            billing.report_alert_shown(alert);
        }
    });

    view! {
        {move || {
            let alert = billing.billing_alert.get()?;
            let version = billing.billing_version.get();
            let hidden = dismissal.get().is_hidden();

            let state = banner_state(Some(&alert), &version, BILLING_VERSION, hidden);
            if state == BannerState::Suppressed {
                return None;
            }

            let action =
                match button_affordance(&location.pathname.get(), routes::ORGANIZATION_BILLING) {
                    ButtonAffordance::Show => Some(AlertAction {
                        to: routes::ORGANIZATION_BILLING,
                        label: "Manage billing",
                    }),
                    ButtonAffordance::Suppress => None,
                };

            let status = alert.status;
            let on_close = (state == BannerState::VisibleDismissible)
                .then(|| Callback::new(move |()| dismissal.update(|d| d.dismiss(status))));

            Some(view! {
                <div class="billing-alerts">
                    <AlertMessage
                        status=alert.status
                        title=alert.title.clone()
                        message=alert.message.clone()
                        action=action
                        on_close=on_close
                    />
                </div>
            })
        }}
    }
}
