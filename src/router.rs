//! Router configuration
//!
//! Route constants plus the `AppRouter` component. The billing banner lives
//! inside the router so it can read the current location for its button
//! affordance.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::billing::BillingAlerts;
use crate::pages::{Home, NotFound, OrganizationBilling, ProjectSettings, Signup};
use crate::state::billing::BillingHandle;
use crate::state::preflight::PreflightHandle;
use crate::state::signup::SignupHandle;
use crate::state::team::TeamHandle;

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/";
    /// Navigation target of the billing banner's action button
    pub const ORGANIZATION_BILLING: &str = "/organization/billing";
    pub const PROJECT_SETTINGS: &str = "/project/settings";
    pub const SIGNUP: &str = "/signup";
}

/// Main router component that wraps the application
#[component]
pub fn AppRouter(
    billing: BillingHandle,
    team: TeamHandle,
    signup: SignupHandle,
    preflight: PreflightHandle,
) -> impl IntoView {
    view! {
        <Router>
            <BillingAlerts billing=billing />
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=StaticSegment("") view=Home />
                <Route
                    path=(StaticSegment("organization"), StaticSegment("billing"))
                    view=OrganizationBilling
                />
                <Route
                    path=(StaticSegment("project"), StaticSegment("settings"))
                    view=move || view! { <ProjectSettings team=team /> }
                />
                <Route
                    path=StaticSegment("signup")
                    view=move || view! { <Signup signup=signup preflight=preflight /> }
                />
            </Routes>
        </Router>
    }
}
