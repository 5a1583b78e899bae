//! Main application component
//!
//! Creates the state handles once and wires them into the router. The
//! billing banner renders inside the router, above the routed content, so it
//! appears on every page.

use leptos::prelude::*;

use crate::router::AppRouter;
use crate::state::{init_billing, init_preflight, init_signup, init_team};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let billing = init_billing();
    let team = init_team();
    let signup = init_signup();
    let preflight = init_preflight();

    view! {
        <div class="app-container">
            <header class="app-header">
                <h1>"Lensight"</h1>
                <nav class="app-nav">
                    <a href="/">"Home"</a>
                    <a href="/project/settings">"Settings"</a>
                    <a href="/organization/billing">"Billing"</a>
                </nav>
            </header>
            <main class="app-main">
                <AppRouter billing=billing team=team signup=signup preflight=preflight />
            </main>
            <footer class="app-footer">
                <p>"Lensight Analytics - admin dashboard"</p>
            </footer>
        </div>
    }
}
