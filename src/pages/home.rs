//! Home page component

use leptos::prelude::*;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Lensight"</h1>
            <p>"Welcome to the Lensight admin dashboard"</p>
            <div class="feature-grid">
                <div class="feature-card">
                    <h2>"Project settings"</h2>
                    <p>"Configure session recording and capture options"</p>
                    <a href="/project/settings">"Go to Settings"</a>
                </div>
                <div class="feature-card">
                    <h2>"Billing"</h2>
                    <p>"Manage your organization's plan and payment details"</p>
                    <a href="/organization/billing">"Go to Billing"</a>
                </div>
            </div>
        </div>
    }
}
