//! Organization billing page
//!
//! Navigation target for the billing banner's "Manage billing" button. While
//! the user is here the banner suppresses that button.

use leptos::prelude::*;

/// Billing management page
#[component]
pub fn OrganizationBilling() -> impl IntoView {
    view! {
        <div class="billing-page">
            <h1>"Billing"</h1>
            <p>"Manage your organization's plan, usage, and payment details."</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_page_exists() {
        let _component = OrganizationBilling;
    }
}
