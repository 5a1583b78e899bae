//! Signup page

use leptos::prelude::*;

use crate::components::signup_panel::SignupPanel;
use crate::state::preflight::PreflightHandle;
use crate::state::signup::SignupHandle;

/// Signup page hosting the form panel
#[component]
pub fn Signup(signup: SignupHandle, preflight: PreflightHandle) -> impl IntoView {
    view! {
        <div class="signup-page">
            <h1>"Create your account"</h1>
            <SignupPanel signup=signup preflight=preflight />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_page_exists() {
        let _component = Signup;
    }
}
