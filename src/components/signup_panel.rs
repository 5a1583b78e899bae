//! Signup form panel
//!
//! Binds raw field state to a form signal, validates on submit through
//! `build_signup_request`, and disables everything while a request is in
//! flight. The demo environment swaps the submit button copy.

use leptos::prelude::*;

use crate::models::{SignupForm, SignupRole, build_signup_request};
use crate::state::preflight::PreflightHandle;
use crate::state::signup::SignupHandle;

/// Signup form panel
#[component]
pub fn SignupPanel(signup: SignupHandle, preflight: PreflightHandle) -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());
    let error = RwSignal::new(Option::<String>::None);

    let submitting = signup.submitting;
    let demo = move || preflight.preflight.get().is_some_and(|p| p.demo);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match build_signup_request(&form.get_untracked()) {
            Ok(request) => {
                error.set(None);
                signup.submit(request);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let button_label = move || {
        if !demo() {
            "Create account"
        } else if !submitting.get() {
            "Enter the demo environment"
        } else {
            "Preparing demo data..."
        }
    };

    view! {
        <form class="signup-panel" on:submit=on_submit>
            <label class="signup-field">
                "Your name"
                <input
                    type="text"
                    placeholder="Jane Doe"
                    prop:value=move || form.get().first_name
                    on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    disabled=move || submitting.get()
                />
            </label>

            <label class="signup-field">
                "Organization name"
                <input
                    type="text"
                    placeholder="Hogflix Movies"
                    prop:value=move || form.get().organization_name
                    on:input=move |ev| {
                        form.update(|f| f.organization_name = event_target_value(&ev))
                    }
                    disabled=move || submitting.get()
                />
            </label>

            <label class="signup-field">
                "What is your role?"
                <select
                    on:change=move |ev| {
                        form.update(|f| f.role_at_organization = event_target_value(&ev))
                    }
                    disabled=move || submitting.get()
                >
                    <option value="">"Select a role"</option>
                    {SignupRole::ALL
                        .iter()
                        .map(|role| view! {
                            <option value=role.wire_value()>{role.label()}</option>
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>

            <label class="signup-field">
                "Where did you hear about us? (optional)"
                <input
                    type="text"
                    prop:value=move || form.get().referral_source
                    on:input=move |ev| {
                        form.update(|f| f.referral_source = event_target_value(&ev))
                    }
                    disabled=move || submitting.get()
                />
            </label>

            {move || error.get().map(|e| view! {
                <div class="signup-error">{e}</div>
            })}

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || submitting.get()
            >
                {button_label}
            </button>

            <p class="signup-terms">
                {move || if demo() {
                    "By entering the demo environment, you agree to our Terms of Service \
                     and Privacy Policy."
                } else {
                    "By creating an account, you agree to our Terms of Service and \
                     Privacy Policy."
                }}
            </p>

            <style>
                {r#"
                .signup-panel {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    max-width: 24rem;
                }

                .signup-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.25rem;
                    font-size: 0.875rem;
                }

                .signup-field input,
                .signup-field select {
                    padding: 0.375rem 0.5rem;
                    border-radius: 4px;
                    border: 1px solid #374151;
                    background: #111827;
                    color: #e0e0e0;
                }

                .signup-error {
                    color: #ef4444;
                    font-size: 0.875rem;
                }

                .signup-terms {
                    font-size: 0.75rem;
                    color: #9ca3af;
                    text-align: center;
                }
                "#}
            </style>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_exists() {
        let _component = SignupPanel;
    }
}
