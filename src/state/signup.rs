//! Signup submission handle
//!
//! Tracks whether a signup request is in flight so the form can disable its
//! controls, and owns the submit action.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::models::SignupRequest;
use crate::state::api;

/// Submission state plus the submit action
#[derive(Clone, Copy)]
pub struct SignupHandle {
    /// True while a request is in flight
    pub submitting: ReadSignal<bool>,
    set_submitting: WriteSignal<bool>,
}

/// Create the signup handle
pub fn init_signup() -> SignupHandle {
    let (submitting, set_submitting) = signal(false);
    SignupHandle {
        submitting,
        set_submitting,
    }
}

impl SignupHandle {
    /// Submit a validated request. Re-entrant calls while one is in flight
    /// are dropped; the flag clears on completion either way.
    pub fn submit(&self, request: SignupRequest) {
        if self.submitting.get_untracked() {
            return;
        }
        let set_submitting = self.set_submitting;
        set_submitting.set(true);

        spawn_local(async move {
            match api::post_signup(&request).await {
                Ok(()) => {
                    web_sys::console::log_1(&"signup submitted".into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("signup failed: {}", e).into());
                }
            }
            set_submitting.set(false);
        });
    }
}
