//! Preflight state handle

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::models::PreflightStatus;
use crate::state::api;

/// Read access to deployment preflight flags
#[derive(Clone, Copy)]
pub struct PreflightHandle {
    /// Preflight flags; `None` until the fetch lands
    pub preflight: ReadSignal<Option<PreflightStatus>>,
}

/// Create the preflight handle and kick off the fetch
pub fn init_preflight() -> PreflightHandle {
    let (preflight, set_preflight) = signal(None);

    spawn_local(async move {
        match api::fetch_preflight().await {
            Ok(status) => set_preflight.set(Some(status)),
            Err(e) => {
                web_sys::console::error_1(&format!("preflight fetch failed: {}", e).into());
            }
        }
    });

    PreflightHandle { preflight }
}
