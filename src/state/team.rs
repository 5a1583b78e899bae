//! Team state handle
//!
//! Holds the current team configuration and the update action the settings
//! panels dispatch. Updates are applied optimistically; the server response
//! is authoritative and replaces local state when it arrives.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::models::{TeamConfig, TeamConfigPatch};
use crate::state::api;

/// Read access to the current team plus the update action
#[derive(Clone, Copy)]
pub struct TeamHandle {
    /// Current team configuration; `None` until the first fetch lands
    pub current_team: ReadSignal<Option<TeamConfig>>,
    set_team: WriteSignal<Option<TeamConfig>>,
}

/// Create the team handle and kick off the initial fetch
pub fn init_team() -> TeamHandle {
    let (current_team, set_team) = signal(None);

    spawn_local(async move {
        match api::fetch_current_team().await {
            Ok(team) => set_team.set(Some(team)),
            Err(e) => {
                web_sys::console::error_1(&format!("team fetch failed: {}", e).into());
            }
        }
    });

    TeamHandle {
        current_team,
        set_team,
    }
}

impl TeamHandle {
    /// Dispatch a sparse team update.
    ///
    /// The patch is merged into local state immediately so controls feel
    /// responsive; on success the server's record replaces it, on failure the
    /// optimistic state stays and the error is logged.
    pub fn update_current_team(&self, patch: TeamConfigPatch) {
        if patch.is_empty() {
            return;
        }

        let set_team = self.set_team;
        if let Some(team) = self.current_team.get_untracked() {
            set_team.set(Some(team.apply(&patch)));
        }

        spawn_local(async move {
            match api::patch_current_team(&patch).await {
                Ok(team) => set_team.set(Some(team)),
                Err(e) => {
                    web_sys::console::error_1(&format!("team update failed: {}", e).into());
                }
            }
        });
    }
}
