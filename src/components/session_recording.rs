//! Session recording settings panel
//!
//! Two opt-in switches plus the authorized-domain list. Every control maps
//! one change onto a sparse team patch dispatched through the team handle.
//! The console-log switch is gated on the recording opt-in because console
//! capture is meaningless without recordings.

use leptos::prelude::*;

use crate::components::authorized_urls::AuthorizedUrlList;
use crate::models::TeamConfigPatch;
use crate::state::team::TeamHandle;

/// Session recording settings, optionally rendered inside a modal
#[component]
pub fn SessionRecordingSettings(
    team: TeamHandle,
    #[prop(default = false)] in_modal: bool,
) -> impl IntoView {
    let recording_enabled = move || {
        team.current_team
            .get()
            .is_some_and(|t| t.session_recording_opt_in)
    };
    let console_log_enabled = move || {
        team.current_team
            .get()
            .is_some_and(|t| t.capture_console_log_opt_in)
    };

    let toggle_recording = move |ev| {
        team.update_current_team(TeamConfigPatch {
            session_recording_opt_in: Some(event_target_checked(&ev)),
            ..Default::default()
        });
    };
    let toggle_console_log = move |ev| {
        team.update_current_team(TeamConfigPatch {
            capture_console_log_opt_in: Some(event_target_checked(&ev)),
            ..Default::default()
        });
    };

    let label_class = if in_modal {
        "setting-label setting-label-wide"
    } else {
        "setting-label"
    };

    view! {
        <div class="session-recording-settings">
            <div class="setting-group">
                <label class=label_class>
                    <input
                        type="checkbox"
                        prop:checked=recording_enabled
                        on:change=toggle_recording
                    />
                    "Record user sessions"
                </label>
                <p>
                    "Your site needs the Lensight snippet or the latest version of the "
                    "browser SDK installed for recordings to be captured."
                </p>
            </div>

            <div class="setting-group">
                <label class=label_class>
                    <input
                        type="checkbox"
                        prop:checked=console_log_enabled
                        on:change=toggle_console_log
                        disabled=move || !recording_enabled()
                    />
                    "Capture console logs within recordings"
                </label>
                <p>
                    "Browser console logs are captured as part of recordings and shown "
                    "in the recording player to help you debug issues."
                </p>
            </div>

            <div class="setting-group">
                <h3>"Authorized domains for recordings"</h3>
                <p>
                    "Restrict the domains where recordings are captured. An empty list "
                    "means no restriction. Wildcard subdomains are allowed "
                    "(e.g. https://*.example.com); wildcarded top-level domains are not."
                </p>
                <AuthorizedUrlList team=team />
            </div>

            <style>
                {r#"
                .session-recording-settings {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .setting-group p {
                    font-size: 0.875rem;
                    color: #9ca3af;
                }

                .setting-label {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    cursor: pointer;
                }

                .setting-label-wide {
                    font-size: 1rem;
                    font-weight: 600;
                    width: 100%;
                }
                "#}
            </style>
        </div>
    }
}
