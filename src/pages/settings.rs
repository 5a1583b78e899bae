//! Project settings page

use leptos::prelude::*;

use crate::components::session_recording::SessionRecordingSettings;
use crate::state::team::TeamHandle;

/// Project settings page hosting the session recording panel
#[component]
pub fn ProjectSettings(team: TeamHandle) -> impl IntoView {
    view! {
        <div class="settings-page">
            <h1>"Project settings"</h1>
            <h2>"Session recording"</h2>
            <SessionRecordingSettings team=team />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_page_exists() {
        let _component = ProjectSettings;
    }
}
