//! Status banner component
//!
//! Presentational only: severity styling, an optional action link, and an
//! optional close control. Whether either affordance appears is decided by
//! the caller.

use leptos::prelude::*;

use crate::models::AlertStatus;

/// Action link rendered on the trailing edge of the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertAction {
    /// Navigation target
    pub to: &'static str,
    /// Link text
    pub label: &'static str,
}

/// Severity-styled message banner
#[component]
pub fn AlertMessage(
    status: AlertStatus,
    title: String,
    message: String,
    action: Option<AlertAction>,
    on_close: Option<Callback<()>>,
) -> impl IntoView {
    let handle_close = move |_| {
        if let Some(callback) = on_close {
            callback.run(());
        }
    };

    view! {
        <div
            class=format!("alert-message {}", status.css_class())
            style=format!("border-color: {};", status.color())
        >
            <span class="alert-icon" style=format!("color: {};", status.color())>
                {status.icon()}
            </span>
            <div class="alert-body">
                <b class="alert-title">{title}</b>
                <br />
                <span class="alert-text">{message}</span>
            </div>
            {action.map(|a| view! {
                <a class="alert-action" href=a.to>{a.label}</a>
            })}
            {on_close.is_some().then(|| view! {
                <button class="alert-close" on:click=handle_close>"✕"</button>
            })}

            <style>
                {r#"
                .alert-message {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.75rem 1rem;
                    border: 1px solid;
                    border-radius: 6px;
                    background: #1a1a2e;
                    color: #e0e0e0;
                }

                .alert-icon {
                    font-size: 1.25rem;
                }

                .alert-body {
                    flex: 1;
                }

                .alert-title {
                    font-weight: 600;
                }

                .alert-text {
                    font-size: 0.875rem;
                }

                .alert-action {
                    padding: 0.375rem 0.75rem;
                    border-radius: 4px;
                    background: #3b82f6;
                    color: white;
                    text-decoration: none;
                    font-size: 0.875rem;
                    white-space: nowrap;
                }

                .alert-close {
                    background: none;
                    border: none;
                    color: #9ca3af;
                    cursor: pointer;
                    font-size: 1rem;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_exists() {
        let _component = AlertMessage;
    }

    #[test]
    fn test_action_is_copyable() {
        let action = AlertAction {
            to: "/organization/billing",
            label: "Manage billing",
        };
        let copied = action;
        assert_eq!(action, copied);
    }
}
