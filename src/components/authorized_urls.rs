//! Authorized domains for session recording
//!
//! Recordings only run on domains the team has explicitly allowed. Wildcard
//! subdomains are accepted (`https://*.example.com`); wildcarded top-level
//! domains are rejected for security reasons.

use leptos::prelude::*;
use thiserror::Error;

use crate::models::TeamConfigPatch;
use crate::state::team::TeamHandle;

/// Why a candidate domain was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Domain cannot be empty")]
    Empty,
    #[error("Domain must start with http:// or https://")]
    MissingScheme,
    #[error("Domain cannot contain a path")]
    HasPath,
    #[error("Wildcarded top-level domains are not allowed")]
    WildcardTld,
    #[error("Wildcards are only allowed as a full leading subdomain")]
    MisplacedWildcard,
    #[error("Domain is already authorized")]
    Duplicate,
}

/// Validate a candidate recording domain against the current list.
///
/// Returns the trimmed domain ready for insertion. Accepts an optional port;
/// rejects paths, duplicates, and any wildcard that is not a whole leading
/// subdomain label.
pub fn validate_authorized_domain(
    input: &str,
    existing: &[String],
) -> Result<String, DomainError> {
    let domain = input.trim();
    if domain.is_empty() {
        return Err(DomainError::Empty);
    }

    let rest = domain
        .strip_prefix("https://")
        .or_else(|| domain.strip_prefix("http://"))
        .ok_or(DomainError::MissingScheme)?;
    if rest.is_empty() {
        return Err(DomainError::Empty);
    }
    if rest.contains('/') {
        return Err(DomainError::HasPath);
    }

    let host = rest.split(':').next().unwrap_or(rest);
    let labels: Vec<&str> = host.split('.').collect();
    if let Some((tld, subdomains)) = labels.split_last() {
        if tld.contains('*') {
            return Err(DomainError::WildcardTld);
        }
        for (index, label) in subdomains.iter().enumerate() {
            if label.contains('*') && !(index == 0 && *label == "*") {
                return Err(DomainError::MisplacedWildcard);
            }
        }
    }

    if existing.iter().any(|e| e == domain) {
        return Err(DomainError::Duplicate);
    }

    Ok(domain.to_string())
}

/// Editable list of authorized recording domains
#[component]
pub fn AuthorizedUrlList(team: TeamHandle) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let domains = move || {
        team.current_team
            .get()
            .map(|t| t.recording_domains)
            .unwrap_or_default()
    };

    let add_domain = move |_| {
        let existing = domains();
        match validate_authorized_domain(&draft.get_untracked(), &existing) {
            Ok(domain) => {
                let mut updated = existing;
                updated.push(domain);
                team.update_current_team(TeamConfigPatch {
                    recording_domains: Some(updated),
                    ..Default::default()
                });
                draft.set(String::new());
                error.set(None);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let remove_domain = Callback::new(move |domain: String| {
        let updated: Vec<String> = domains().into_iter().filter(|d| *d != domain).collect();
        team.update_current_team(TeamConfigPatch {
            recording_domains: Some(updated),
            ..Default::default()
        });
    });

    view! {
        <div class="authorized-url-list">
            <div class="authorized-url-add">
                <input
                    type="text"
                    placeholder="https://*.example.com"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" on:click=add_domain>"Add domain"</button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="authorized-url-error">{e}</div>
            })}

            <ul>
                {move || {
                    domains()
                        .into_iter()
                        .map(|domain| {
                            let removal_target = domain.clone();
                            view! {
                                <li>
                                    <code>{domain}</code>
                                    <button
                                        class="btn btn-secondary"
                                        on:click=move |_| remove_domain.run(removal_target.clone())
                                    >
                                        "Remove"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>

            <style>
                {r#"
                .authorized-url-add {
                    display: flex;
                    gap: 0.5rem;
                }

                .authorized-url-add input {
                    flex: 1;
                    padding: 0.375rem 0.5rem;
                    border-radius: 4px;
                    border: 1px solid #374151;
                    background: #111827;
                    color: #e0e0e0;
                }

                .authorized-url-error {
                    color: #ef4444;
                    font-size: 0.875rem;
                    margin-top: 0.25rem;
                }

                .authorized-url-list ul {
                    list-style: none;
                    padding: 0;
                }

                .authorized-url-list li {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 0.25rem 0;
                }
                "#}
            </style>
        </div>
    }
}
