//! Behavioral tests for session recording settings

use crate::components::authorized_urls::{DomainError, validate_authorized_domain};
use crate::models::{TeamConfig, TeamConfigPatch};

#[test]
fn given_recording_toggle_when_patched_then_other_settings_untouched() {
    let team = TeamConfig {
        session_recording_opt_in: false,
        capture_console_log_opt_in: true,
        recording_domains: vec!["https://app.example.com".to_string()],
    };
    let patch = TeamConfigPatch {
        session_recording_opt_in: Some(true),
        ..Default::default()
    };

    let updated = team.apply(&patch);
    assert!(updated.session_recording_opt_in);
    assert!(updated.capture_console_log_opt_in);
    assert_eq!(updated.recording_domains, team.recording_domains);
}

#[test]
fn given_domain_list_edit_when_patched_then_list_replaced_wholesale() {
    let team = TeamConfig {
        recording_domains: vec!["https://a.example.com".to_string()],
        ..Default::default()
    };
    let patch = TeamConfigPatch {
        recording_domains: Some(vec![
            "https://a.example.com".to_string(),
            "https://b.example.com".to_string(),
        ]),
        ..Default::default()
    };

    let updated = team.apply(&patch);
    assert_eq!(updated.recording_domains.len(), 2);
}

#[test]
fn given_wildcard_subdomain_when_validated_then_accepted() {
    let existing = vec!["https://app.example.com".to_string()];
    let result = validate_authorized_domain("https://*.example.com", &existing);
    assert_eq!(result.ok(), Some("https://*.example.com".to_string()));
}

#[test]
fn given_wildcard_tld_when_validated_then_rejected() {
    let result = validate_authorized_domain("https://example.*", &[]);
    assert_eq!(result, Err(DomainError::WildcardTld));
}

#[test]
fn given_existing_domain_when_validated_then_duplicate_rejected() {
    let existing = vec!["https://app.example.com".to_string()];
    let result = validate_authorized_domain("https://app.example.com", &existing);
    assert_eq!(result, Err(DomainError::Duplicate));
}

#[test]
fn given_empty_patch_when_checked_then_reports_empty() {
    assert!(TeamConfigPatch::default().is_empty());
    assert!(
        !TeamConfigPatch {
            capture_console_log_opt_in: Some(false),
            ..Default::default()
        }
        .is_empty()
    );
}
