//! Behavioral tests for navigation and routing

use crate::router::routes;

#[test]
fn given_route_constants_when_checking_home_then_is_root() {
    assert_eq!(routes::HOME, "/");
}

#[test]
fn given_route_constants_when_checked_then_all_start_with_slash() {
    for route in [
        routes::ORGANIZATION_BILLING,
        routes::PROJECT_SETTINGS,
        routes::SIGNUP,
    ] {
        assert!(route.starts_with('/'), "{} should start with /", route);
    }
}

#[test]
fn given_route_constants_when_checked_then_all_unique() {
    let all = [
        routes::HOME,
        routes::ORGANIZATION_BILLING,
        routes::PROJECT_SETTINGS,
        routes::SIGNUP,
    ];
    let unique: std::collections::HashSet<_> = all.iter().collect();
    assert_eq!(unique.len(), all.len(), "All routes should be unique");
}

#[test]
fn given_billing_route_when_checked_then_matches_banner_target() {
    // The banner's "Manage billing" button and the route table must agree,
    // or the button-affordance suppression never triggers.
    assert_eq!(routes::ORGANIZATION_BILLING, "/organization/billing");
}

#[test]
fn given_route_constants_when_checked_then_lowercase_without_trailing_slash() {
    for route in [
        routes::ORGANIZATION_BILLING,
        routes::PROJECT_SETTINGS,
        routes::SIGNUP,
    ] {
        assert_eq!(route.to_lowercase(), route);
        assert!(!route.ends_with('/'));
    }
}
