//! Behavioral tests for the signup form mapping

use crate::models::{SignupError, SignupForm, SignupRole, build_signup_request};

fn filled_form() -> SignupForm {
    SignupForm {
        first_name: "Jane Doe".to_string(),
        organization_name: "Hogflix Movies".to_string(),
        role_at_organization: "customer-success".to_string(),
        referral_source: "search engine".to_string(),
    }
}

#[test]
fn given_filled_form_when_built_then_request_carries_all_fields() {
    let request = build_signup_request(&filled_form()).ok();
    assert!(request.is_some());
    if let Some(request) = request {
        assert_eq!(request.first_name, "Jane Doe");
        assert_eq!(request.organization_name, "Hogflix Movies");
        assert_eq!(request.role_at_organization, SignupRole::CustomerSuccess);
        assert_eq!(request.referral_source, Some("search engine".to_string()));
    }
}

#[test]
fn given_untouched_form_when_built_then_first_missing_field_reported() {
    let form = SignupForm::default();
    assert_eq!(
        build_signup_request(&form),
        Err(SignupError::MissingFirstName)
    );
}

#[test]
fn given_whitespace_only_fields_when_built_then_rejected() {
    let mut form = filled_form();
    form.organization_name = "\t \n".to_string();
    assert_eq!(
        build_signup_request(&form),
        Err(SignupError::MissingOrganizationName)
    );
}

#[test]
fn given_tampered_role_value_when_built_then_rejected_with_value() {
    let mut form = filled_form();
    form.role_at_organization = "founder".to_string();
    assert_eq!(
        build_signup_request(&form),
        Err(SignupError::UnknownRole("founder".to_string()))
    );
}

#[test]
fn given_role_options_when_listed_then_match_select_order() {
    let wire_values: Vec<&str> = SignupRole::ALL.iter().map(|r| r.wire_value()).collect();
    assert_eq!(
        wire_values,
        vec![
            "engineering",
            "product",
            "executive",
            "customer-success",
            "sales",
            "other"
        ]
    );
}

#[test]
fn given_request_when_serialized_then_blank_referral_is_omitted() {
    let mut form = filled_form();
    form.referral_source = "   ".to_string();
    let request = build_signup_request(&form).ok();
    let json = request.and_then(|r| serde_json::to_value(&r).ok());
    assert_eq!(
        json,
        Some(serde_json::json!({
            "first_name": "Jane Doe",
            "organization_name": "Hogflix Movies",
            "role_at_organization": "customer-success",
        }))
    );
}
