//! Signup form state and request mapping
//!
//! `SignupForm` holds raw field state as the user types; `build_signup_request`
//! validates it into the `SignupRequest` the backend accepts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role options offered on the signup panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignupRole {
    Engineering,
    Product,
    Executive,
    CustomerSuccess,
    Sales,
    Other,
}

impl SignupRole {
    /// All options, in display order
    pub const ALL: [Self; 6] = [
        Self::Engineering,
        Self::Product,
        Self::Executive,
        Self::CustomerSuccess,
        Self::Sales,
        Self::Other,
    ];

    /// Wire value sent to the backend and used as the option value
    #[must_use]
    pub const fn wire_value(&self) -> &'static str {
        match self {
            Self::Engineering => "engineering",
            Self::Product => "product",
            Self::Executive => "executive",
            Self::CustomerSuccess => "customer-success",
            Self::Sales => "sales",
            Self::Other => "other",
        }
    }

    /// Human-readable label for the select control
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Product => "Product Management",
            Self::Executive => "Executive",
            Self::CustomerSuccess => "Customer Success",
            Self::Sales => "Sales",
            Self::Other => "Other",
        }
    }

    /// Parse a wire value back into a role
    #[must_use]
    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.wire_value() == value)
    }
}

/// Raw form field state, bound to the inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SignupForm {
    pub first_name: String,
    pub organization_name: String,
    /// Wire value of the selected role; empty until the user picks one
    pub role_at_organization: String,
    /// Optional free-text answer to "Where did you hear about us?"
    pub referral_source: String,
}

/// Validated signup payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub organization_name: String,
    pub role_at_organization: SignupRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_source: Option<String>,
}

/// Why a form failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Your name is required")]
    MissingFirstName,
    #[error("Organization name is required")]
    MissingOrganizationName,
    #[error("Please select a role")]
    MissingRole,
    #[error("Unknown role: {0}")]
    UnknownRole(String),
}

/// Validate raw form state into a request the backend accepts.
///
/// Name and organization are required after trimming; the role must be one of
/// the offered options; the referral source is optional and dropped when
/// blank.
pub fn build_signup_request(form: &SignupForm) -> Result<SignupRequest, SignupError> {
    let first_name = form.first_name.trim();
    if first_name.is_empty() {
        return Err(SignupError::MissingFirstName);
    }

    let organization_name = form.organization_name.trim();
    if organization_name.is_empty() {
        return Err(SignupError::MissingOrganizationName);
    }

    let role_value = form.role_at_organization.trim();
    if role_value.is_empty() {
        return Err(SignupError::MissingRole);
    }
    let role = SignupRole::from_wire(role_value)
        .ok_or_else(|| SignupError::UnknownRole(role_value.to_string()))?;

    let referral = form.referral_source.trim();
    Ok(SignupRequest {
        first_name: first_name.to_string(),
        organization_name: organization_name.to_string(),
        role_at_organization: role,
        referral_source: (!referral.is_empty()).then(|| referral.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SignupForm {
        SignupForm {
            first_name: "Jane Doe".to_string(),
            organization_name: "Hogflix Movies".to_string(),
            role_at_organization: "engineering".to_string(),
            referral_source: String::new(),
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let request = build_signup_request(&valid_form());
        assert_eq!(
            request.ok(),
            Some(SignupRequest {
                first_name: "Jane Doe".to_string(),
                organization_name: "Hogflix Movies".to_string(),
                role_at_organization: SignupRole::Engineering,
                referral_source: None,
            })
        );
    }

    #[test]
    fn test_blank_first_name_rejected() {
        let mut form = valid_form();
        form.first_name = "   ".to_string();
        assert_eq!(
            build_signup_request(&form),
            Err(SignupError::MissingFirstName)
        );
    }

    #[test]
    fn test_blank_organization_rejected() {
        let mut form = valid_form();
        form.organization_name = String::new();
        assert_eq!(
            build_signup_request(&form),
            Err(SignupError::MissingOrganizationName)
        );
    }

    #[test]
    fn test_missing_role_rejected() {
        let mut form = valid_form();
        form.role_at_organization = String::new();
        assert_eq!(build_signup_request(&form), Err(SignupError::MissingRole));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let mut form = valid_form();
        form.role_at_organization = "wizard".to_string();
        assert_eq!(
            build_signup_request(&form),
            Err(SignupError::UnknownRole("wizard".to_string()))
        );
    }

    #[test]
    fn test_referral_source_trimmed_and_optional() {
        let mut form = valid_form();
        form.referral_source = "  a friend  ".to_string();
        let request = build_signup_request(&form);
        assert_eq!(
            request.ok().and_then(|r| r.referral_source),
            Some("a friend".to_string())
        );
    }

    #[test]
    fn test_role_wire_values_round_trip() {
        for role in SignupRole::ALL {
            assert_eq!(SignupRole::from_wire(role.wire_value()), Some(role));
        }
        assert_eq!(SignupRole::from_wire("ceo"), None);
    }

    #[test]
    fn test_role_serde_matches_wire_value() {
        for role in SignupRole::ALL {
            let json = serde_json::to_string(&role);
            assert_eq!(json.ok(), Some(format!("\"{}\"", role.wire_value())));
        }
    }
}
