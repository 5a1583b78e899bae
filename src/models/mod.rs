//! Data models for the admin dashboard
//!
//! Plain serde types shared between the state layer and the components.

pub mod alert;
pub mod preflight;
pub mod signup;
pub mod team;

pub use alert::{AlertStatus, BillingAlert, BillingStatus};
pub use preflight::PreflightStatus;
pub use signup::{SignupError, SignupForm, SignupRequest, SignupRole, build_signup_request};
pub use team::{TeamConfig, TeamConfigPatch};
