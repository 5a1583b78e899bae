//! Application state management
//!
//! One handle struct per backend concern, mirroring the product's
//! logic-per-store layout: billing, team configuration, signup, preflight.
//! Handles are plain `Copy` structs of signals created once in `App` and
//! passed down as props; actions dispatch through the REST client in `api`.

pub mod api;
pub mod billing;
pub mod preflight;
pub mod signup;
pub mod team;

pub use api::ApiError;
pub use billing::{BILLING_VERSION, BillingHandle, init_billing};
pub use preflight::{PreflightHandle, init_preflight};
pub use signup::{SignupHandle, init_signup};
pub use team::{TeamHandle, init_team};
