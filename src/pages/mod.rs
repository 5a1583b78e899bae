//! Top-level page components

pub mod billing;
pub mod home;
pub mod not_found;
pub mod settings;
pub mod signup;

pub use billing::OrganizationBilling;
pub use home::Home;
pub use not_found::NotFound;
pub use settings::ProjectSettings;
pub use signup::Signup;
