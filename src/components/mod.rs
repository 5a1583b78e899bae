//! Reusable UI components
//!
//! - `alert_message`: severity-styled banner shell
//! - `billing`: billing alert banner plus its visibility core
//! - `authorized_urls`: recording-domain validation and list
//! - `session_recording`: recording settings panel
//! - `signup_panel`: signup form

pub mod alert_message;
pub mod authorized_urls;
pub mod billing;
pub mod session_recording;
pub mod signup_panel;

pub use alert_message::{AlertAction, AlertMessage};
pub use authorized_urls::AuthorizedUrlList;
pub use billing::BillingAlerts;
pub use session_recording::SessionRecordingSettings;
pub use signup_panel::SignupPanel;
