//! Leptos 0.7 CSR admin dashboard for the Lensight web analytics platform
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown)
//! - Type-safe routing with leptos_router
//! - REST communication with the backend via gloo-net
//!
//! ## Module Structure
//! - `app`: Main application component
//! - `router`: Route definitions and navigation
//! - `pages`: Top-level page components
//! - `models`: Alert, team, signup, and preflight data types
//! - `components`: Billing banner, settings panels, signup form
//! - `state`: Per-concern state handles and the REST client

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod models;
pub mod pages;
pub mod router;
pub mod state;

// Re-export main App component for convenience - Trunk will auto-mount it
pub use app::App;

#[cfg(test)]
mod tests;
