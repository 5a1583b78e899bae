//! Visibility and reporting rules for the billing alert banner
//!
//! Pure decision logic with no framework types: given the current alert, the
//! active billing generation, the local dismissal flag, and the navigation
//! path, these functions decide whether the banner renders, whether it may be
//! dismissed, whether the action button is redundant, and when the one-shot
//! "alert shown" report fires. The `BillingAlerts` component in the parent
//! module is the imperative shell feeding reactive inputs through here.
//!
//! Two distinct predicates matter and they are not the same:
//! - **show-condition**: alert present AND generation matches. Gates the
//!   report.
//! - **visibility**: show-condition AND not locally dismissed. Gates the
//!   render.

use std::sync::Arc;

use crate::models::{AlertStatus, BillingAlert};

/// Render decision for the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    NotVisible,
}

/// Banner state for the current input snapshot
///
/// `VisiblePermanent` alerts expose no dismissal control at all; they stay up
/// until the alert itself is cleared upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerState {
    /// Nothing renders: alert absent, generation mismatch, or dismissed
    Suppressed,
    /// Renders with a close control
    VisibleDismissible,
    /// Renders without a close control (error status)
    VisiblePermanent,
}

/// Whether the banner renders its "Manage billing" button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAffordance {
    Show,
    Suppress,
}

/// True when an alert is present and the billing generation matches.
///
/// This is the reporting gate. It deliberately ignores the local dismissal
/// flag: a dismissed banner whose alert reference is unchanged does not
/// re-report.
#[must_use]
pub fn show_condition(alert: Option<&Arc<BillingAlert>>, version: &str, expected: &str) -> bool {
    alert.is_some() && version == expected
}

/// Render decision: show-condition AND not locally dismissed.
///
/// Pure; must be re-evaluated on every input change.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lensight_ui::components::billing::visibility::{Visibility, compute_visibility};
/// use lensight_ui::models::{AlertStatus, BillingAlert};
///
/// let alert = Arc::new(BillingAlert::new(AlertStatus::Warning, "t", "m"));
///
/// assert_eq!(
///     compute_visibility(Some(&alert), "v2", "v2", false),
///     Visibility::Visible
/// );
/// assert_eq!(
///     compute_visibility(Some(&alert), "v1", "v2", false),
///     Visibility::NotVisible
/// );
/// assert_eq!(
///     compute_visibility(None, "v2", "v2", false),
///     Visibility::NotVisible
/// );
/// assert_eq!(
///     compute_visibility(Some(&alert), "v2", "v2", true),
///     Visibility::NotVisible
/// );
/// ```
#[must_use]
pub fn compute_visibility(
    alert: Option<&Arc<BillingAlert>>,
    version: &str,
    expected: &str,
    hidden: bool,
) -> Visibility {
    if show_condition(alert, version, expected) && !hidden {
        Visibility::Visible
    } else {
        Visibility::NotVisible
    }
}

/// Full banner state, folding visibility and the dismissal affordance.
#[must_use]
pub fn banner_state(
    alert: Option<&Arc<BillingAlert>>,
    version: &str,
    expected: &str,
    hidden: bool,
) -> BannerState {
    match compute_visibility(alert, version, expected, hidden) {
        Visibility::NotVisible => BannerState::Suppressed,
        Visibility::Visible => match alert.map(|a| a.status) {
            Some(AlertStatus::Error) => BannerState::VisiblePermanent,
            _ => BannerState::VisibleDismissible,
        },
    }
}

/// Local dismissal flag, owned by exactly one banner instance
///
/// Initialized to not-hidden; reset only by component re-creation. There is
/// no persistence across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DismissState {
    hidden: bool,
}

impl DismissState {
    /// A fresh, not-hidden state
    #[must_use]
    pub const fn new() -> Self {
        Self { hidden: false }
    }

    /// Whether the user has dismissed the banner
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Explicit user dismissal. Refused for error alerts; idempotent once
    /// hidden.
    pub fn dismiss(&mut self, status: AlertStatus) {
        if status.is_dismissible() {
            self.hidden = true;
        }
    }
}

/// One-shot transition detector for the "alert shown" report
///
/// Works by explicit previous-snapshot comparison: the tracker remembers
/// which alert reference it reported during the current show-condition
/// interval and forgets it when the condition drops. Identity is the `Arc`
/// pointer, so a fresh allocation with identical content counts as a new
/// alert.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use lensight_ui::components::billing::visibility::ShownReportTracker;
/// use lensight_ui::models::{AlertStatus, BillingAlert};
///
/// let alert = Arc::new(BillingAlert::new(AlertStatus::Info, "t", "m"));
/// let mut tracker = ShownReportTracker::new();
///
/// // First observation under a matching generation reports once.
/// assert!(tracker.observe(Some(&alert), "v2", "v2").is_some());
/// // Identical re-observation does not.
/// assert!(tracker.observe(Some(&alert), "v2", "v2").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShownReportTracker {
    reported: Option<Arc<BillingAlert>>,
}

impl ShownReportTracker {
    /// A tracker that has reported nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one input snapshot; returns the alert to report, if any.
    ///
    /// Returns `Some` when the show-condition transitions false to true, or
    /// when the alert reference changes while it stays true. Never returns
    /// `Some` while the show-condition is false, and never twice for the same
    /// (reference, show-condition-true interval) pair.
    pub fn observe(
        &mut self,
        alert: Option<&Arc<BillingAlert>>,
        version: &str,
        expected: &str,
    ) -> Option<Arc<BillingAlert>> {
        if !show_condition(alert, version, expected) {
            // Interval over; the same reference reports again on re-entry.
            self.reported = None;
            return None;
        }
        let alert = alert?;

        let already_reported = self
            .reported
            .as_ref()
            .is_some_and(|reported| Arc::ptr_eq(reported, alert));
        if already_reported {
            return None;
        }

        self.reported = Some(Arc::clone(alert));
        Some(Arc::clone(alert))
    }
}

/// Whether to render the action button: suppressed when the user is already
/// on the page the button would navigate to.
#[must_use]
pub fn button_affordance(current_path: &str, target_path: &str) -> ButtonAffordance {
    if current_path == target_path {
        ButtonAffordance::Suppress
    } else {
        ButtonAffordance::Show
    }
}
