//! Activity board controller
//!
//! Page-level controller over the activities API: loads and renders the
//! activity list, submits sign-ups, and unregisters participants. The list
//! is never patched in place; every successful mutation triggers a full
//! re-fetch, which is the only consistency mechanism.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::api::{ActivitiesClient, ApiOutcome};
use crate::config::UiConfig;
use crate::models::{initials_badge, ActivityMap};
use crate::view::{
    ActivityCard, BoardSnapshot, BoardView, ParticipantRow, RemovalHandle, Severity,
    SELECT_PLACEHOLDER,
};

use super::status::StatusLine;

/// Static notice shown in place of the list when loading fails
pub const LOAD_FAILURE_NOTICE: &str = "Failed to load activities. Please try again later.";

/// Generic sign-up message when the server supplies none
pub const SIGNUP_SUCCESS_FALLBACK: &str = "Signed up successfully";

/// Generic sign-up rejection text when the server supplies no detail
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";

/// Shown when the sign-up request itself fails
pub const SIGNUP_FAILURE_MESSAGE: &str = "Failed to sign up. Please try again.";

/// Generic removal rejection text when the server supplies no detail
pub const REMOVAL_REJECTED_FALLBACK: &str = "Failed to remove participant";

/// Shown when the removal request itself fails
pub const REMOVAL_FAILURE_MESSAGE: &str = "Failed to remove participant. Try again.";

/// Lifecycle of the activity list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    LoadFailed,
}

/// Controller for the activity sign-up board
///
/// Operations take `&mut self`, so a second request can never start while
/// one is outstanding; the controller always returns to an interactive
/// state regardless of outcome.
pub struct ActivityBoard<V> {
    api: ActivitiesClient,
    view: Arc<Mutex<V>>,
    ui: UiConfig,
    load_state: LoadState,
    status: StatusLine,
}

impl<V> ActivityBoard<V>
where
    V: BoardView + Send + 'static,
{
    pub fn new(api: ActivitiesClient, view: V, ui: UiConfig) -> Self {
        Self {
            api,
            view: Arc::new(Mutex::new(view)),
            ui,
            load_state: LoadState::Idle,
            status: StatusLine::new(),
        }
    }

    /// Shared handle to the view, mainly for inspection in tests
    pub fn view(&self) -> Arc<Mutex<V>> {
        Arc::clone(&self.view)
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Fetch the activity collection and rebuild the whole display.
    ///
    /// Failures are terminal for the render only: the list is replaced by a
    /// static notice, the error is logged, and nothing propagates further.
    pub async fn load_activities(&mut self) {
        self.load_state = LoadState::Loading;

        match self.api.list().await {
            Ok(activities) => {
                let snapshot = build_snapshot(&activities);
                info!(count = snapshot.cards.len(), "Activity list loaded");
                self.view.lock().await.render_board(&snapshot);
                self.load_state = LoadState::Loaded;
            }
            Err(e) => {
                error!(error = %e, "Failed to fetch activities");
                self.view.lock().await.render_load_failure(LOAD_FAILURE_NOTICE);
                self.load_state = LoadState::LoadFailed;
            }
        }
    }

    /// Submit a sign-up for `activity` on behalf of `email`.
    ///
    /// No client-side format validation; the server is the authority. On
    /// acceptance the form is reset and the list reloaded so the new
    /// participant appears.
    pub async fn submit_signup(&mut self, email: &str, activity: &str) {
        match self.api.signup(activity, email).await {
            Ok(ApiOutcome::Accepted { message }) => {
                info!(activity = activity, email = email, "Signup accepted");
                let text = message.unwrap_or_else(|| SIGNUP_SUCCESS_FALLBACK.to_string());
                self.show_status(&text, Severity::Success, Some(self.signup_hide_delay()))
                    .await;
                self.view.lock().await.reset_signup_form();
                self.load_activities().await;
            }
            Ok(ApiOutcome::Rejected { detail }) => {
                let text = detail.unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_string());
                warn!(activity = activity, email = email, detail = %text, "Signup rejected");
                self.show_status(&text, Severity::Error, Some(self.signup_hide_delay()))
                    .await;
            }
            Err(e) => {
                error!(activity = activity, email = email, error = %e, "Signup request failed");
                self.show_status(SIGNUP_FAILURE_MESSAGE, Severity::Error, None)
                    .await;
            }
        }
    }

    /// Unregister the participant identified by a removal handle.
    ///
    /// Aborts silently when the handle is missing either value or when the
    /// user declines the confirmation; in both cases no request is sent and
    /// no state changes.
    pub async fn remove_participant(&mut self, handle: &RemovalHandle) {
        let email = handle.email.clone();
        let activity = handle.activity_name();

        if email.is_empty() || activity.is_empty() {
            return;
        }

        if !self.view.lock().await.confirm_removal(&email, &activity) {
            info!(activity = %activity, email = %email, "Removal not confirmed");
            return;
        }

        match self.api.unregister(&activity, &email).await {
            Ok(ApiOutcome::Accepted { message }) => {
                info!(activity = %activity, email = %email, "Participant removed");
                self.load_activities().await;
                let text = message.unwrap_or_else(|| format!("{} removed", email));
                self.show_status(&text, Severity::Info, Some(self.removal_hide_delay()))
                    .await;
            }
            Ok(ApiOutcome::Rejected { detail }) => {
                let text = detail.unwrap_or_else(|| REMOVAL_REJECTED_FALLBACK.to_string());
                warn!(activity = %activity, email = %email, detail = %text, "Removal rejected");
                self.show_status(&text, Severity::Error, None).await;
            }
            Err(e) => {
                error!(activity = %activity, email = %email, error = %e, "Removal request failed");
                self.show_status(REMOVAL_FAILURE_MESSAGE, Severity::Error, None)
                    .await;
            }
        }
    }

    /// Show the status line, cancelling any pending hide from an earlier
    /// message, and schedule a new hide when `hide_after` is set
    async fn show_status(&mut self, text: &str, severity: Severity, hide_after: Option<Duration>) {
        self.status.cancel_pending_hide();
        self.view.lock().await.show_message(text, severity);
        if let Some(delay) = hide_after {
            self.status.schedule_hide(Arc::clone(&self.view), delay);
        }
    }

    fn signup_hide_delay(&self) -> Duration {
        Duration::from_millis(self.ui.signup_message_hide_ms)
    }

    fn removal_hide_delay(&self) -> Duration {
        Duration::from_millis(self.ui.removal_message_hide_ms)
    }
}

/// Build the display rows for a fresh render: one card per activity with
/// derived spots-left and participant rows, and the selector options with
/// the placeholder first
fn build_snapshot(activities: &ActivityMap) -> BoardSnapshot {
    let mut snapshot = BoardSnapshot {
        cards: Vec::with_capacity(activities.len()),
        selector: vec![SELECT_PLACEHOLDER.to_string()],
    };

    for (name, activity) in activities {
        let participants = activity
            .participants
            .iter()
            .map(|email| ParticipantRow {
                badge: initials_badge(email),
                email: email.clone(),
                remove: RemovalHandle::new(name, email),
            })
            .collect();

        snapshot.cards.push(ActivityCard {
            name: name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        });
        snapshot.selector.push(name.clone());
    }

    snapshot
}
