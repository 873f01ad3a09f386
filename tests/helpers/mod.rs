//! Test helpers module
//!
//! Provides a recording view double and board construction utilities for
//! driving the controller against a wiremock server.

use serde_json::json;

use activity_board::api::ActivitiesClient;
use activity_board::board::ActivityBoard;
use activity_board::config::{ServerConfig, UiConfig};
use activity_board::view::{BoardSnapshot, BoardView, Severity};

/// View double that records every call the controller makes
#[derive(Debug, Default)]
pub struct RecordingView {
    pub snapshots: Vec<BoardSnapshot>,
    pub load_failures: Vec<String>,
    pub messages: Vec<(String, Severity)>,
    pub message_visible: bool,
    pub form_resets: usize,
    pub confirmations: Vec<(String, String)>,
    pub confirm_response: bool,
}

impl RecordingView {
    /// A view whose user answers "yes" to every confirmation prompt
    pub fn confirming() -> Self {
        Self {
            confirm_response: true,
            ..Default::default()
        }
    }
}

impl BoardView for RecordingView {
    fn render_board(&mut self, snapshot: &BoardSnapshot) {
        self.snapshots.push(snapshot.clone());
    }

    fn render_load_failure(&mut self, notice: &str) {
        self.load_failures.push(notice.to_string());
    }

    fn show_message(&mut self, text: &str, severity: Severity) {
        self.messages.push((text.to_string(), severity));
        self.message_visible = true;
    }

    fn hide_message(&mut self) {
        self.message_visible = false;
    }

    fn reset_signup_form(&mut self) {
        self.form_resets += 1;
    }

    fn confirm_removal(&mut self, email: &str, activity: &str) -> bool {
        self.confirmations
            .push((email.to_string(), activity.to_string()));
        self.confirm_response
    }
}

/// UI settings matching the production hide delays
pub fn test_ui_config() -> UiConfig {
    UiConfig {
        signup_message_hide_ms: 5000,
        removal_message_hide_ms: 4000,
    }
}

/// Build a board whose API client points at `server_uri`
pub fn board_against(server_uri: &str, view: RecordingView) -> ActivityBoard<RecordingView> {
    let api = ActivitiesClient::new(&ServerConfig {
        base_url: server_uri.to_string(),
        timeout_seconds: 5,
    })
    .expect("failed to build API client");

    ActivityBoard::new(api, view, test_ui_config())
}

/// The canonical two-activity collection used across tests
pub fn sample_activities_json() -> serde_json::Value {
    json!({
        "Chess Club": {
            "description": "Learn strategies and compete in tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel.r@mergington.edu"]
        },
        "Programming Class": {
            "description": "Learn programming fundamentals",
            "schedule": "Tuesdays, 3:30 PM - 4:30 PM",
            "max_participants": 20,
            "participants": []
        }
    })
}
