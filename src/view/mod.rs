//! View abstraction for the activity board
//!
//! The controller never talks to a concrete output surface directly; it
//! renders through the [`BoardView`] trait so the whole board can be driven
//! against a recording double in tests. [`ConsoleView`] is the terminal
//! implementation used by the binary.

pub mod console;

pub use console::ConsoleView;

/// Placeholder entry that is always first in the activity selector
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Severity of a transient status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// Styling class name for this severity
    pub fn as_class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// Handle carried by each participant row's removal control.
///
/// The activity name is stored URL-encoded while the email is stored raw;
/// the removal path decodes the activity before use. The asymmetry is part
/// of the observed contract and is preserved deliberately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalHandle {
    pub activity: String,
    pub email: String,
}

impl RemovalHandle {
    pub fn new(activity_name: &str, email: &str) -> Self {
        Self {
            activity: urlencoding::encode(activity_name).into_owned(),
            email: email.to_string(),
        }
    }

    /// The URL-decoded activity name; empty when the handle is malformed
    pub fn activity_name(&self) -> String {
        urlencoding::decode(&self.activity)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_default()
    }
}

/// One participant row: initials badge, full email, removal control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub badge: String,
    pub email: String,
    pub remove: RemovalHandle,
}

/// One rendered activity card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

/// Everything a render pass shows: the cards plus the selector options,
/// placeholder first. Rebuilt wholesale on every load; never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub cards: Vec<ActivityCard>,
    pub selector: Vec<String>,
}

/// Output surface of the board controller
pub trait BoardView {
    /// Replace the activity list and selector with a fresh snapshot
    fn render_board(&mut self, snapshot: &BoardSnapshot);

    /// Replace the activity list with a static load-failure notice
    fn render_load_failure(&mut self, notice: &str);

    /// Show the transient status line, unhiding it if hidden
    fn show_message(&mut self, text: &str, severity: Severity);

    /// Hide the transient status line
    fn hide_message(&mut self);

    /// Clear the sign-up form fields
    fn reset_signup_form(&mut self);

    /// Ask the user to confirm unregistering `email` from `activity`
    fn confirm_removal(&mut self, email: &str, activity: &str) -> bool;
}
