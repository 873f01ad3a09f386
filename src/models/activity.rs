//! Activity model
//!
//! Activities are owned by the server; this layer only deserializes them
//! and derives display values. Nothing here is mutated in place -- every
//! successful mutation is followed by a full re-fetch of the collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The activity collection as served by `GET /activities`: a JSON object
/// keyed by activity name.
pub type ActivityMap = BTreeMap<String, Activity>;

/// A named, scheduled offering with a participant capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity, recomputed on every render and never stored
    pub fn spots_left(&self) -> i64 {
        self.max_participants as i64 - self.participants.len() as i64
    }
}

/// Success body of the mutating endpoints: `{ "message": ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure body of the mutating endpoints: `{ "detail": ... }`
#[derive(Debug, Clone, Deserialize)]
pub struct ServerDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Derive a 1-2 character initials badge from an email's local-part.
///
/// The local-part is split on `.`, `-` and `_`. With two or more segments
/// the badge is the first letter of the first two; otherwise it falls back
/// to the first two characters of the local-part. Always uppercased.
pub fn initials_badge(email: &str) -> String {
    let local = email.split('@').next().unwrap_or("");

    let mut segments = local
        .split(['.', '-', '_'])
        .filter(|segment| !segment.is_empty());

    let initials: String = match (segments.next(), segments.next()) {
        (Some(first), Some(second)) => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect(),
        _ => local.chars().take(2).collect(),
    };

    initials.to_uppercase()
}
