//! Activity Board
//!
//! A client-side controller for a club activity sign-up service. It loads
//! and renders the activity list, submits sign-ups by email, unregisters
//! participants after confirmation, and manages a single transient status
//! line with a cancellable auto-hide timer. Server state is authoritative;
//! the board re-fetches the whole collection after every successful
//! mutation instead of patching its local copy.

pub mod api;
pub mod board;
pub mod config;
pub mod models;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{BoardError, Result};

// Re-export main components for easy access
pub use api::{ActivitiesClient, ApiOutcome};
pub use board::{ActivityBoard, LoadState};
pub use view::{BoardView, ConsoleView, RemovalHandle, Severity};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
