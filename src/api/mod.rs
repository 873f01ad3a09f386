//! Activities API integration

pub mod client;

pub use client::{ActivitiesClient, ApiOutcome};
