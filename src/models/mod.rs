//! Data models

pub mod activity;

pub use activity::{initials_badge, Activity, ActivityMap, ServerDetail, ServerMessage};
