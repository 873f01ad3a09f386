//! Board controller and status line state

pub mod controller;
pub mod status;

pub use controller::{
    ActivityBoard, LoadState, LOAD_FAILURE_NOTICE, REMOVAL_FAILURE_MESSAGE,
    REMOVAL_REJECTED_FALLBACK, SIGNUP_FAILURE_MESSAGE, SIGNUP_REJECTED_FALLBACK,
    SIGNUP_SUCCESS_FALLBACK,
};
pub use status::StatusLine;
