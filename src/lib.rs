//! Robot Mouse - mouse keywords for test automation
//!
//! This library provides components for:
//! - Detecting the hosting runtime (JVM, unsupported managed runtime, desktop)
//! - Selecting one input backend per device at construction
//! - Clicking, right-clicking and moving the pointer through that backend

pub mod backend;
pub mod config;
pub mod platform;
pub mod pointer;
pub mod probe;

pub use backend::{BackendKind, MouseButton, PointerBackend};
pub use config::Config;
pub use platform::Platform;
pub use pointer::PointerDevice;
pub use probe::{select_backend, EnvironmentProbe, SystemProbe};

use thiserror::Error;

/// Main error type for Robot Mouse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MouseError {
    #[error("{message}")]
    Unsupported { message: String },

    #[error("No input robot has been attached by the host JVM")]
    HostDetached,

    #[error("Host robot call failed: {0}")]
    HostRobot(String),

    #[error("Failed to simulate input event: {0}")]
    Simulate(String),

    #[error("Unknown mouse button: {0}")]
    InvalidButton(String),
}
