//! Mouse keywords

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::backend::{BackendKind, MouseButton, PointerBackend};
use crate::config::Config;
use crate::platform::Platform;
use crate::probe::{select_backend, EnvironmentProbe, SystemProbe};
use crate::MouseError;

/// Mouse on the machine where tests run.
///
/// The backend is chosen once, when the device is built, and never changes.
/// Keywords run on the calling thread and return once the backend call has
/// completed. Concurrent use against the same OS pointer is not synchronized.
pub struct PointerDevice {
    backend: Box<dyn PointerBackend>,
    platform: Option<Platform>,
    screenshot_directory: Option<PathBuf>,
}

impl PointerDevice {
    /// Probe the running process and bind the matching backend
    pub fn new(config: Config) -> Self {
        let probe = SystemProbe::new(config.clone());
        Self::with_probe(&probe, &config)
    }

    /// Bind the backend chosen for `probe`
    pub fn with_probe(probe: &dyn EnvironmentProbe, config: &Config) -> Self {
        let (platform, backend) = select_backend(probe);
        Self {
            backend,
            platform: Some(platform),
            screenshot_directory: config.screenshot_directory.clone(),
        }
    }

    /// Use an explicit backend
    pub fn with_backend(backend: Box<dyn PointerBackend>) -> Self {
        Self {
            backend,
            platform: None,
            screenshot_directory: None,
        }
    }

    /// Family of the bound backend
    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Platform detected at construction, `None` for an explicit backend
    pub fn platform(&self) -> Option<&Platform> {
        self.platform.as_ref()
    }

    pub fn screenshot_directory(&self) -> Option<&Path> {
        self.screenshot_directory.as_deref()
    }

    /// Click at the current position.
    pub fn click(&self) -> Result<(), MouseError> {
        self.backend.click(MouseButton::Left)
    }

    /// Click at the specified position.
    ///
    /// Moves first; if the move fails no click is sent.
    pub fn click_at(&self, x: i32, y: i32) -> Result<(), MouseError> {
        debug!("Click at ({}, {})", x, y);
        self.backend.move_to(x, y)?;
        self.backend.click(MouseButton::Left)
    }

    /// Right-click at the current position.
    pub fn right_click(&self) -> Result<(), MouseError> {
        self.backend.click(MouseButton::Right)
    }

    /// Right-click at the specified position.
    pub fn right_click_at(&self, x: i32, y: i32) -> Result<(), MouseError> {
        debug!("Right-click at ({}, {})", x, y);
        self.backend.move_to(x, y)?;
        self.backend.click(MouseButton::Right)
    }

    /// Move the pointer to the specified position.
    pub fn move_to(&self, x: i32, y: i32) -> Result<(), MouseError> {
        self.backend.move_to(x, y)
    }
}

impl Default for PointerDevice {
    fn default() -> Self {
        Self::new(Config::from_env())
    }
}
