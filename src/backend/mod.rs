//! Input backends
//!
//! A backend is one move/click pair bound to a platform or library. Exactly
//! one backend is selected per [`PointerDevice`](crate::PointerDevice).

pub mod desktop;
pub mod host_robot;
pub mod unsupported;

pub use desktop::{
    desktop_automation_available, resolve_desktop_automation, DesktopAutomation,
    DesktopAutomationBackend, RdevAutomation,
};
pub use host_robot::{
    attach_host_robot, host_robot_attached, AttachedHostRobot, HostRobot, HostRobotBackend,
};
pub use unsupported::UnsupportedBackend;

use std::fmt;
use std::str::FromStr;

use crate::MouseError;

/// Logical mouse buttons
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl MouseButton {
    pub fn name(self) -> &'static str {
        match self {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
            MouseButton::Middle => "middle",
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MouseButton {
    type Err = MouseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(MouseButton::Left),
            "right" => Ok(MouseButton::Right),
            "middle" => Ok(MouseButton::Middle),
            _ => Err(MouseError::InvalidButton(s.to_string())),
        }
    }
}

/// Backend family a device is bound to
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BackendKind {
    /// `java.awt.Robot` of the hosting JVM
    HostRobot,
    /// Generic desktop automation capability
    DesktopAutomation,
    /// Failing fallback
    Unsupported,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::HostRobot => "host-robot",
            BackendKind::DesktopAutomation => "desktop-automation",
            BackendKind::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Trait that backends implement to drive the pointer
pub trait PointerBackend: Send + Sync {
    /// Family this backend belongs to
    fn kind(&self) -> BackendKind;

    /// Move the pointer to absolute screen coordinates
    fn move_to(&self, x: i32, y: i32) -> Result<(), MouseError>;

    /// Press and release `button` at the current position
    fn click(&self, button: MouseButton) -> Result<(), MouseError>;
}
