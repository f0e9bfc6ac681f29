//! Generic-desktop backend
//!
//! Uses rdev to simulate mouse events at the OS level. On Linux rdev talks
//! to the X server through XTest, so the capability only counts as present
//! when an X display is reachable and advertises XTEST.

use once_cell::sync::OnceCell;
use rdev::{simulate, Button, EventType};
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

use super::{BackendKind, MouseButton, PointerBackend};
use crate::config::Config;
use crate::MouseError;

/// Optional desktop automation capability
pub trait DesktopAutomation: Send + Sync {
    /// Absolute pointer move
    fn move_to(&self, x: i32, y: i32) -> Result<(), MouseError>;

    /// Click with the given button at the current position
    fn click(&self, button: MouseButton) -> Result<(), MouseError>;
}

/// Desktop automation through rdev's event simulation
pub struct RdevAutomation {
    press_release_delay: Duration,
}

impl RdevAutomation {
    pub fn new(press_release_delay: Duration) -> Self {
        Self { press_release_delay }
    }

    fn send(&self, event: &EventType) -> Result<(), MouseError> {
        simulate(event).map_err(|e| MouseError::Simulate(format!("{:?}: {:?}", event, e)))
    }
}

fn to_rdev_button(button: MouseButton) -> Button {
    match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
    }
}

impl DesktopAutomation for RdevAutomation {
    fn move_to(&self, x: i32, y: i32) -> Result<(), MouseError> {
        self.send(&EventType::MouseMove {
            x: f64::from(x),
            y: f64::from(y),
        })
    }

    fn click(&self, button: MouseButton) -> Result<(), MouseError> {
        let button = to_rdev_button(button);
        self.send(&EventType::ButtonPress(button))?;
        if !self.press_release_delay.is_zero() {
            thread::sleep(self.press_release_delay);
        }
        self.send(&EventType::ButtonRelease(button))
    }
}

/// Backend delegating to a desktop automation capability
pub struct DesktopAutomationBackend {
    automation: Box<dyn DesktopAutomation>,
}

impl DesktopAutomationBackend {
    pub fn new(automation: Box<dyn DesktopAutomation>) -> Self {
        Self { automation }
    }
}

impl PointerBackend for DesktopAutomationBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::DesktopAutomation
    }

    fn move_to(&self, x: i32, y: i32) -> Result<(), MouseError> {
        debug!("Desktop move to ({}, {})", x, y);
        self.automation.move_to(x, y)
    }

    fn click(&self, button: MouseButton) -> Result<(), MouseError> {
        debug!("Desktop click {}", button);
        self.automation.click(button)
    }
}

static CAPABILITY_AVAILABLE: OnceCell<bool> = OnceCell::new();

#[cfg(target_os = "linux")]
fn probe_capability() -> Result<(), String> {
    use x11rb::connection::RequestConnection;
    use x11rb::protocol::xtest;

    let (conn, _screen) =
        x11rb::connect(None).map_err(|e| format!("Failed to connect to X11: {}", e))?;

    match conn.extension_information(xtest::X11_EXTENSION_NAME) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err("X server does not advertise the XTEST extension".to_string()),
        Err(e) => Err(format!("Failed to query XTEST: {}", e)),
    }
}

#[cfg(any(target_os = "windows", target_os = "macos"))]
fn probe_capability() -> Result<(), String> {
    Ok(())
}

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
fn probe_capability() -> Result<(), String> {
    Err(format!("no input simulation on {}", std::env::consts::OS))
}

/// Whether the desktop capability can be used in this process.
///
/// Probed on first call and cached for the rest of the process.
pub fn desktop_automation_available() -> bool {
    *CAPABILITY_AVAILABLE.get_or_init(|| match probe_capability() {
        Ok(()) => {
            info!("Desktop automation available");
            true
        }
        Err(reason) => {
            debug!("Desktop automation unavailable: {}", reason);
            false
        }
    })
}

/// Resolve the desktop capability, `None` when it cannot be loaded
pub fn resolve_desktop_automation(config: &Config) -> Option<Box<dyn DesktopAutomation>> {
    if !desktop_automation_available() {
        return None;
    }

    Some(Box::new(RdevAutomation::new(Duration::from_millis(
        config.press_release_delay_ms,
    ))))
}
