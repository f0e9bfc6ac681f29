//! Environment probing and backend selection

use tracing::{debug, info};

use crate::backend::{
    resolve_desktop_automation, AttachedHostRobot, DesktopAutomation, DesktopAutomationBackend,
    HostRobot, HostRobotBackend, PointerBackend, UnsupportedBackend,
};
use crate::config::Config;
use crate::platform::Platform;

/// Trait for environment probe implementations
pub trait EnvironmentProbe {
    /// Runtime family the process runs in
    fn platform(&self) -> Platform;

    /// The JVM host's robot. Only asked for on the JVM branch.
    fn host_robot(&self) -> Box<dyn HostRobot>;

    /// Try to load the desktop capability. Only asked for on the desktop branch.
    fn desktop_automation(&self) -> Option<Box<dyn DesktopAutomation>>;
}

/// Probe of the running process
pub struct SystemProbe {
    config: Config,
}

impl SystemProbe {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl EnvironmentProbe for SystemProbe {
    fn platform(&self) -> Platform {
        Platform::detect(&self.config)
    }

    fn host_robot(&self) -> Box<dyn HostRobot> {
        Box::new(AttachedHostRobot)
    }

    fn desktop_automation(&self) -> Option<Box<dyn DesktopAutomation>> {
        resolve_desktop_automation(&self.config)
    }
}

/// Pick the backend for the probed environment. Never fails.
///
/// Returns the detected platform alongside the backend so callers do not
/// probe twice.
pub fn select_backend(probe: &dyn EnvironmentProbe) -> (Platform, Box<dyn PointerBackend>) {
    let platform = probe.platform();
    debug!("Detected platform '{}'", platform);

    let backend: Box<dyn PointerBackend> = match &platform {
        Platform::Jvm => Box::new(HostRobotBackend::new(probe.host_robot())),
        Platform::ManagedRuntime => Box::new(UnsupportedBackend),
        Platform::Desktop(_) => match probe.desktop_automation() {
            Some(automation) => Box::new(DesktopAutomationBackend::new(automation)),
            None => Box::new(UnsupportedBackend),
        },
    };

    info!("Using {} backend on '{}'", backend.kind(), platform);
    (platform, backend)
}
