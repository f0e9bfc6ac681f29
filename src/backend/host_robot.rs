//! JVM-platform backend
//!
//! When the library is loaded into a JVM, input goes through the host's
//! `java.awt.Robot`. The host hands its robot over once through
//! [`attach_host_robot`]; the facility is part of the platform API so no
//! availability probe happens on this path.

use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::{debug, info};

use super::{BackendKind, MouseButton, PointerBackend};
use crate::MouseError;

/// `java.awt.event.InputEvent.BUTTON1_DOWN_MASK`
pub const BUTTON1_DOWN_MASK: i32 = 1 << 10;
/// `java.awt.event.InputEvent.BUTTON2_DOWN_MASK`
pub const BUTTON2_DOWN_MASK: i32 = 1 << 11;
/// `java.awt.event.InputEvent.BUTTON3_DOWN_MASK`
pub const BUTTON3_DOWN_MASK: i32 = 1 << 12;

/// The subset of `java.awt.Robot` used for pointer input
pub trait HostRobot: Send + Sync {
    fn mouse_move(&self, x: i32, y: i32) -> Result<(), MouseError>;
    fn mouse_press(&self, buttons: i32) -> Result<(), MouseError>;
    fn mouse_release(&self, buttons: i32) -> Result<(), MouseError>;
}

static HOST_ROBOT: OnceCell<Arc<dyn HostRobot>> = OnceCell::new();

/// Hand the host JVM's robot to the library.
///
/// Returns `false` if a robot was already attached; the first one stays.
pub fn attach_host_robot(robot: Arc<dyn HostRobot>) -> bool {
    let attached = HOST_ROBOT.set(robot).is_ok();
    if attached {
        info!("Host robot attached");
    }
    attached
}

/// Whether a host JVM has attached its robot
pub fn host_robot_attached() -> bool {
    HOST_ROBOT.get().is_some()
}

/// Forwards to whichever robot the host attached
#[derive(Debug, Default, Clone, Copy)]
pub struct AttachedHostRobot;

impl AttachedHostRobot {
    fn robot(&self) -> Result<&'static Arc<dyn HostRobot>, MouseError> {
        HOST_ROBOT.get().ok_or(MouseError::HostDetached)
    }
}

impl HostRobot for AttachedHostRobot {
    fn mouse_move(&self, x: i32, y: i32) -> Result<(), MouseError> {
        self.robot()?.mouse_move(x, y)
    }

    fn mouse_press(&self, buttons: i32) -> Result<(), MouseError> {
        self.robot()?.mouse_press(buttons)
    }

    fn mouse_release(&self, buttons: i32) -> Result<(), MouseError> {
        self.robot()?.mouse_release(buttons)
    }
}

/// Translate a logical button to the AWT button-down mask
pub fn button_mask(button: MouseButton) -> i32 {
    match button {
        MouseButton::Left => BUTTON1_DOWN_MASK,
        MouseButton::Middle => BUTTON2_DOWN_MASK,
        MouseButton::Right => BUTTON3_DOWN_MASK,
    }
}

/// Backend driving the host JVM's robot
pub struct HostRobotBackend {
    robot: Box<dyn HostRobot>,
}

impl HostRobotBackend {
    pub fn new(robot: Box<dyn HostRobot>) -> Self {
        Self { robot }
    }
}

impl PointerBackend for HostRobotBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::HostRobot
    }

    fn move_to(&self, x: i32, y: i32) -> Result<(), MouseError> {
        debug!("Host robot move to ({}, {})", x, y);
        self.robot.mouse_move(x, y)
    }

    fn click(&self, button: MouseButton) -> Result<(), MouseError> {
        let mask = button_mask(button);
        debug!("Host robot click {} (mask {:#x})", button, mask);
        self.robot.mouse_press(mask)?;
        self.robot.mouse_release(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Move(i32, i32),
        Press(i32),
        Release(i32),
    }

    #[derive(Default)]
    struct RecordingRobot {
        calls: Arc<Mutex<Vec<Call>>>,
        fail_press: bool,
    }

    impl HostRobot for RecordingRobot {
        fn mouse_move(&self, x: i32, y: i32) -> Result<(), MouseError> {
            self.calls.lock().unwrap().push(Call::Move(x, y));
            Ok(())
        }

        fn mouse_press(&self, buttons: i32) -> Result<(), MouseError> {
            if self.fail_press {
                return Err(MouseError::HostRobot("press rejected".into()));
            }
            self.calls.lock().unwrap().push(Call::Press(buttons));
            Ok(())
        }

        fn mouse_release(&self, buttons: i32) -> Result<(), MouseError> {
            self.calls.lock().unwrap().push(Call::Release(buttons));
            Ok(())
        }
    }

    #[rstest]
    #[case(MouseButton::Left, 1024)]
    #[case(MouseButton::Middle, 2048)]
    #[case(MouseButton::Right, 4096)]
    fn click_presses_and_releases_mapped_mask(#[case] button: MouseButton, #[case] mask: i32) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let backend = HostRobotBackend::new(Box::new(RecordingRobot {
            calls: calls.clone(),
            fail_press: false,
        }));

        backend.click(button).unwrap();

        assert_eq!(*calls.lock().unwrap(), vec![Call::Press(mask), Call::Release(mask)]);
    }

    #[test]
    fn move_is_absolute_passthrough() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let backend = HostRobotBackend::new(Box::new(RecordingRobot {
            calls: calls.clone(),
            fail_press: false,
        }));

        backend.move_to(-5, 99_999).unwrap();

        assert_eq!(*calls.lock().unwrap(), vec![Call::Move(-5, 99_999)]);
        assert_eq!(backend.kind(), BackendKind::HostRobot);
    }

    #[test]
    fn press_failure_skips_release() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let backend = HostRobotBackend::new(Box::new(RecordingRobot {
            calls: calls.clone(),
            fail_press: true,
        }));

        let err = backend.click(MouseButton::Left).unwrap_err();

        assert_eq!(err, MouseError::HostRobot("press rejected".into()));
        assert!(calls.lock().unwrap().is_empty());
    }

    // Nothing in the unit test binary attaches a robot.
    #[test]
    fn detached_host_fails_at_call_time() {
        let backend = HostRobotBackend::new(Box::new(AttachedHostRobot));

        assert!(!host_robot_attached());
        assert_eq!(backend.move_to(1, 2), Err(MouseError::HostDetached));
        assert_eq!(backend.click(MouseButton::Right), Err(MouseError::HostDetached));
    }
}
