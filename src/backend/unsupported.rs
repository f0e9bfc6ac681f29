//! Failing fallback backend
//!
//! Bound when no input facility exists, so constructing a device never fails
//! and the error surfaces only when a keyword is actually used.

use tracing::debug;

use super::{BackendKind, MouseButton, PointerBackend};
use crate::MouseError;

pub const MOVE_UNSUPPORTED: &str = "Moving mouse is not supported on this platform by default. \
     See library documentation for details.";
pub const CLICK_UNSUPPORTED: &str = "Clicking is not supported on this platform by default. \
     See library documentation for details.";

#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedBackend;

impl PointerBackend for UnsupportedBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Unsupported
    }

    fn move_to(&self, x: i32, y: i32) -> Result<(), MouseError> {
        debug!("Rejecting move to ({}, {})", x, y);
        Err(MouseError::Unsupported {
            message: MOVE_UNSUPPORTED.to_string(),
        })
    }

    fn click(&self, button: MouseButton) -> Result<(), MouseError> {
        debug!("Rejecting {} click", button);
        Err(MouseError::Unsupported {
            message: CLICK_UNSUPPORTED.to_string(),
        })
    }
}
