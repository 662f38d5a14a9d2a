//! Window lifecycle state machines.

use serde::{Deserialize, Serialize};

/// Lifecycle of the main window.
///
/// A close request in `Created` or `Visible` does not tear the window
/// down; it starts the quiesce handshake and moves to `Closing`. Only
/// a second close request, issued once the renderer has quiesced,
/// performs the real teardown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MainWindowState {
    /// Surface exists but has not been shown yet.
    #[default]
    Created,

    /// Shown and interactive.
    Visible,

    /// Quiesce signal sent; waiting for the renderer to request the
    /// real close.
    Closing,

    /// Surface is gone. The application terminates from here.
    Closed,
}

impl MainWindowState {
    /// Returns true once the quiesce handshake has started.
    pub fn is_closing(&self) -> bool {
        matches!(self, Self::Closing | Self::Closed)
    }

    /// Simple string representation for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Created => "Created",
            Self::Visible => "Visible",
            Self::Closing => "Closing",
            Self::Closed => "Closed",
        }
    }
}

/// Visibility of the reusable child window. It is never destroyed
/// during normal operation, only hidden for reuse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChildWindowState {
    /// Pre-created and waiting to be shown.
    #[default]
    Hidden,

    /// Currently visible.
    Shown,
}

/// Verdict for an intercepted close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloseAction {
    /// Let the surface close for real.
    Proceed,

    /// Suppress the close; the renderer was signalled instead.
    Suppress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_window_state_is_closing() {
        assert!(!MainWindowState::Created.is_closing());
        assert!(!MainWindowState::Visible.is_closing());
        assert!(MainWindowState::Closing.is_closing());
        assert!(MainWindowState::Closed.is_closing());
    }
}
