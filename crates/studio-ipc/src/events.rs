//! Messages pushed from the hub to window contents.

use serde::{Deserialize, Serialize};

use crate::types::{Mutation, StartupOptions, WindowId};

/// Messages delivered into a window's inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindowMessage {
    /// Quiesce before the real close. Sent to the main window when the
    /// first close request is intercepted.
    Shutdown,

    /// Logically close: hide while the surface persists for reuse.
    /// Sent to the child window instead of destroying it.
    CloseWindow,

    /// Push the full store state to `target`. Sent to the main window,
    /// which is the source of truth; the hub only coordinates the
    /// handshake.
    SendState {
        /// The freshly registered window that needs a snapshot.
        target: WindowId,
    },

    /// Startup payload for a freshly shown child window.
    SetContents(StartupOptions),

    /// A store change relayed from another window.
    Mutation(Mutation),
}
