//! Requests sent from windows to the hub.
//!
//! Two distinct surfaces: [`HubEvent`] is fire-and-forget, [`HubCall`]
//! blocks the caller until the hub answers through the reply sender
//! carried in the request.

use crossbeam_channel::Sender;
use serde_json::Value;

use studio_native::NativeError;

use crate::state::CloseAction;
use crate::types::{ApiValue, Mutation, StartupOptions, UniqueId, WindowId, WindowOptions};

/// One-way events from windows (and their shells) to the hub.
#[derive(Debug, Clone)]
pub enum HubEvent {
    /// Resize/center and show the child window, delivering its startup
    /// payload.
    ShowChildWindow {
        /// Sizing for the child window surface.
        options: WindowOptions,

        /// Opaque payload forwarded to the child window content.
        startup: StartupOptions,
    },

    /// Register the sending window for store synchronization.
    /// Idempotent: a page reload re-registers without a second entry.
    RegisterStore {
        /// The registering window.
        window: WindowId,
    },

    /// One opaque store change to relay to every other registered
    /// window.
    Mutation {
        /// The window that applied the change locally.
        source: WindowId,

        /// The change itself, never interpreted by the hub.
        payload: Mutation,
    },

    /// The window's surface has actually closed.
    Closed {
        /// The closed window.
        window: WindowId,
    },
}

/// Blocking requests. The caller sends the request with a fresh reply
/// sender and blocks on the paired receiver; the hub answers exactly
/// once.
#[derive(Debug)]
pub enum HubCall {
    /// Proxy a native-engine call (or a virtual composite resolved in
    /// the hub). Native errors come back through the reply channel
    /// unmodified.
    Api {
        /// Method name on the native surface or virtual-method table.
        method: String,

        /// Positional arguments.
        args: Vec<Value>,

        /// Where the result goes.
        reply: Sender<Result<ApiValue, NativeError>>,
    },

    /// Allocate a process-wide unique identifier.
    UniqueId {
        /// Where the fresh id goes.
        reply: Sender<UniqueId>,
    },

    /// A window surface received a close request. The shell suppresses
    /// or proceeds with the close based on the answer.
    CloseRequested {
        /// The window being closed.
        window: WindowId,

        /// Where the verdict goes.
        reply: Sender<CloseAction>,
    },
}
