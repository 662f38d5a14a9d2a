//! Caller-side handle to the hub.

use crossbeam_channel::Sender;
use serde_json::Value;
use thiserror::Error;

use studio_ipc::{
    reply_channel, ApiValue, CloseAction, HubCall, HubEvent, Mutation, StartupOptions, UniqueId,
    WindowId, WindowOptions,
};
use studio_native::NativeError;

/// The hub loop has stopped; no further requests can be serviced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("hub is gone")]
pub struct HubGone;

/// Error surface of a proxied native call.
#[derive(Debug, Clone, Error)]
pub enum CallError {
    /// The native layer's own error, passed through untouched.
    #[error(transparent)]
    Native(#[from] NativeError),

    /// The hub loop has stopped.
    #[error("hub is gone")]
    HubGone,
}

/// Cloneable handle used by window shells and renderer glue.
///
/// Event methods are fire-and-forget; call methods block until the hub
/// answers. There is no timeout: the engine is co-located and the hub
/// never parks mid-request.
#[derive(Debug, Clone)]
pub struct HubClient {
    event_tx: Sender<HubEvent>,
    call_tx: Sender<HubCall>,
}

impl HubClient {
    /// Wrap the hub's two incoming channels.
    pub fn new(event_tx: Sender<HubEvent>, call_tx: Sender<HubCall>) -> Self {
        Self { event_tx, call_tx }
    }

    /// Ask the hub to resize/center and show the child window.
    pub fn show_child_window(
        &self,
        options: WindowOptions,
        startup: StartupOptions,
    ) -> Result<(), HubGone> {
        self.event(HubEvent::ShowChildWindow { options, startup })
    }

    /// Register the window's store for synchronization.
    pub fn register_store(&self, window: WindowId) -> Result<(), HubGone> {
        self.event(HubEvent::RegisterStore { window })
    }

    /// Relay one local store change to every other window.
    pub fn mutation(&self, source: WindowId, payload: Mutation) -> Result<(), HubGone> {
        self.event(HubEvent::Mutation { source, payload })
    }

    /// Report that a window surface has actually closed.
    pub fn window_closed(&self, window: WindowId) -> Result<(), HubGone> {
        self.event(HubEvent::Closed { window })
    }

    /// Proxy a native call. Blocks until the result is available;
    /// native errors come back unmodified.
    pub fn api_call(
        &self,
        method: impl Into<String>,
        args: Vec<Value>,
    ) -> Result<ApiValue, CallError> {
        let (reply, reply_rx) = reply_channel();
        self.call_tx
            .send(HubCall::Api {
                method: method.into(),
                args,
                reply,
            })
            .map_err(|_| CallError::HubGone)?;

        reply_rx
            .recv()
            .map_err(|_| CallError::HubGone)?
            .map_err(CallError::from)
    }

    /// Allocate a process-wide unique identifier. Blocks.
    pub fn unique_id(&self) -> Result<UniqueId, HubGone> {
        let (reply, reply_rx) = reply_channel();
        self.call_tx
            .send(HubCall::UniqueId { reply })
            .map_err(|_| HubGone)?;
        reply_rx.recv().map_err(|_| HubGone)
    }

    /// Report an intercepted close request and block for the verdict.
    pub fn request_close(&self, window: WindowId) -> Result<CloseAction, HubGone> {
        let (reply, reply_rx) = reply_channel();
        self.call_tx
            .send(HubCall::CloseRequested { window, reply })
            .map_err(|_| HubGone)?;
        reply_rx.recv().map_err(|_| HubGone)
    }

    fn event(&self, event: HubEvent) -> Result<(), HubGone> {
        self.event_tx.send(event).map_err(|_| HubGone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use studio_ipc::{call_channel, event_channel};

    #[test]
    fn test_client_reports_hub_gone_after_shutdown() {
        let (event_tx, event_rx) = event_channel();
        let (call_tx, call_rx) = call_channel();
        let client = HubClient::new(event_tx, call_tx);

        drop(event_rx);
        drop(call_rx);

        assert_eq!(client.register_store(WindowId(1)), Err(HubGone));
        assert_eq!(client.unique_id(), Err(HubGone));
        assert!(matches!(
            client.api_call("API_getVersion", vec![]),
            Err(CallError::HubGone)
        ));
    }
}
