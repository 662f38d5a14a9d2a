//! The hub event loop.

use crossbeam_channel::{select, Receiver};
use std::sync::Arc;
use tracing::{debug, info, warn};

use studio_ipc::{HubCall, HubEvent, WindowId};

use crate::ids::IdAllocator;
use crate::lifecycle::WindowLifecycle;
use crate::proxy::CallProxy;
use crate::registry::WindowRegistry;
use crate::sync::StateSync;

/// What arrived on this loop iteration.
enum Incoming {
    Event(HubEvent),
    Call(HubCall),
    Disconnected,
}

/// Single-threaded coordinator for every window.
///
/// All shared state lives here and every handler runs to completion
/// before the next message is dispatched, so nothing needs locking.
pub struct Hub {
    event_rx: Receiver<HubEvent>,
    call_rx: Receiver<HubCall>,
    registry: WindowRegistry,
    sync: StateSync,
    proxy: CallProxy,
    ids: IdAllocator,
    lifecycle: WindowLifecycle,
}

impl Hub {
    /// Assemble a hub over its two incoming channels.
    pub fn new(
        event_rx: Receiver<HubEvent>,
        call_rx: Receiver<HubCall>,
        lifecycle: WindowLifecycle,
        proxy: CallProxy,
    ) -> Self {
        let sync = StateSync::new(Arc::clone(lifecycle.main_handle()));
        Self {
            event_rx,
            call_rx,
            registry: WindowRegistry::new(),
            sync,
            proxy,
            ids: IdAllocator::new(),
            lifecycle,
        }
    }

    /// Run until the main window closes or every caller hangs up.
    pub fn run(&mut self) {
        info!("hub started");

        loop {
            match self.next() {
                Incoming::Event(event) => {
                    if !self.handle_event(event) {
                        break;
                    }
                }
                Incoming::Call(call) => self.handle_call(call),
                Incoming::Disconnected => {
                    info!("hub channels disconnected, stopping");
                    break;
                }
            }
        }

        info!("hub stopped");
    }

    fn next(&self) -> Incoming {
        select! {
            recv(self.event_rx) -> event => match event {
                Ok(event) => Incoming::Event(event),
                Err(_) => Incoming::Disconnected,
            },
            recv(self.call_rx) -> call => match call {
                Ok(call) => Incoming::Call(call),
                Err(_) => Incoming::Disconnected,
            },
        }
    }

    /// Handle a one-way event. Returns false when the hub should stop.
    fn handle_event(&mut self, event: HubEvent) -> bool {
        debug!(?event, "hub event");

        match event {
            HubEvent::ShowChildWindow { options, startup } => {
                self.lifecycle.show_child(options, startup);
            }
            HubEvent::RegisterStore { window } => self.register_store(window),
            HubEvent::Mutation { source, payload } => {
                self.sync.on_mutation(&self.registry, source, &payload);
            }
            HubEvent::Closed { window } => {
                // Close observer: drop the registry entry exactly once.
                self.registry.unregister(window);
                if self.lifecycle.on_closed(window) {
                    return false;
                }
            }
        }

        true
    }

    fn handle_call(&mut self, call: HubCall) {
        // A caller that already hung up never sees its reply; that is
        // its problem, not the hub's.
        match call {
            HubCall::Api {
                method,
                args,
                reply,
            } => {
                let result = self.proxy.invoke(&method, &args);
                let _ = reply.send(result);
            }
            HubCall::UniqueId { reply } => {
                let _ = reply.send(self.ids.allocate());
            }
            HubCall::CloseRequested { window, reply } => {
                let action = self.lifecycle.on_close_requested(window);
                let _ = reply.send(action);
            }
        }
    }

    fn register_store(&mut self, window: WindowId) {
        let Some(handle) = self.lifecycle.window(window) else {
            warn!(%window, "register from unknown window");
            return;
        };

        debug!(%window, role = ?handle.role(), "registering store");
        self.registry.register(window, Arc::clone(handle));
        // Runs even for a re-registration: a reloaded window needs a
        // fresh snapshot.
        self.sync.on_register(window);
    }

    /// Registry view for diagnostics.
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    /// Lifecycle view for diagnostics.
    pub fn lifecycle(&self) -> &WindowLifecycle {
        &self.lifecycle
    }
}
