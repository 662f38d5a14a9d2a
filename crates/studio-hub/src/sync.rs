//! Store synchronization relay.
//!
//! The hub holds no store state of its own; the main window is the
//! source of truth. On registration the relay asks the main window to
//! push a full snapshot, and every mutation is fanned out unchanged to
//! all other registered windows. Pure relay: no buffering, no
//! transformation, no deduplication.

use tracing::debug;

use studio_ipc::{Mutation, WindowId, WindowMessage};

use crate::registry::WindowRegistry;
use crate::window::WindowRef;

/// Coordinates store snapshots and mutation fan-out.
pub struct StateSync {
    main: WindowRef,
}

impl StateSync {
    /// Create a relay rooted at the given main window handle.
    pub fn new(main: WindowRef) -> Self {
        Self { main }
    }

    /// A window registered: ask the main window to push its current
    /// store state to it. The main window's own registration needs no
    /// push. Runs on every registration event, including re-registration
    /// after a page reload, so a reloaded window gets a fresh snapshot.
    ///
    /// The request goes through the hub-owned main handle, not the
    /// registry: windows register their stores in no particular order,
    /// and the snapshot must reach a child that registers before the
    /// main window's own store does.
    pub fn on_register(&self, window: WindowId) {
        if window == self.main.id() {
            return;
        }

        if self
            .main
            .send(WindowMessage::SendState { target: window })
            .is_err()
        {
            // Expected close race; nothing to recover.
            debug!(%window, "state push dropped, main window handle stale");
        }
    }

    /// Relay one opaque mutation to every registered window except its
    /// source.
    pub fn on_mutation(&self, registry: &WindowRegistry, source: WindowId, payload: &Mutation) {
        for (id, window) in registry.others(source) {
            if window
                .send(WindowMessage::Mutation(payload.clone()))
                .is_err()
            {
                debug!(%id, "mutation dropped, window handle stale");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use crossbeam_channel::Receiver;
    use serde_json::json;

    use studio_ipc::WindowRole;

    use crate::window::ChannelWindow;

    fn mutation() -> Mutation {
        Mutation(json!({"type": "SET_SCENE", "payload": "main"}))
    }

    fn windows() -> (
        Arc<ChannelWindow>,
        Receiver<WindowMessage>,
        Arc<ChannelWindow>,
        Receiver<WindowMessage>,
    ) {
        let (main, main_rx) = ChannelWindow::create(WindowId(1), WindowRole::Main);
        let (child, child_rx) = ChannelWindow::create(WindowId(2), WindowRole::Child);
        (main, main_rx, child, child_rx)
    }

    #[test]
    fn test_mutation_is_never_echoed_to_its_source() {
        let (main, main_rx, child, child_rx) = windows();
        let mut registry = WindowRegistry::new();
        registry.register(WindowId(1), main.clone());
        registry.register(WindowId(2), child);

        let sync = StateSync::new(main);
        sync.on_mutation(&registry, WindowId(2), &mutation());

        assert_eq!(
            main_rx.try_recv().unwrap(),
            WindowMessage::Mutation(mutation())
        );
        assert!(child_rx.try_recv().is_err());
    }

    #[test]
    fn test_mutations_from_main_reach_the_child() {
        let (main, main_rx, child, child_rx) = windows();
        let mut registry = WindowRegistry::new();
        registry.register(WindowId(1), main.clone());
        registry.register(WindowId(2), child);

        let sync = StateSync::new(main);
        sync.on_mutation(&registry, WindowId(1), &mutation());

        assert_eq!(
            child_rx.try_recv().unwrap(),
            WindowMessage::Mutation(mutation())
        );
        assert!(main_rx.try_recv().is_err());
    }

    #[test]
    fn test_register_triggers_state_push_to_newcomer() {
        let (main, main_rx, _child, _child_rx) = windows();

        let sync = StateSync::new(main);
        sync.on_register(WindowId(2));

        assert_eq!(
            main_rx.try_recv().unwrap(),
            WindowMessage::SendState {
                target: WindowId(2)
            }
        );
    }

    #[test]
    fn test_main_registration_needs_no_push() {
        let (main, main_rx, _child, _child_rx) = windows();

        let sync = StateSync::new(main);
        sync.on_register(WindowId(1));

        assert!(main_rx.try_recv().is_err());
    }

    #[test]
    fn test_state_push_does_not_depend_on_registration_order() {
        let (main, main_rx, _child, _child_rx) = windows();

        // The child's store registers before the main window's own
        // store; nothing is in the registry yet.
        let registry = WindowRegistry::new();
        assert!(registry.list().is_empty());

        let sync = StateSync::new(main);
        sync.on_register(WindowId(2));

        assert_eq!(
            main_rx.try_recv().unwrap(),
            WindowMessage::SendState {
                target: WindowId(2)
            }
        );
    }

    #[test]
    fn test_stale_handles_are_dropped_silently() {
        let (main, main_rx, child, child_rx) = windows();
        let mut registry = WindowRegistry::new();
        registry.register(WindowId(1), main.clone());
        registry.register(WindowId(2), child);

        // The child closed between the broadcast decision and the send.
        drop(child_rx);

        let sync = StateSync::new(main);
        sync.on_mutation(&registry, WindowId(1), &mutation());
        sync.on_register(WindowId(2));

        // Main still gets its handshake request; nothing panicked.
        assert_eq!(
            main_rx.try_recv().unwrap(),
            WindowMessage::SendState {
                target: WindowId(2)
            }
        );

        // A stale main handle is just as silent.
        drop(main_rx);
        sync.on_register(WindowId(2));
    }
}
