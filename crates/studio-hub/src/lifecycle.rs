//! Window lifecycle management.
//!
//! The hub owns one main window and one reusable child window. Close
//! requests are intercepted: the first main-window close starts the
//! quiesce handshake instead of tearing anything down, and child
//! closes hide the surface for reuse. Only application-wide teardown
//! destroys the child for real.

use tracing::{debug, info, warn};

use studio_ipc::{
    ChildWindowState, CloseAction, MainWindowState, StartupOptions, WindowId, WindowMessage,
    WindowOptions,
};

use crate::window::WindowRef;

/// Owns the window handles and their lifecycle state machines.
pub struct WindowLifecycle {
    main: WindowRef,
    child: WindowRef,
    main_state: MainWindowState,
    child_state: ChildWindowState,
    // Set once teardown begins so that the child window can tell a
    // user-initiated close apart from the app closing its windows on
    // exit.
    app_exiting: bool,
}

impl WindowLifecycle {
    /// Take ownership of the main and child window handles.
    pub fn new(main: WindowRef, child: WindowRef) -> Self {
        Self {
            main,
            child,
            main_state: MainWindowState::Created,
            child_state: ChildWindowState::Hidden,
            app_exiting: false,
        }
    }

    /// Identifier of the main window.
    pub fn main_id(&self) -> WindowId {
        self.main.id()
    }

    /// Handle of the main window. The hub hands this to the sync
    /// relay so state pushes never depend on registration order.
    pub fn main_handle(&self) -> &WindowRef {
        &self.main
    }

    /// Identifier of the child window.
    pub fn child_id(&self) -> WindowId {
        self.child.id()
    }

    /// Current main-window lifecycle state.
    pub fn main_state(&self) -> MainWindowState {
        self.main_state
    }

    /// Current child-window visibility.
    pub fn child_state(&self) -> ChildWindowState {
        self.child_state
    }

    /// Whether application-wide teardown has begun.
    pub fn app_exiting(&self) -> bool {
        self.app_exiting
    }

    /// Resolve a window id to its handle.
    pub fn window(&self, id: WindowId) -> Option<&WindowRef> {
        if id == self.main_id() {
            Some(&self.main)
        } else if id == self.child_id() {
            Some(&self.child)
        } else {
            None
        }
    }

    /// Show the main window after startup.
    pub fn show_main(&mut self) {
        self.main.show();
        self.transition_main(MainWindowState::Visible);
    }

    /// Resize, center, and show the child window with a fresh startup
    /// payload. Concurrent shows are last-write-wins on size and
    /// contents.
    pub fn show_child(&mut self, options: WindowOptions, startup: StartupOptions) {
        if let Some((width, height)) = options.dimensions() {
            self.child.set_size(width, height);
            self.child.center();
        }

        if self
            .child
            .send(WindowMessage::SetContents(startup))
            .is_err()
        {
            warn!("child window handle stale, not showing");
            return;
        }

        self.child.show();
        self.child_state = ChildWindowState::Shown;
    }

    /// A window surface received a close request. Decides whether the
    /// shell lets the close proceed or suppresses it.
    pub fn on_close_requested(&mut self, window: WindowId) -> CloseAction {
        if window == self.main_id() {
            self.on_main_close_requested()
        } else if window == self.child_id() {
            self.on_child_close_requested()
        } else {
            // Unknown surface; nothing to coordinate.
            CloseAction::Proceed
        }
    }

    fn on_main_close_requested(&mut self) -> CloseAction {
        // The renderer has quiesced and asked again: let the real
        // teardown happen.
        if self.main_state.is_closing() {
            return CloseAction::Proceed;
        }

        info!("main window closing, requesting quiesce");
        self.transition_main(MainWindowState::Closing);
        self.app_exiting = true;
        // A stale handle here means the renderer is already gone; the
        // second close request will still arrive.
        let _ = self.main.send(WindowMessage::Shutdown);
        CloseAction::Suppress
    }

    fn on_child_close_requested(&mut self) -> CloseAction {
        if self.app_exiting {
            return CloseAction::Proceed;
        }

        debug!("child window close intercepted, hiding for reuse");
        let _ = self.child.send(WindowMessage::CloseWindow);
        self.child.hide();
        self.child_state = ChildWindowState::Hidden;
        CloseAction::Suppress
    }

    /// A window surface actually closed. Returns true when the whole
    /// application should terminate.
    pub fn on_closed(&mut self, window: WindowId) -> bool {
        if window == self.main_id() {
            info!("main window closed, terminating");
            self.transition_main(MainWindowState::Closed);
            self.app_exiting = true;
            true
        } else {
            false
        }
    }

    fn transition_main(&mut self, new_state: MainWindowState) {
        debug!(
            previous = self.main_state.name(),
            current = new_state.name(),
            "main window state"
        );
        self.main_state = new_state;
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

    fn lifecycle() -> (
        WindowLifecycle,
        Arc<ChannelWindow>,
        Receiver<WindowMessage>,
        Arc<ChannelWindow>,
        Receiver<WindowMessage>,
    ) {
        let (main, main_rx) = ChannelWindow::create(WindowId(1), WindowRole::Main);
        let (child, child_rx) = ChannelWindow::create(WindowId(2), WindowRole::Child);
        let lifecycle = WindowLifecycle::new(main.clone(), child.clone());
        (lifecycle, main, main_rx, child, child_rx)
    }

    #[test]
    fn test_first_main_close_starts_the_quiesce_handshake() {
        let (mut lifecycle, _main, main_rx, _child, _child_rx) = lifecycle();
        lifecycle.show_main();

        let action = lifecycle.on_close_requested(WindowId(1));
        assert_eq!(action, CloseAction::Suppress);
        assert_eq!(lifecycle.main_state(), MainWindowState::Closing);
        assert_eq!(main_rx.try_recv().unwrap(), WindowMessage::Shutdown);

        // The quiesced renderer asks again; now the close is real.
        let action = lifecycle.on_close_requested(WindowId(1));
        assert_eq!(action, CloseAction::Proceed);

        assert!(lifecycle.on_closed(WindowId(1)));
        assert_eq!(lifecycle.main_state(), MainWindowState::Closed);
    }

    #[test]
    fn test_child_close_hides_instead_of_destroying() {
        let (mut lifecycle, _main, _main_rx, child, child_rx) = lifecycle();
        lifecycle.show_child(WindowOptions::default(), json!({"component": "settings"}));
        assert_eq!(lifecycle.child_state(), ChildWindowState::Shown);

        let action = lifecycle.on_close_requested(WindowId(2));
        assert_eq!(action, CloseAction::Suppress);
        assert_eq!(lifecycle.child_state(), ChildWindowState::Hidden);
        assert!(!child.surface_state().visible);

        let messages: Vec<WindowMessage> = child_rx.try_iter().collect();
        assert!(messages.contains(&WindowMessage::CloseWindow));

        // Closing never terminates the app from the child side.
        assert!(!lifecycle.on_closed(WindowId(2)));
    }

    #[test]
    fn test_child_close_proceeds_during_app_teardown() {
        let (mut lifecycle, _main, _main_rx, _child, _child_rx) = lifecycle();
        lifecycle.show_main();

        // Main close starts teardown; the child may now really close.
        lifecycle.on_close_requested(WindowId(1));
        assert!(lifecycle.app_exiting());
        assert_eq!(
            lifecycle.on_close_requested(WindowId(2)),
            CloseAction::Proceed
        );
    }

    #[test]
    fn test_show_child_resizes_centers_and_delivers_contents() {
        let (mut lifecycle, _main, _main_rx, child, child_rx) = lifecycle();

        let options = WindowOptions {
            width: Some(800),
            height: Some(600),
        };
        lifecycle.show_child(options, json!({"component": "go-live"}));

        let surface = child.surface_state();
        assert_eq!(surface.size, Some((800, 600)));
        assert!(surface.centered);
        assert!(surface.visible);
        assert_eq!(
            child_rx.try_recv().unwrap(),
            WindowMessage::SetContents(json!({"component": "go-live"}))
        );
    }

    #[test]
    fn test_show_child_without_dimensions_keeps_size() {
        let (mut lifecycle, _main, _main_rx, child, _child_rx) = lifecycle();

        lifecycle.show_child(
            WindowOptions {
                width: Some(640),
                height: None,
            },
            json!(null),
        );

        let surface = child.surface_state();
        assert_eq!(surface.size, None);
        assert!(!surface.centered);
        assert!(surface.visible);
    }

    #[test]
    fn test_repeated_show_child_is_last_write_wins() {
        let (mut lifecycle, _main, _main_rx, child, child_rx) = lifecycle();

        lifecycle.show_child(
            WindowOptions {
                width: Some(400),
                height: Some(300),
            },
            json!({"component": "a"}),
        );
        lifecycle.show_child(
            WindowOptions {
                width: Some(800),
                height: Some(600),
            },
            json!({"component": "b"}),
        );

        assert_eq!(child.surface_state().size, Some((800, 600)));
        let contents: Vec<WindowMessage> = child_rx.try_iter().collect();
        assert_eq!(
            contents.last(),
            Some(&WindowMessage::SetContents(json!({"component": "b"})))
        );
    }

    #[test]
    fn test_unknown_window_close_proceeds() {
        let (mut lifecycle, _main, _main_rx, _child, _child_rx) = lifecycle();
        assert_eq!(
            lifecycle.on_close_requested(WindowId(99)),
            CloseAction::Proceed
        );
    }
}
