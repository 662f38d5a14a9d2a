//! Window handles as seen by the hub.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;
use thiserror::Error;

use studio_ipc::{WindowId, WindowMessage, WindowRole};

/// The target window's surface is gone. Broadcasts to stale handles
/// are dropped silently; this is an expected close race, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("window handle is stale")]
pub struct StaleHandle;

/// Live handle to one window: message delivery plus the surface
/// operations the hub needs.
pub trait Window: Send + Sync {
    /// Process-assigned identifier, stable for the window's lifetime.
    fn id(&self) -> WindowId;

    /// Role of the window.
    fn role(&self) -> WindowRole;

    /// Deliver a message to the window content.
    fn send(&self, message: WindowMessage) -> Result<(), StaleHandle>;

    /// Resize the surface.
    fn set_size(&self, width: u32, height: u32);

    /// Center the surface on screen.
    fn center(&self);

    /// Make the surface visible.
    fn show(&self);

    /// Hide the surface without destroying it.
    fn hide(&self);
}

/// Shared reference to a window handle.
pub type WindowRef = Arc<dyn Window>;

/// Observable surface geometry and visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceState {
    /// Last explicit size applied, if any.
    pub size: Option<(u32, u32)>,

    /// Whether the surface was centered after its last resize.
    pub centered: bool,

    /// Whether the surface is currently visible.
    pub visible: bool,
}

/// Channel-backed window handle.
///
/// The far end of the inbox lives in the renderer shell; once that
/// receiver is dropped the handle is stale and sends fail.
pub struct ChannelWindow {
    id: WindowId,
    role: WindowRole,
    inbox: Sender<WindowMessage>,
    surface: Mutex<SurfaceState>,
}

impl ChannelWindow {
    /// Create a handle plus the receiver the renderer shell drains.
    ///
    /// The inbox is unbounded: deliveries are fire-and-forget and must
    /// never block the hub loop behind a slow renderer.
    pub fn create(id: WindowId, role: WindowRole) -> (Arc<Self>, Receiver<WindowMessage>) {
        let (inbox, rx) = crossbeam_channel::unbounded();
        let window = Arc::new(Self {
            id,
            role,
            inbox,
            surface: Mutex::new(SurfaceState::default()),
        });
        (window, rx)
    }

    /// Snapshot of the surface geometry and visibility.
    pub fn surface_state(&self) -> SurfaceState {
        *self.surface.lock()
    }
}

impl Window for ChannelWindow {
    fn id(&self) -> WindowId {
        self.id
    }

    fn role(&self) -> WindowRole {
        self.role
    }

    fn send(&self, message: WindowMessage) -> Result<(), StaleHandle> {
        self.inbox.send(message).map_err(|_| StaleHandle)
    }

    fn set_size(&self, width: u32, height: u32) {
        let mut surface = self.surface.lock();
        surface.size = Some((width, height));
        surface.centered = false;
    }

    fn center(&self) {
        self.surface.lock().centered = true;
    }

    fn show(&self) {
        self.surface.lock().visible = true;
    }

    fn hide(&self) {
        self.surface.lock().visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_reaches_the_shell() {
        let (window, rx) = ChannelWindow::create(WindowId(1), WindowRole::Main);

        window.send(WindowMessage::Shutdown).unwrap();
        assert_eq!(rx.recv().unwrap(), WindowMessage::Shutdown);
    }

    #[test]
    fn test_send_to_stale_handle_fails() {
        let (window, rx) = ChannelWindow::create(WindowId(1), WindowRole::Child);
        drop(rx);

        assert_eq!(window.send(WindowMessage::CloseWindow), Err(StaleHandle));
    }

    #[test]
    fn test_surface_state_tracks_operations() {
        let (window, _rx) = ChannelWindow::create(WindowId(2), WindowRole::Child);

        window.set_size(800, 600);
        window.center();
        window.show();
        assert_eq!(
            window.surface_state(),
            SurfaceState {
                size: Some((800, 600)),
                centered: true,
                visible: true,
            }
        );

        window.hide();
        assert!(!window.surface_state().visible);
    }
}
