//! Studio coordination process.
//!
//! Bootstraps the native engine, creates the window hierarchy, and
//! runs the hub loop on the main thread. Renderer shells are spawned
//! per window; in this headless build they register their stores,
//! drain their inboxes, and complete the quiesce handshake on demand.

mod config;

use std::sync::Arc;
use std::thread;

use anyhow::Context;
use crossbeam_channel::Receiver;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studio_hub::{CallProxy, ChannelWindow, Hub, HubClient, WindowLifecycle};
use studio_ipc::{call_channel, event_channel, WindowId, WindowMessage, WindowRole};
use studio_native::StubSurface;

use crate::config::AppConfig;

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studio=debug,studio_hub=debug,studio_native=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env();
    info!(?config, "studio starting");

    if config.update_check_enabled() {
        // The update flow itself belongs to the packaging layer; it
        // runs before any window exists.
        info!("update check requested before startup");
    }

    // The engine must be fully up before any window can issue calls.
    let surface = Arc::new(StubSurface::new());
    studio_native::bootstrap(surface.as_ref()).context("native engine bootstrap failed")?;

    let (main_window, main_inbox) = ChannelWindow::create(WindowId(1), WindowRole::Main);
    let (child_window, child_inbox) = ChannelWindow::create(WindowId(2), WindowRole::Child);

    let (event_tx, event_rx) = event_channel();
    let (call_tx, call_rx) = call_channel();
    let client = HubClient::new(event_tx, call_tx);

    let mut lifecycle = WindowLifecycle::new(main_window, child_window.clone());
    lifecycle.show_main();
    // The child window is pre-created hidden so that showing it later
    // reuses a live surface.
    debug!(visible = child_window.surface_state().visible, "child window ready");

    spawn_window_shell("main", WindowId(1), main_inbox, client.clone());
    spawn_window_shell("child", WindowId(2), child_inbox, client);

    let proxy = CallProxy::new(surface);
    Hub::new(event_rx, call_rx, lifecycle, proxy).run();

    info!("studio stopped");
    Ok(())
}

/// Stand-in for a renderer process: registers its store, then drains
/// the window inbox. On a quiesce request it finishes the close
/// handshake so the hub can tear the application down.
fn spawn_window_shell(
    name: &'static str,
    id: WindowId,
    inbox: Receiver<WindowMessage>,
    client: HubClient,
) {
    thread::spawn(move || {
        if client.register_store(id).is_err() {
            return;
        }

        for message in inbox {
            debug!(window = name, ?message, "window message");

            if message == WindowMessage::Shutdown {
                // Quiesced; ask again so the close proceeds for real.
                let _ = client.request_close(id);
                let _ = client.window_closed(id);
                break;
            }
        }
    });
}
