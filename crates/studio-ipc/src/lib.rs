//! Typed window<->hub messages for the studio.
//!
//! This crate defines all the message types used for communication
//! between renderer windows and the coordination hub, split into two
//! channel styles: a fire-and-forget event channel and a blocking
//! request/response call channel.

mod commands;
mod events;
mod state;
mod types;

pub use commands::{HubCall, HubEvent};
pub use events::WindowMessage;
pub use state::{ChildWindowState, CloseAction, MainWindowState};
pub use types::{ApiValue, Mutation, StartupOptions, UniqueId, WindowId, WindowOptions, WindowRole};

use crossbeam_channel::{Receiver, Sender};

/// Channel capacity for fire-and-forget events (window → hub).
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Channel capacity for blocking calls (window → hub).
pub const CALL_CHANNEL_CAPACITY: usize = 64;

/// Creates a bounded event channel.
pub fn event_channel() -> (Sender<HubEvent>, Receiver<HubEvent>) {
    crossbeam_channel::bounded(EVENT_CHANNEL_CAPACITY)
}

/// Creates a bounded call channel.
pub fn call_channel() -> (Sender<HubCall>, Receiver<HubCall>) {
    crossbeam_channel::bounded(CALL_CHANNEL_CAPACITY)
}

/// Creates the reply channel for one blocking call. The hub answers
/// exactly once, so a single slot suffices.
pub fn reply_channel<T>() -> (Sender<T>, Receiver<T>) {
    crossbeam_channel::bounded(1)
}
