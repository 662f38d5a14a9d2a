//! Multi-window coordination core for the studio.
//!
//! The hub owns the renderer windows, relays the shared store between
//! them, proxies native-engine calls, and drives window lifecycle.
//! Everything runs on one hub thread: handlers run to completion, so
//! the registry and call dispatch need no synchronization.

mod client;
mod hub;
mod ids;
mod lifecycle;
mod proxy;
mod registry;
mod sync;
mod window;

pub use client::{CallError, HubClient, HubGone};
pub use hub::Hub;
pub use ids::IdAllocator;
pub use lifecycle::WindowLifecycle;
pub use proxy::CallProxy;
pub use registry::WindowRegistry;
pub use sync::StateSync;
pub use window::{ChannelWindow, StaleHandle, SurfaceState, Window, WindowRef};
