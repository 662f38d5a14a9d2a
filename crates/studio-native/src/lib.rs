//! Opaque call surface of the native media engine.
//!
//! The engine is an external collaborator: the studio addresses it by
//! method name with positional JSON arguments and never inspects what
//! the calls do. This crate defines that surface, its error type, the
//! phased startup sequence, and a recording stub for headless runs and
//! tests.

mod bootstrap;
mod error;
mod stub;
mod surface;

pub use bootstrap::{bootstrap, BootPhase};
pub use error::NativeError;
pub use stub::{CallRecord, StubSurface};
pub use surface::NativeSurface;
