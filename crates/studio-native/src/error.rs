//! Native-layer errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised by the native engine surface.
///
/// The hub carries these back to the calling window unmodified; there
/// is no wrapping or translation at the hub boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum NativeError {
    /// The method name matched nothing on the native surface.
    #[error("unknown native method: {0}")]
    UnknownMethod(String),

    /// The native call itself failed.
    #[error("native call {method} failed: {message}")]
    CallFailed {
        /// Method that was being invoked.
        method: String,

        /// Whatever the native layer reported.
        message: String,
    },
}
