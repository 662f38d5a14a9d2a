//! The opaque call surface of the native media engine.

use serde_json::Value;

use crate::error::NativeError;

/// Dynamic, name-keyed call surface of the native engine.
///
/// Methods are addressed by name with positional JSON arguments. The
/// engine is co-located and answers synchronously; `Ok(None)` means
/// the call completed without producing a value.
pub trait NativeSurface: Send + Sync {
    /// Invoke `method` with positional `args`.
    fn call(&self, method: &str, args: &[Value]) -> Result<Option<Value>, NativeError>;
}
