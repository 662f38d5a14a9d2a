//! In-process stand-in for the native engine.

use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

use crate::error::NativeError;
use crate::surface::NativeSurface;

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRecord {
    /// Method name as invoked.
    pub method: String,

    /// Positional arguments as received.
    pub args: Vec<Value>,
}

/// Accepts every call, records it, and produces no value.
///
/// Used by the headless binary and by hub tests. Real deployments
/// provide the FFI-backed surface instead.
#[derive(Debug, Default)]
pub struct StubSurface {
    calls: Mutex<Vec<CallRecord>>,
}

impl StubSurface {
    /// Create an empty stub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Invocations so far, in call order.
    pub fn recorded(&self) -> Vec<CallRecord> {
        self.calls.lock().clone()
    }
}

impl NativeSurface for StubSurface {
    fn call(&self, method: &str, args: &[Value]) -> Result<Option<Value>, NativeError> {
        debug!(method, "native call");
        self.calls.lock().push(CallRecord {
            method: method.to_string(),
            args: args.to_vec(),
        });
        Ok(None)
    }
}
