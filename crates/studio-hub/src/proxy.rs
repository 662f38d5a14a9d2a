//! Native-call proxy.
//!
//! Windows address the native engine by method name; the proxy forwards
//! those calls verbatim, except for a small table of virtual methods
//! resolved here. Native errors pass through to the caller unmodified.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use studio_ipc::ApiValue;
use studio_native::{NativeError, NativeSurface};

/// Composite operations executed inside the hub as one atomic step.
///
/// These look like ordinary native calls to the renderer but are
/// resolved locally so their underlying calls cannot interleave with
/// any other request. Used sparingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VirtualMethod {
    /// Position and scale must change together or the display output
    /// judders.
    SetSourcePositionAndScale,
}

impl VirtualMethod {
    fn parse(method: &str) -> Option<Self> {
        match method {
            "Content_setSourcePositionAndScale" => Some(Self::SetSourcePositionAndScale),
            _ => None,
        }
    }
}

/// Forwards named calls from windows to the native surface, resolving
/// virtual methods locally.
pub struct CallProxy {
    surface: Arc<dyn NativeSurface>,
}

impl CallProxy {
    /// Create a proxy over the given native surface.
    pub fn new(surface: Arc<dyn NativeSurface>) -> Self {
        Self { surface }
    }

    /// Invoke `method` with positional `args`.
    ///
    /// Empty native results normalize to [`ApiValue::NoValue`]; errors
    /// are whatever the native layer raised.
    pub fn invoke(&self, method: &str, args: &[Value]) -> Result<ApiValue, NativeError> {
        debug!(method, "api call");

        if let Some(virtual_method) = VirtualMethod::parse(method) {
            self.invoke_virtual(virtual_method, args)?;
            return Ok(ApiValue::NoValue);
        }

        let raw = self.surface.call(method, args)?;
        Ok(ApiValue::from_native(raw))
    }

    fn invoke_virtual(&self, method: VirtualMethod, args: &[Value]) -> Result<(), NativeError> {
        match method {
            VirtualMethod::SetSourcePositionAndScale => {
                // args: (source, x, y, scale_x, scale_y)
                let source = arg(args, 0);
                self.surface.call(
                    "Content_setSourcePosition",
                    &[source.clone(), arg(args, 1), arg(args, 2)],
                )?;
                self.surface.call(
                    "Content_setSourceScaling",
                    &[source, arg(args, 3), arg(args, 4)],
                )?;
                Ok(())
            }
        }
    }
}

/// Missing positional arguments forward as nulls, matching what the
/// native surface sees from a renderer that under-supplied them.
fn arg(args: &[Value], index: usize) -> Value {
    args.get(index).cloned().unwrap_or(Value::Null)
}
