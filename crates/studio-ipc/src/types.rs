//! Common types used across hub messages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier the hub process assigns to a window. Stable for the
/// lifetime of the window's surface.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role of a window within the studio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowRole {
    /// The primary window. Its close tears down the whole application,
    /// and it is the source of truth for the shared store.
    Main,

    /// A reusable secondary window, hidden rather than destroyed.
    Child,
}

/// One opaque store change. The hub routes these but never interprets
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation(pub serde_json::Value);

/// Opaque startup payload delivered to a child window when it is shown.
pub type StartupOptions = serde_json::Value;

/// Sizing options for showing the child window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOptions {
    /// Desired width in pixels.
    pub width: Option<u32>,

    /// Desired height in pixels.
    pub height: Option<u32>,
}

impl WindowOptions {
    /// Explicit dimensions, if both were supplied. The window is only
    /// resized and re-centered when this returns `Some`.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }
}

/// Result of a proxied native call as seen by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiValue {
    /// A concrete value produced by the native surface.
    Value(serde_json::Value),

    /// The call completed without producing a value. The transport
    /// cannot represent an empty result, so it is normalized to this
    /// sentinel.
    NoValue,
}

impl ApiValue {
    /// Normalize a raw native result.
    pub fn from_native(raw: Option<serde_json::Value>) -> Self {
        match raw {
            Some(value) => Self::Value(value),
            None => Self::NoValue,
        }
    }

    /// Returns true for the empty-result sentinel.
    pub fn is_no_value(&self) -> bool {
        matches!(self, Self::NoValue)
    }
}

/// Process-wide unique identifier for store entities. Never reused
/// within a process lifetime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct UniqueId(pub u64);

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_value_normalizes_empty_results() {
        assert_eq!(ApiValue::from_native(None), ApiValue::NoValue);
        assert!(ApiValue::from_native(None).is_no_value());
    }

    #[test]
    fn test_api_value_keeps_concrete_values() {
        let value = ApiValue::from_native(Some(json!({"fps": 60})));
        assert_eq!(value, ApiValue::Value(json!({"fps": 60})));
        assert!(!value.is_no_value());
    }

    #[test]
    fn test_window_options_dimensions_requires_both() {
        let both = WindowOptions {
            width: Some(800),
            height: Some(600),
        };
        assert_eq!(both.dimensions(), Some((800, 600)));

        let partial = WindowOptions {
            width: Some(800),
            height: None,
        };
        assert_eq!(partial.dimensions(), None);
        assert_eq!(WindowOptions::default().dimensions(), None);
    }
}
