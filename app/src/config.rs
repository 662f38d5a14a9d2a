//! Startup configuration from the environment.

use std::env;

/// Flags read once at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppConfig {
    /// Production build: the update check runs before any window is
    /// created.
    pub production: bool,

    /// Force the update check even outside production.
    pub force_auto_update: bool,
}

impl AppConfig {
    /// Read the flags from the process environment.
    pub fn from_env() -> Self {
        Self {
            production: env::var("STUDIO_ENV")
                .map(|value| value == "production")
                .unwrap_or(false),
            force_auto_update: env::var("STUDIO_FORCE_AUTO_UPDATE").is_ok(),
        }
    }

    /// Whether the packaging layer's update check should run before
    /// the window hierarchy is created.
    pub fn update_check_enabled(&self) -> bool {
        self.production || self.force_auto_update
    }
}
