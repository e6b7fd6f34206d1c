//! Fallback for platforms without a notification listener service
//!
//! Permission is never granted and the settings screen does not exist, so
//! `start_listening` always fails with `PermissionDenied`.

use tracing::info;

use crate::ports::{PermissionRegistry, SettingsLauncher};

#[derive(Clone, Copy, Debug, Default)]
pub struct UnsupportedPlatform;

impl PermissionRegistry for UnsupportedPlatform {
    fn is_listener_enabled(&self) -> bool {
        false
    }
}

impl SettingsLauncher for UnsupportedPlatform {
    fn open_listener_settings(&self) {
        info!("Notification listener settings are not available on this platform");
    }
}
