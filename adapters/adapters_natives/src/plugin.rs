//! Plugin Lifecycle
//!
//! Identity reported to the host, and the load / unload hooks around the
//! process-wide value store.

use std::fmt;

use infrastructure_value_store::global_store;
use tracing::info;

use crate::registry::{self, NativeEntry};

/// Plugin identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginInfo {
    /// Name reported to the host
    pub name: &'static str,
    /// Version as `0xMMmm`
    pub version: u32,
}

impl PluginInfo {
    /// Major version component
    pub fn major(&self) -> u32 {
        self.version >> 8
    }

    /// Minor version component
    pub fn minor(&self) -> u32 {
        self.version & 0xff
    }
}

impl fmt::Display for PluginInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}.{}", self.name, self.major(), self.minor())
    }
}

/// Identity of this plugin
pub const PLUGIN_INFO: PluginInfo = PluginInfo {
    name: "Pawn-BigInt",
    version: 0x0100,
};

/// Plugin lifecycle hooks
pub struct Plugin;

impl Plugin {
    /// Prepare the native table and return it for registration with the host
    pub fn load() -> &'static [NativeEntry] {
        registry::init();
        let natives = registry::natives();
        info!(plugin = %PLUGIN_INFO, natives = natives.len(), "plugin loaded");
        natives
    }

    /// Release every value still held by scripts
    ///
    /// Returns how many cells were freed. Handles issued before the call are
    /// invalid afterwards.
    pub fn unload() -> usize {
        let released = global_store().clear();
        info!(plugin = %PLUGIN_INFO, released, "plugin unloaded");
        released
    }

    /// Plugin identity
    pub fn info() -> PluginInfo {
        PLUGIN_INFO
    }
}
