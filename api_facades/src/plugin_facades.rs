//! Plugin Facades
//!
//! C-ABI lifecycle entry points for hosts that load the plugin as a shared
//! library.

use adapters_natives::{Plugin, PluginInfo};

/// Plugin load entry point
///
/// Returns the number of natives the plugin provides.
#[no_mangle]
pub extern "C" fn pawn_bigint_load() -> i32 {
    Plugin::load().len() as i32
}

/// Plugin unload entry point
///
/// Frees every value still held by scripts and returns how many there were.
#[no_mangle]
pub extern "C" fn pawn_bigint_unload() -> i32 {
    i32::try_from(Plugin::unload()).unwrap_or(i32::MAX)
}

/// Plugin version as `0xMMmm`
#[no_mangle]
pub extern "C" fn pawn_bigint_version() -> u32 {
    Plugin::info().version
}

/// Plugin identity
pub fn plugin_info() -> PluginInfo {
    Plugin::info()
}
