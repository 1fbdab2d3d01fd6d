//! API Facades Layer
//!
//! Provides the BigInt natives as plain functions with their original
//! cell-typed signatures, plus the plugin's C-ABI lifecycle entry points.
//!
//! All facades operate on the process-wide value store and call the inner
//! layers; no logic lives here beyond argument decoding.

pub mod bigint_facades;
pub mod plugin_facades;

// Re-export main facade functions
pub use bigint_facades::*;
pub use plugin_facades::*;
