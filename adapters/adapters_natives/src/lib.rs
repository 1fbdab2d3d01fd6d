//! Adapters Layer: Script Natives
//!
//! Exposes the LargeInt operation set to scripts as natives: named functions
//! taking and returning fixed-width cells.
//!
//! ## Overview
//!
//! A native receives the value store, a view of the calling script's memory
//! and its cell parameters. Handles travel as cells; strings and output
//! buffers travel as script addresses resolved through [`ScriptMemory`].
//! Natives are looked up by name in a static table, and [`dispatch`] turns
//! every failure into the falsy `0` the script expects.
//!
//! ## Modules
//!
//! - **[`natives`](natives/index.html)**: The native implementations
//! - **[`registry`](registry/index.html)**: Name-to-native table, `invoke` and `dispatch`
//! - **[`memory`](memory/index.html)**: `ScriptMemory` and the in-process `CellHeap`
//! - **[`plugin`](plugin/index.html)**: Plugin identity and load / unload hooks
//! - **[`error`](error/index.html)**: `NativeError`
//!
//! ## See Also
//!
//! - [`usecases_large_int_ops`](../usecases_large_int_ops/index.html): The operations behind each native

pub mod error;
pub mod memory;
pub mod natives;
pub mod plugin;
pub mod registry;

pub use error::NativeError;
pub use memory::{CellHeap, ScriptMemory};
pub use natives::BigIntNatives;
pub use plugin::{Plugin, PluginInfo, PLUGIN_INFO};
pub use registry::{dispatch, invoke, lookup, natives, NativeEntry, NativeFn};
