//! Infrastructure Layer: Value Store
//!
//! Owns every `LargeInt` the host can reach and hands out opaque handles for
//! them.
//!
//! ## Overview
//!
//! The host never holds a native value, only a handle that fits in one cell.
//! Handles are generation-tagged slot indices: once a cell is destroyed its
//! slot may be reused, but the old handle carries the old generation and is
//! rejected with [`StoreError::InvalidHandle`] instead of reaching the new
//! value.
//!
//! ## Modules
//!
//! - **[`handle`](handle/index.html)**: Handle encoding and the `INVALID_HANDLE` sentinel
//! - **[`value_store`](value_store/index.html)**: The locked slot table and its operations
//! - **[`config`](config/index.html)**: Store limits
//!
//! ## Concurrency
//!
//! A single mutex guards the slot table for the full duration of each
//! operation, including two-handle operations, so no value is ever read while
//! it is being mutated.

pub mod config;
pub mod handle;
pub mod value_store;

pub use config::StoreConfig;
pub use handle::{Handle, INVALID_HANDLE};
pub use value_store::{global_store, StoreError, ValueStore};
