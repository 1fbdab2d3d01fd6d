//! Use Cases Layer: LargeInt Operations
//!
//! The operation set the host invokes on stored values. Every operation takes
//! the store and a primary handle, resolves it, and either mutates the value
//! in place, returns a scalar derived from it, or renders it as text.
//!
//! ## Overview
//!
//! Operations are stateless; all state lives in the
//! [`ValueStore`](infrastructure_value_store::ValueStore). Binary operations
//! accept an [`Operand`], which is either a literal or another handle, so each
//! operation covers both the literal and the handle variant.
//!
//! On any error the primary value is left exactly as it was.
//!
//! ## Modules
//!
//! - **[`operand`](operand/index.html)**: Literal-or-handle second operand
//! - **[`assign`](assign/index.html)**: `set`, `set_from`, `set_from_text`
//! - **[`export`](export/index.html)**: Reads, range checks, parity, text rendering
//! - **[`arithmetic`](arithmetic/index.html)**: In-place arithmetic, roots and powers
//! - **[`compare`](compare/index.html)**: Signed and magnitude comparisons

pub mod arithmetic;
pub mod assign;
pub mod compare;
pub mod export;
pub mod operand;

pub use operand::Operand;

use infrastructure_value_store::StoreError;

/// Result of an operation on stored values
pub type OpResult<T> = Result<T, StoreError>;

/// The LargeInt operation set
///
/// Associated functions only; the operations are grouped by concern across
/// the modules of this crate.
pub struct LargeIntOps;
