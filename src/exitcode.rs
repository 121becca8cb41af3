//! Process exit codes
//!
//! bazaar only distinguishes success from failure.

/// Successful termination
pub const OK: i32 = 0;

/// Any reported failure (usage error, unknown command, handler error)
pub const FAILURE: i32 = 1;
