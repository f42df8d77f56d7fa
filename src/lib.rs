// fieldcheck - composable field validation
//
// Declare fields, attach checks, and collect every failure by field name.

// Re-export core functionality
pub use fieldcheck_core::*;

// Re-export the logger
#[cfg(feature = "log")]
pub use fieldcheck_log;

