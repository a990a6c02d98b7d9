//! Barrier Helpers Module
//!
//! Chart barrier utilities used by the trading UI:
//! - `errors` - Error type shared by the barrier helpers
//! - `format` - Display strings for barrier offsets
//! - `remove` - In-place removal of a barrier by key

pub mod errors;
pub mod format;
pub mod remove;

// Re-export commonly used items for convenience
pub use errors::BarrierError;
pub use format::{
    barriers_to_string, format_barrier, format_decimal_barrier, try_barriers_to_string,
};
pub use remove::remove_barrier;
