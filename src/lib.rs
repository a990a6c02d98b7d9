// Library Crate Root
// lib.rs

// Barrier helpers for the trading chart: display formatting and removal by key.
// The barrier_format binary goes through this file like an external crate.
pub mod barriers;
pub mod config;
pub mod models;

// pub use = re-export at crate root
pub use barriers::{
    barriers_to_string, format_barrier, format_decimal_barrier, remove_barrier,
    try_barriers_to_string, BarrierError,
};
pub use config::BarrierDisplayConfig;
pub use models::{keys, Barrier};
