pub mod barrier;

pub use barrier::{keys, Barrier};
