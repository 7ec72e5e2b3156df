//! JSON runtime configuration for the demo tooling.

pub mod page;

pub use page::{load_config, OutputConfig, RuntimeConfig};
