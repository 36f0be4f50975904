//! A minimal greeting library.
//!
//! Silent by default: the crate emits `tracing` diagnostics but installs no
//! subscriber on its own. A host makes them visible with [`setup_logging`].

pub mod greeter;
pub mod utils;

pub use greeter::Greeter;
pub use utils::logger::{setup_logging, LevelFilter, Sink, LOG_TARGET};
