//! Lifecycle management subsystem.
//!
//! Startup is linear (load config → validate → bind → serve). Shutdown is
//! coordinated through a broadcast channel so the server, Ctrl+C handling,
//! and tests can stop the relay without killing the process.

pub mod shutdown;

pub use shutdown::Shutdown;
