//! Observability: tracing subscriber setup for the host shim.

pub mod init;

pub use init::init_tracing;
