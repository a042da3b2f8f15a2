//! Observability setup for Ringcraft.

pub mod tracing_setup;
