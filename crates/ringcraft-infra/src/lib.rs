//! Infrastructure implementations for Ringcraft.
//!
//! Concrete adapters for the ports defined in `ringcraft-core`: an
//! in-memory session store, a SQLite-backed settings store, and the HTTP
//! gateway to the builder-data backend, plus the service configuration
//! loader.

pub mod config;
pub mod gateway;
pub mod session;
pub mod sqlite;
