//! Label print server library.
//!
//! Exposes the building blocks (label rendering, sheet reading, HTTP
//! server) so integration tests and the binary entrypoint can both access
//! them.

pub mod label;
pub mod server;
pub mod sheet;
