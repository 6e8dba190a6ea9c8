//! Command implementations
//!
//! Each command takes the client plus explicit input/output handles, so
//! tests drive them with scripted clients and in-memory buffers.

pub mod attach;
pub mod detach;
pub mod list;

#[cfg(test)]
pub(crate) mod testutil;
