//! CLI command implementations.

pub mod poll;
pub mod send;
pub mod status;
