//! National legislator roster and name lookup.
//!
//! Loads the legislator roster from a YAML snapshot at startup and serves
//! single and batch name lookups over it.

pub mod http;
pub mod loader;
pub mod matcher;
pub mod types;
