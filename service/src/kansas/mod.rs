//! Kansas state-senate district lookup.
//!
//! Serves district and representative detail by district number and
//! resolves geocoded addresses to their senate district.

pub mod districts;
pub mod geo;
pub mod http;
pub mod types;
