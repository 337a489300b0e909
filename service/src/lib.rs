#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod config;
pub mod context;
pub mod http;
pub mod kansas;
pub mod legislators;
pub mod openapi;
