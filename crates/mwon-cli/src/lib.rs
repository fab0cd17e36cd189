//! Library surface of the `mwon` binary, exposed for integration tests.

pub mod cli;
pub mod commands;
pub mod output;
pub mod utils;
