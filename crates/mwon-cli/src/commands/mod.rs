//! Command implementations for the mwon CLI

mod convert;

pub use convert::{execute as convert, load_input};
