//! Command implementations for the parbench CLI
//!
//! Each command lives in its own module with its clap arguments and an
//! `execute` function that receives the fully merged configuration.

pub mod all;
pub mod info;
pub mod minmax;
pub mod sort;
