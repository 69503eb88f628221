//! Command-line arguments for the `stardrift` binary.

pub mod args;
