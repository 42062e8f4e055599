//! Library half of the `detmat` binary: configuration, matrix input sources
//! and the command implementations, kept here so they can be tested without
//! spawning the process.
pub mod commands;
pub mod config;
pub mod input;
pub mod util;
