//! Shared types for the command-line runner

pub mod error;
