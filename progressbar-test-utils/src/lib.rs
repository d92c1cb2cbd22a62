//! Test utilities for the progressbar crates
//!
//! This crate provides a mock terminal with frame capture and a builder
//! for constructing bars against it, so rendering tests can fix the column
//! count and assert frames bit-exactly.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::TestBarBuilder;
pub use mocks::{FrameLog, MockTerminal};
