//! Builders for test bar construction

pub mod bar;

pub use bar::TestBarBuilder;
