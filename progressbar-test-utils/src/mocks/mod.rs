//! Mock implementations for rendering tests

pub mod terminal;

pub use terminal::{FrameLog, MockTerminal};
