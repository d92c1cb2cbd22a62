//! Self-refreshing terminal progress bar
//!
//! Renders a single line to stderr with a label, a filled/unfilled bar and
//! an ETA estimate, overwriting itself on every update and adapting to the
//! current terminal width. The bar and ETA have layout priority; the label
//! is truncated, down to nothing, before the bar shrinks below its floor.
//!
//! ```no_run
//! use progressbar_core::ProgressBar;
//!
//! let mut bar = ProgressBar::new("Loading", 100);
//! for _ in 0..100 {
//!     // ... one unit of work ...
//!     bar.inc();
//! }
//! bar.finish();
//! ```

pub mod bar;
pub mod error;
pub mod eta;
pub mod format;
pub mod layout;
pub mod renderer;
pub mod terminal;

// Re-export main types
pub use bar::ProgressBar;
pub use error::{Error, Result};
pub use eta::TimeComponents;
pub use format::BarFormat;
pub use terminal::{StderrTerminal, Terminal, stderr_is_terminal};
