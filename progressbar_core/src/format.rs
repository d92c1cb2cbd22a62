//! Bar style configuration
//!
//! A [`BarFormat`] holds the three characters framing and filling the bar,
//! e.g. `|=|` renders `|====    |` and `<->` renders `<----    >`. The
//! string form is exactly three characters; anything else is rejected at
//! construction. The type derives serde so applications can keep their bar
//! style in configuration files alongside their own settings.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Characters for the beginning, filling and end of the bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarFormat {
    /// Left border character
    pub begin: char,
    /// Fill character for completed pieces
    pub fill: char,
    /// Right border character
    pub end: char,
}

impl BarFormat {
    /// Create a format from explicit border and fill characters
    pub fn new(begin: char, fill: char, end: char) -> Self {
        Self { begin, fill, end }
    }
}

impl Default for BarFormat {
    fn default() -> Self {
        Self::new('|', '=', '|')
    }
}

impl FromStr for BarFormat {
    type Err = Error;

    /// Parse a three-character format string: begin, fill, end
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(begin), Some(fill), Some(end), None) => Ok(Self::new(begin, fill, end)),
            _ => Err(Error::invalid_format(s.chars().count())),
        }
    }
}
