//! Destinations for rendered trees: styled console, plain text file, JSON.

mod console;
mod file;
mod json;

use std::io::IsTerminal;

use crate::error::Result;
use crate::tree::LineSink;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use json::JsonSink;

/// Line written after the tree to mark completion
pub const END_MARKER: &str = "└─── Done ────";

/// A sink that needs a final step once the whole tree has been pushed.
pub trait TreeOutput: LineSink {
    /// Write any trailer and flush
    fn finish(&mut self) -> Result<()>;
}

/// When to emit ANSI colors on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_str(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        }
    }

    /// Decide for stdout, honoring `NO_COLOR` in auto mode
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_from_str() {
        assert_eq!(ColorMode::from_str("always"), ColorMode::Always);
        assert_eq!(ColorMode::from_str("NEVER"), ColorMode::Never);
        assert_eq!(ColorMode::from_str("auto"), ColorMode::Auto);
        assert_eq!(ColorMode::from_str("bogus"), ColorMode::Auto);
    }

    #[test]
    fn test_explicit_modes() {
        assert!(ColorMode::Always.enabled());
        assert!(!ColorMode::Never.enabled());
    }
}
