//! dirtree - Render a directory subtree as a tree diagram
//!
//! This crate provides functionality for:
//! - Walking a directory and producing `tree`-style lines with box-drawing connectors
//! - Filtering files by extension
//! - Writing the result to the console (colored), a text file or JSON

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod tree;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, TreeError};
pub use tree::{render, ExtensionFilter, RenderLine};
