pub mod completions;
pub mod interactive;
pub mod render;
