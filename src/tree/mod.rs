mod entry;
mod filter;
mod line;
mod lister;
mod renderer;
mod style;

pub use entry::{DirectoryEntry, EntryKind};
pub use filter::ExtensionFilter;
pub use line::{Connector, LineKind, RenderLine, PIPE_PREFIX, SPACE_PREFIX};
pub use lister::{DirectoryLister, FsLister};
pub use renderer::{ensure_directory, render, render_with, LineSink};
pub use style::{classify, FileCategory};
