use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TreeError};

use super::entry::DirectoryEntry;
use super::filter::ExtensionFilter;
use super::line::{Connector, RenderLine};
use super::lister::{DirectoryLister, FsLister};

/// Destination for rendered lines, fed in traversal order.
pub trait LineSink {
    fn push_line(&mut self, line: RenderLine) -> Result<()>;
}

impl LineSink for Vec<RenderLine> {
    fn push_line(&mut self, line: RenderLine) -> Result<()> {
        self.push(line);
        Ok(())
    }
}

/// Pending traversal step. The stack is popped from the end, so the steps of
/// one directory are pushed in reverse.
#[derive(Debug)]
enum Work {
    /// Emit a finished line
    Emit(RenderLine),
    /// Emit a directory's own line, then list and schedule its children
    Descend {
        path: PathBuf,
        line: RenderLine,
        child_prefix: String,
    },
    /// Emit the closing line of a subtree
    Close(String),
}

/// Render the tree under `root` from the live filesystem.
///
/// Fails with [`TreeError::NotADirectory`] if `root` is missing or is not a
/// directory. Symlinks below the root are listed but never followed.
pub fn render(root: &Path, filter: &ExtensionFilter) -> Result<Vec<RenderLine>> {
    ensure_directory(root)?;

    let mut lines = Vec::new();
    render_with(root, filter, &FsLister::new(), &mut lines)?;
    Ok(lines)
}

/// Check that `root` exists and is a directory (following symlinks).
pub fn ensure_directory(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        _ => Err(TreeError::NotADirectory(root.to_path_buf())),
    }
}

/// Render the tree under `root` using `lister`, streaming lines into `sink`.
///
/// A subdirectory that cannot be listed for lack of permission keeps its own
/// line but contributes no children and no closing line. Any other listing
/// failure, including one on the root, aborts the render.
pub fn render_with<L, S>(
    root: &Path,
    filter: &ExtensionFilter,
    lister: &L,
    sink: &mut S,
) -> Result<()>
where
    L: DirectoryLister + ?Sized,
    S: LineSink + ?Sized,
{
    sink.push_line(RenderLine::head(&root.to_string_lossy()))?;

    tracing::debug!(path = %root.display(), "Listing directory");
    let entries = lister.list(root).map_err(|source| TreeError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut stack = Vec::new();
    schedule(&mut stack, entries, "", filter);

    while let Some(work) = stack.pop() {
        match work {
            Work::Emit(line) => sink.push_line(line)?,
            Work::Descend {
                path,
                line,
                child_prefix,
            } => {
                sink.push_line(line)?;

                tracing::debug!(path = %path.display(), "Listing directory");
                match lister.list(&path) {
                    Ok(children) => {
                        stack.push(Work::Close(child_prefix.clone()));
                        schedule(&mut stack, children, &child_prefix, filter);
                    }
                    Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                        tracing::debug!(
                            path = %path.display(),
                            "Permission denied, skipping subtree"
                        );
                    }
                    Err(source) => return Err(TreeError::Io { path, source }),
                }
            }
            Work::Close(prefix) => sink.push_line(RenderLine::closing(&prefix))?,
        }
    }

    Ok(())
}

/// Push the steps for one directory's children onto the stack.
fn schedule(
    stack: &mut Vec<Work>,
    mut entries: Vec<DirectoryEntry>,
    prefix: &str,
    filter: &ExtensionFilter,
) {
    // Stable: listing order survives inside each group
    entries.sort_by_key(DirectoryEntry::is_dir);

    let count = entries.len();
    let start = stack.len();

    for (index, entry) in entries.into_iter().enumerate() {
        // Position counts filtered-out files too
        let connector = Connector::for_position(index, count);

        if entry.is_dir() {
            stack.push(Work::Descend {
                line: RenderLine::directory(prefix, connector, &entry.name),
                child_prefix: format!("{}{}", prefix, connector.child_segment()),
                path: entry.path,
            });
        } else if filter.matches(&entry.name) {
            stack.push(Work::Emit(RenderLine::file(prefix, connector, &entry.name)));
        } else {
            tracing::trace!(name = %entry.name, "Filtered out");
        }
    }

    stack[start..].reverse();
}
