//! Render command implementation

use std::io;
use std::path::{Path, PathBuf};

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{ColorMode, ConsoleSink, FileSink, JsonSink, TreeOutput};
use crate::tree::{render, ExtensionFilter, LineSink};

/// Where the rendered tree goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Console,
    File(PathBuf),
    Json,
}

/// Run the render command
pub fn run(args: RenderArgs, config: &Config) -> Result<()> {
    // CLI extensions replace the configured defaults
    let extensions = if args.extensions.is_empty() {
        &config.render.extensions
    } else {
        &args.extensions
    };
    let filter = ExtensionFilter::new(extensions)
        .with_ignore_case(args.ignore_case || config.render.ignore_case);

    let destination = match (&args.output, args.json) {
        (Some(path), _) => Destination::File(path.clone()),
        (None, true) => Destination::Json,
        (None, false) => Destination::Console,
    };

    let colors = !args.no_color && ColorMode::from_str(&config.output.color).enabled();
    let end_marker = config.output.end_marker && !args.no_end_marker;

    write_tree(&args.path, &filter, &destination, colors, end_marker)
}

/// Render the whole tree, then open the destination and write it out.
///
/// The walk finishes before any file is created, so an output file inside
/// the root never lists itself and a failed walk leaves no partial file.
pub fn write_tree(
    root: &Path,
    filter: &ExtensionFilter,
    destination: &Destination,
    colors: bool,
    end_marker: bool,
) -> Result<()> {
    tracing::info!(
        path = %root.display(),
        extensions = ?filter.suffixes(),
        "Rendering directory tree"
    );

    let lines = render(root, filter)?;

    let mut sink: Box<dyn TreeOutput> = match destination {
        Destination::Console => Box::new(
            ConsoleSink::new(io::stdout().lock())
                .with_colors(colors)
                .with_end_marker(end_marker),
        ),
        Destination::File(path) => {
            Box::new(FileSink::create(path)?.with_end_marker(end_marker))
        }
        Destination::Json => Box::new(JsonSink::new(io::stdout().lock())),
    };

    for line in lines {
        sink.push_line(line)?;
    }
    sink.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TreeError;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_write_tree_to_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("root");
        fs::create_dir(&root).unwrap();
        File::create(root.join("a.txt")).unwrap();
        File::create(root.join("b.md")).unwrap();
        let out = dir.path().join("tree.txt");

        let filter = ExtensionFilter::new(["txt"]);
        write_tree(&root, &filter, &Destination::File(out.clone()), false, true).unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert!(content.contains("a.txt"));
        assert!(!content.contains("b.md"));
        assert!(content.ends_with("└─── Done ────\n"));
    }

    #[test]
    fn test_missing_root_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("tree.txt");

        let result = write_tree(
            &dir.path().join("missing"),
            &ExtensionFilter::all(),
            &Destination::File(out.clone()),
            false,
            true,
        );

        assert!(matches!(result, Err(TreeError::NotADirectory(_))));
        assert!(!out.exists());
    }

    #[test]
    fn test_output_file_inside_root_is_not_listed() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        let out = dir.path().join("tree.txt");

        write_tree(
            dir.path(),
            &ExtensionFilter::all(),
            &Destination::File(out.clone()),
            false,
            true,
        )
        .unwrap();

        let content = fs::read_to_string(&out).unwrap();
        assert_eq!(
            content,
            format!("{}/\n└── a.txt\n└─── Done ────\n", dir.path().display())
        );
    }
}
