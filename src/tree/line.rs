use serde::Serialize;
use std::fmt;
use std::path::MAIN_SEPARATOR;

/// Native separator written after directory names
const SEPARATOR: &str = match MAIN_SEPARATOR {
    '\\' => "\\",
    _ => "/",
};

/// Prefix segment under a directory that has siblings below it
pub const PIPE_PREFIX: &str = "│   ";
/// Prefix segment under the last directory of its level
pub const SPACE_PREFIX: &str = "    ";

/// Glyph joining an entry to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Connector {
    /// More siblings follow
    Tee,
    /// Last sibling
    Elbow,
}

impl Connector {
    pub fn for_position(index: usize, count: usize) -> Self {
        if index + 1 == count {
            Connector::Elbow
        } else {
            Connector::Tee
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Connector::Tee => "├──",
            Connector::Elbow => "└──",
        }
    }

    /// Prefix segment for the children of an entry using this connector
    pub fn child_segment(self) -> &'static str {
        match self {
            Connector::Tee => PIPE_PREFIX,
            Connector::Elbow => SPACE_PREFIX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// The root path at the top of the tree
    Head,
    Directory,
    File,
    /// Spacer emitted after a directory's subtree
    Closing,
}

/// One line of rendered tree output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderLine {
    pub kind: LineKind,
    pub prefix: String,
    pub connector: Option<Connector>,
    /// Entry name, or the root path for the head line
    pub name: String,
}

impl RenderLine {
    pub fn head(root: &str) -> Self {
        let name = if root.len() > 1 && root.ends_with(MAIN_SEPARATOR) {
            root.trim_end_matches(MAIN_SEPARATOR).to_string()
        } else {
            root.to_string()
        };

        Self {
            kind: LineKind::Head,
            prefix: String::new(),
            connector: None,
            name,
        }
    }

    pub fn directory(prefix: &str, connector: Connector, name: &str) -> Self {
        Self {
            kind: LineKind::Directory,
            prefix: prefix.to_string(),
            connector: Some(connector),
            name: name.to_string(),
        }
    }

    pub fn file(prefix: &str, connector: Connector, name: &str) -> Self {
        Self {
            kind: LineKind::File,
            prefix: prefix.to_string(),
            connector: Some(connector),
            name: name.to_string(),
        }
    }

    /// Closing line for a subtree whose children used `child_prefix`
    pub fn closing(child_prefix: &str) -> Self {
        Self {
            kind: LineKind::Closing,
            prefix: child_prefix.trim_end().to_string(),
            connector: None,
            name: String::new(),
        }
    }

    /// Everything before the entry name, including the connector and its space
    pub fn lead(&self) -> String {
        match self.connector {
            Some(connector) => format!("{}{} ", self.prefix, connector.glyph()),
            None => self.prefix.clone(),
        }
    }

    /// Separator appended after the name, if any
    pub fn trailer(&self) -> &'static str {
        match self.kind {
            LineKind::Head if self.name.ends_with(MAIN_SEPARATOR) => "",
            LineKind::Head | LineKind::Directory => SEPARATOR,
            LineKind::File | LineKind::Closing => "",
        }
    }

    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RenderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.lead(), self.name, self.trailer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_for_position() {
        assert_eq!(Connector::for_position(0, 3), Connector::Tee);
        assert_eq!(Connector::for_position(1, 3), Connector::Tee);
        assert_eq!(Connector::for_position(2, 3), Connector::Elbow);
        assert_eq!(Connector::for_position(0, 1), Connector::Elbow);
    }

    #[test]
    fn test_child_segments_have_equal_width() {
        assert_eq!(PIPE_PREFIX.chars().count(), SPACE_PREFIX.chars().count());
        assert_eq!(Connector::Tee.child_segment(), "│   ");
        assert_eq!(Connector::Elbow.child_segment(), "    ");
    }

    #[test]
    fn test_head_line() {
        let line = RenderLine::head("/home/user/project");
        assert_eq!(line.text(), "/home/user/project/");
    }

    #[test]
    fn test_head_line_does_not_double_separator() {
        assert_eq!(RenderLine::head("/home/user/").text(), "/home/user/");
        assert_eq!(RenderLine::head("/").text(), "/");
    }

    #[test]
    fn test_directory_line() {
        let line = RenderLine::directory("│   ", Connector::Tee, "src");
        assert_eq!(line.text(), "│   ├── src/");
    }

    #[test]
    fn test_file_line() {
        let line = RenderLine::file("    ", Connector::Elbow, "main.rs");
        assert_eq!(line.text(), "    └── main.rs");
        assert_eq!(line.lead(), "    └── ");
    }

    #[test]
    fn test_closing_line_is_trimmed() {
        assert_eq!(RenderLine::closing("│       ").text(), "│");
        assert_eq!(RenderLine::closing("│   │   ").text(), "│   │");
        assert_eq!(RenderLine::closing("        ").text(), "");
    }

    #[test]
    fn test_line_serializes_kind() {
        let line = RenderLine::file("", Connector::Tee, "a.txt");
        let json = serde_json::to_value(&line).unwrap();
        assert_eq!(json["kind"], "file");
        assert_eq!(json["connector"], "tee");
        assert_eq!(json["name"], "a.txt");
    }
}
