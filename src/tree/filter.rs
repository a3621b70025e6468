use std::borrow::Cow;

/// Allow-list of filename suffixes applied to files (never to directories).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionFilter {
    /// Normalized, dot-prefixed suffixes
    suffixes: Vec<String>,

    /// Compare suffixes without regard to ASCII case
    ignore_case: bool,
}

impl ExtensionFilter {
    /// Build a filter from raw extensions such as `txt` or `.rs`.
    ///
    /// Blank items are dropped; a missing leading dot is added.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = extensions
            .into_iter()
            .filter_map(|ext| {
                let ext = ext.as_ref().trim();
                if ext.is_empty() {
                    None
                } else if ext.starts_with('.') {
                    Some(ext.to_string())
                } else {
                    Some(format!(".{}", ext))
                }
            })
            .collect();

        Self {
            suffixes,
            ignore_case: false,
        }
    }

    /// Filter that lets every file through
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated list as typed at a prompt
    pub fn parse(input: &str) -> Self {
        Self::new(input.split_whitespace())
    }

    /// Match suffixes without regard to ASCII case.
    ///
    /// Stored suffixes are lower-cased here once, so matching only folds the name.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        if ignore_case {
            for suffix in &mut self.suffixes {
                suffix.make_ascii_lowercase();
            }
        }
        self.ignore_case = ignore_case;
        self
    }

    /// True when at least one suffix restricts the output
    pub fn is_active(&self) -> bool {
        !self.suffixes.is_empty()
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    /// Whether a file with this name should be rendered
    pub fn matches(&self, name: &str) -> bool {
        if !self.is_active() {
            return true;
        }

        let name: Cow<'_, str> = if self.ignore_case {
            Cow::Owned(name.to_ascii_lowercase())
        } else {
            Cow::Borrowed(name)
        };
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }
}
