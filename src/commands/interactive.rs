//! Interactive mode: ask for the root, extensions and destination on the console

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Result, TreeError};
use crate::output::ColorMode;
use crate::tree::ExtensionFilter;

use super::render::{write_tree, Destination};

/// Everything the prompts collect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub root: PathBuf,
    pub filter: ExtensionFilter,
    pub destination: Destination,
}

/// Run interactive mode against stdin/stdout
pub fn run(config: &Config) -> Result<()> {
    let answers = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        prompt(&mut stdin.lock(), &mut stdout.lock(), config)?
    };

    tracing::debug!(?answers, "Collected interactive answers");

    let colors = ColorMode::from_str(&config.output.color).enabled();
    write_tree(
        &answers.root,
        &answers.filter,
        &answers.destination,
        colors,
        config.output.end_marker,
    )
}

/// Ask the questions in order and validate the directory.
///
/// A blank extension answer falls back to the configured extensions.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &Config,
) -> Result<Answers> {
    let root = PathBuf::from(ask(input, output, "Enter path to directory: ")?);

    let extensions = ask(
        input,
        output,
        "Enter file extension(s) separated with space. Leave blank to list everything: ",
    )?;
    let filter = if extensions.is_empty() {
        ExtensionFilter::new(&config.render.extensions)
    } else {
        ExtensionFilter::parse(&extensions)
    }
    .with_ignore_case(config.render.ignore_case);

    if !root.is_dir() {
        writeln!(output, "Entered directory doesn't exist")?;
        return Err(TreeError::NotADirectory(root));
    }

    let write_file =
        ask(input, output, "Want to write it to file (y/n): ")?.eq_ignore_ascii_case("y");

    let destination = if write_file {
        let default_file = &config.output.default_file;
        let answer = ask(
            input,
            output,
            &format!("File name (leave empty for {}): ", default_file.display()),
        )?;
        if answer.is_empty() {
            Destination::File(default_file.clone())
        } else {
            Destination::File(PathBuf::from(answer))
        }
    } else {
        Destination::Console
    };

    Ok(Answers {
        root,
        filter,
        destination,
    })
}

/// Print a question and read one trimmed line
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(TreeError::InvalidInput(format!(
            "no answer to '{}'",
            question.trim_end_matches([':', ' '])
        )));
    }

    Ok(line.trim().to_string())
}
