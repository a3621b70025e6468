//! Shell completion and man page generation

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::Result;

const BIN_NAME: &str = "dirtree";

/// Write completions for `shell` to `out`
pub fn completions<W: Write>(shell: Shell, out: &mut W) {
    clap_complete::generate(shell, &mut Cli::command(), BIN_NAME, out);
}

/// Write the roff man page to `out`
pub fn man_page<W: Write>(out: &mut W) -> Result<()> {
    clap_mangen::Man::new(Cli::command()).render(out)?;
    Ok(())
}

pub fn run_completions(shell: Shell) {
    completions(shell, &mut io::stdout());
}

pub fn run_man() -> Result<()> {
    man_page(&mut io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let mut out = Vec::new();
        completions(Shell::Bash, &mut out);
        let script = String::from_utf8(out).unwrap();

        assert!(script.contains("dirtree"));
        assert!(script.contains("render"));
    }

    #[test]
    fn test_man_page_is_roff() {
        let mut out = Vec::new();
        man_page(&mut out).unwrap();
        let page = String::from_utf8(out).unwrap();

        assert!(page.contains(".TH"));
        assert!(page.contains("dirtree"));
    }
}
