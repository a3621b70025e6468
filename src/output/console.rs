use std::io::Write;

use crossterm::style::{style, Color, Stylize};

use crate::error::Result;
use crate::tree::{classify, FileCategory, LineKind, LineSink, RenderLine};

use super::{TreeOutput, END_MARKER};

/// Writes lines to a terminal-like writer, coloring entry names.
pub struct ConsoleSink<W: Write> {
    writer: W,
    colors: bool,
    end_marker: bool,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            colors: false,
            end_marker: true,
        }
    }

    pub fn with_colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    pub fn with_end_marker(mut self, enabled: bool) -> Self {
        self.end_marker = enabled;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Color used for an entry name on the console
pub fn name_color(line: &RenderLine) -> Option<Color> {
    match line.kind {
        LineKind::Head | LineKind::Closing => None,
        LineKind::Directory => Some(Color::Yellow),
        LineKind::File => Some(match classify(&line.name) {
            FileCategory::Media => Color::Blue,
            FileCategory::Executable => Color::Red,
            FileCategory::Text => Color::Green,
            FileCategory::Unknown => Color::DarkGrey,
        }),
    }
}

impl<W: Write> LineSink for ConsoleSink<W> {
    fn push_line(&mut self, line: RenderLine) -> Result<()> {
        match name_color(&line).filter(|_| self.colors) {
            Some(color) => writeln!(
                self.writer,
                "{}{}{}",
                line.lead(),
                style(&line.name).with(color),
                line.trailer()
            )?,
            None => writeln!(self.writer, "{}", line)?,
        }
        Ok(())
    }
}

impl<W: Write> TreeOutput for ConsoleSink<W> {
    fn finish(&mut self) -> Result<()> {
        if self.end_marker {
            if self.colors {
                let (elbow, done) = END_MARKER.split_at(END_MARKER.find(' ').unwrap_or(0));
                writeln!(self.writer, "{}{}", elbow, style(done).white().bold())?;
            } else {
                writeln!(self.writer, "{}", END_MARKER)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
