use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::tree::{classify, Connector, FileCategory, LineKind, LineSink, RenderLine};

use super::TreeOutput;

/// Serialized form of one line
#[derive(Debug, Serialize)]
struct JsonLine {
    kind: LineKind,
    prefix: String,
    connector: Option<Connector>,
    name: String,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<FileCategory>,
}

impl From<RenderLine> for JsonLine {
    fn from(line: RenderLine) -> Self {
        let text = line.text();
        let category = (line.kind == LineKind::File).then(|| classify(&line.name));
        Self {
            kind: line.kind,
            prefix: line.prefix,
            connector: line.connector,
            name: line.name,
            text,
            category,
        }
    }
}

/// Collects lines and writes them as one pretty-printed JSON array on finish.
pub struct JsonSink<W: Write> {
    writer: W,
    lines: Vec<JsonLine>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> LineSink for JsonSink<W> {
    fn push_line(&mut self, line: RenderLine) -> Result<()> {
        self.lines.push(line.into());
        Ok(())
    }
}

impl<W: Write> TreeOutput for JsonSink<W> {
    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.lines).map_err(std::io::Error::from)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array_output() {
        let mut sink = JsonSink::new(Vec::new());
        sink.push_line(RenderLine::head("/root")).unwrap();
        sink.push_line(RenderLine::directory("", Connector::Tee, "src"))
            .unwrap();
        sink.push_line(RenderLine::file("│   ", Connector::Elbow, "main.rs"))
            .unwrap();
        sink.finish().unwrap();

        let json: serde_json::Value = serde_json::from_slice(&sink.into_inner()).unwrap();
        let lines = json.as_array().unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["kind"], "head");
        assert_eq!(lines[0]["text"], "/root/");
        assert!(lines[0]["connector"].is_null());
        assert_eq!(lines[1]["text"], "├── src/");
        assert!(lines[1].get("category").is_none());
        assert_eq!(lines[2]["prefix"], "│   ");
        assert_eq!(lines[2]["category"], "text");
    }

    #[test]
    fn test_empty_json_array() {
        let mut sink = JsonSink::new(Vec::new());
        sink.finish().unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "[]\n");
    }
}
