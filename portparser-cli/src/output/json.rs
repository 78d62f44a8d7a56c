//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs sentences as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    sentences: Vec<SentenceData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceData {
    /// The sentence text
    pub text: String,
    /// Position of the sentence in the output
    pub index: usize,
    /// Length of the sentence in characters
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentences: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, sentence: &str, index: usize) -> Result<()> {
        let text = sentence.trim().to_string();
        self.sentences.push(SentenceData {
            length: text.chars().count(),
            text,
            index,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer);
            formatter.format_sentence("Olá!", 0).unwrap();
            formatter.format_sentence("Tudo bem?", 1).unwrap();
            formatter.finish().unwrap();
        }
        let parsed: Vec<SentenceData> = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].text, "Olá!");
        assert_eq!(parsed[0].length, 4);
        assert_eq!(parsed[1].index, 1);
    }

    #[test]
    fn test_empty_output_is_empty_array() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap().trim(), "[]");
    }
}
