//! Output formatting module

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for sentence output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single sentence
    fn format_sentence(&mut self, sentence: &str, index: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Open the output destination: a file when given, stdout otherwise
pub fn open_writer(output: Option<&Path>) -> Result<Box<dyn Write + Send + Sync>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
