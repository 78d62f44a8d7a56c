//! Error types for the core pipeline

use thiserror::Error;

/// Error type for core operations
#[derive(Debug, Error)]
pub enum Error {
    /// A CoNLL-U line that cannot be turned into a token row
    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    /// Sentence identifier already present in the document
    #[error("Duplicate sentence id: {0}")]
    DuplicateSentenceId(String),

    /// Lexicon table row that cannot be parsed
    #[error("Invalid lexicon entry at line {line}: {reason}")]
    Lexicon { line: usize, reason: String },

    /// External collaborator (parsing model) failed
    #[error("External tool '{tool}' failed: {status}")]
    ExternalTool { tool: String, status: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Infrastructure error (I/O, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;
