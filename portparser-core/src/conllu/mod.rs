//! CoNLL-U document model
//!
//! A document is an optional free-form header followed by sentence blocks.
//! Each block starts with `# sent_id = <id>`, carries further comment lines
//! and ten-column token rows, and ends with a blank line.

mod document;
mod token;

pub use document::{Document, SentenceRecord, SentenceRef};
pub use token::{Token, TokenId, EMPTY_FIELD, NO_SPACE_AFTER};
