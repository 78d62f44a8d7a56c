//! CoNLL-U token rows and identifiers

use crate::error::{Error, Result};
use std::fmt;

/// Placeholder for an empty CoNLL-U field
pub const EMPTY_FIELD: &str = "_";

/// Misc value marking a token glued to the next one
pub const NO_SPACE_AFTER: &str = "SpaceAfter=No";

/// Identifier of a token row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenId {
    /// Syntactic word (`4`)
    Word(u32),
    /// Multi-word token spanning words (`4-5`)
    Range(u32, u32),
    /// Empty node (`4.1`)
    Empty(u32, u32),
}

impl TokenId {
    /// Real tokens are the ones counted in a sentence's size
    pub fn is_word(&self) -> bool {
        matches!(self, TokenId::Word(_))
    }

    pub fn is_range(&self) -> bool {
        matches!(self, TokenId::Range(..))
    }

    /// Parse an identifier, `None` when it is not `n`, `n-m` or `n.m`
    pub fn parse(text: &str) -> Option<Self> {
        if let Some((start, end)) = text.split_once('-') {
            return Some(TokenId::Range(start.parse().ok()?, end.parse().ok()?));
        }
        if let Some((word, node)) = text.split_once('.') {
            return Some(TokenId::Empty(word.parse().ok()?, node.parse().ok()?));
        }
        text.parse().ok().map(TokenId::Word)
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenId::Word(n) => write!(f, "{n}"),
            TokenId::Range(start, end) => write!(f, "{start}-{end}"),
            TokenId::Empty(word, node) => write!(f, "{word}.{node}"),
        }
    }
}

/// One token row with its ten CoNLL-U fields
///
/// `status` is an annotation slot used while correcting a document. It is
/// never written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: TokenId,
    pub form: String,
    pub lemma: String,
    pub upos: String,
    pub xpos: String,
    pub feats: String,
    pub head: String,
    pub deprel: String,
    pub deps: String,
    pub misc: String,
    pub status: Option<String>,
}

impl Token {
    /// Untagged word row
    pub fn word(id: u32, form: impl Into<String>, misc: impl Into<String>) -> Self {
        Self::blank(TokenId::Word(id), form.into(), misc.into())
    }

    /// Multi-word row covering `start..=end`
    pub fn range(start: u32, end: u32, form: impl Into<String>, misc: impl Into<String>) -> Self {
        Self::blank(TokenId::Range(start, end), form.into(), misc.into())
    }

    fn blank(id: TokenId, form: String, misc: String) -> Self {
        Self {
            id,
            form,
            lemma: EMPTY_FIELD.to_string(),
            upos: EMPTY_FIELD.to_string(),
            xpos: EMPTY_FIELD.to_string(),
            feats: EMPTY_FIELD.to_string(),
            head: EMPTY_FIELD.to_string(),
            deprel: EMPTY_FIELD.to_string(),
            deps: EMPTY_FIELD.to_string(),
            misc,
            status: None,
        }
    }

    /// Parse a tab-separated token line
    ///
    /// `line_number` is only used for error reporting. A trailing `\r` is
    /// ignored; any other field count than ten is malformed.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Self> {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 10 {
            return Err(Error::MalformedInput {
                line: line_number,
                reason: format!("expected 10 fields, found {}", fields.len()),
            });
        }

        let id = TokenId::parse(fields[0]).ok_or_else(|| Error::MalformedInput {
            line: line_number,
            reason: format!("invalid token id '{}'", fields[0]),
        })?;

        // Taggers may bracket an unsure UPOS as `[X]`. It is stored as `X`,
        // so such rows are written back without the brackets.
        let upos = fields[3]
            .strip_prefix('[')
            .and_then(|tag| tag.strip_suffix(']'))
            .unwrap_or(fields[3]);

        Ok(Self {
            id,
            form: fields[1].to_string(),
            lemma: fields[2].to_string(),
            upos: upos.to_string(),
            xpos: fields[4].to_string(),
            feats: fields[5].to_string(),
            head: fields[6].to_string(),
            deprel: fields[7].to_string(),
            deps: fields[8].to_string(),
            misc: fields[9].to_string(),
            status: None,
        })
    }

    /// Render the row, optionally blanking HEAD, DEPREL and DEPS
    pub fn to_line(&self, drop_deprel_fields: bool) -> String {
        let (head, deprel, deps) = if drop_deprel_fields {
            (EMPTY_FIELD, EMPTY_FIELD, EMPTY_FIELD)
        } else {
            (self.head.as_str(), self.deprel.as_str(), self.deps.as_str())
        };
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.id,
            self.form,
            self.lemma,
            self.upos,
            self.xpos,
            self.feats,
            head,
            deprel,
            deps,
            self.misc
        )
    }
}
