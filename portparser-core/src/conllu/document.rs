//! In-memory CoNLL-U document

use super::token::{Token, TokenId};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

const SENT_ID_PREFIX: &str = "# sent_id = ";
const TEXT_PREFIX: &str = "# text = ";

/// One sentence block of a CoNLL-U document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRecord {
    pub id: String,
    pub text: String,
    /// Number of real tokens; multi-word rows are not counted
    pub token_count: usize,
    /// Comment lines in source order, `# sent_id` included
    pub header_lines: Vec<String>,
    pub tokens: Vec<Token>,
    pub tag: Option<String>,
}

impl SentenceRecord {
    /// Empty record with the conventional `sent_id` and `text` comments
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        let id = id.into();
        let text = text.into();
        Self {
            header_lines: vec![format!("{SENT_ID_PREFIX}{id}"), format!("{TEXT_PREFIX}{text}")],
            id,
            text,
            token_count: 0,
            tokens: Vec::new(),
            tag: None,
        }
    }

    fn with_id_line(id: &str, line: &str) -> Self {
        Self {
            id: id.to_string(),
            text: String::new(),
            token_count: 0,
            header_lines: vec![line.to_string()],
            tokens: Vec::new(),
            tag: None,
        }
    }

    /// Append a token row, keeping `token_count` in step
    pub fn push_token(&mut self, token: Token) {
        if token.id.is_word() {
            self.token_count += 1;
        }
        self.tokens.push(token);
    }

    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.iter().find(|token| token.id == id)
    }

    /// Text of the block, terminated by its blank line
    pub fn serialize(&self, drop_deprel_fields: bool) -> String {
        let mut out = String::new();
        for line in &self.header_lines {
            out.push_str(line);
            out.push('\n');
        }
        for token in &self.tokens {
            out.push_str(&token.to_line(drop_deprel_fields));
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

/// Sentence reference accepted by the tagging operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceRef<'a> {
    Id(&'a str),
    Index(usize),
}

impl<'a> From<&'a str> for SentenceRef<'a> {
    fn from(id: &'a str) -> Self {
        SentenceRef::Id(id)
    }
}

impl From<usize> for SentenceRef<'_> {
    fn from(index: usize) -> Self {
        SentenceRef::Index(index)
    }
}

/// Ordered collection of sentence records
///
/// Records are unique by id. Bulk loads sort the records by id; duplicates
/// found while loading are logged and skipped, and so are sentences with a
/// malformed token line.
#[derive(Debug, Clone, Default)]
pub struct Document {
    header: String,
    sentences: Vec<SentenceRecord>,
    ids: HashSet<String>,
    token_total: usize,
    malformed: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CoNLL-U text
    pub fn parse(text: &str) -> Result<Self> {
        let mut document = Self::new();
        document.add_text(text)?;
        Ok(document)
    }

    /// Same as [`Document::parse`]
    pub fn load(text: &str) -> Result<Self> {
        Self::parse(text)
    }

    /// Read and parse a CoNLL-U file
    pub fn load_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Merge more CoNLL-U text into the document
    ///
    /// Lines before the first `# sent_id` are appended to the document
    /// header. A sentence with a malformed token line is dropped and the
    /// load goes on with the next block. Returns how many sentences were
    /// skipped as duplicates.
    pub fn add_text(&mut self, text: &str) -> Result<usize> {
        let mut in_header = true;
        let mut current: Option<SentenceRecord> = None;
        let mut duplicates = 0;
        let mut malformed = 0;

        for (index, raw) in text.split_inclusive('\n').enumerate() {
            let line = raw.strip_suffix('\n').unwrap_or(raw);
            let line = line.strip_suffix('\r').unwrap_or(line);

            if in_header && !line.starts_with(SENT_ID_PREFIX) {
                self.header.push_str(raw);
                continue;
            }
            in_header = false;

            if current.is_none() {
                if let Some(id) = line.strip_prefix(SENT_ID_PREFIX) {
                    current = Some(SentenceRecord::with_id_line(id, line));
                }
                continue;
            }

            if line.is_empty() {
                if let Some(done) = current.take() {
                    duplicates += usize::from(!self.insert_loaded(done));
                }
                continue;
            }

            let Some(record) = current.as_mut() else {
                continue;
            };
            if line.starts_with('#') {
                if let Some(text) = line.strip_prefix(TEXT_PREFIX) {
                    record.text = text.to_string();
                }
                record.header_lines.push(line.to_string());
                continue;
            }
            match Token::parse_line(line, index + 1) {
                Ok(token) => record.push_token(token),
                Err(error) => {
                    log::warn!("Dropping sentence {}: {error}", record.id);
                    current = None;
                    malformed += 1;
                }
            }
        }

        if let Some(done) = current.take() {
            duplicates += usize::from(!self.insert_loaded(done));
        }

        if duplicates > 0 {
            log::warn!("Skipped {duplicates} sentences with duplicate ids");
        }
        if malformed > 0 {
            log::warn!("Skipped {malformed} sentences with malformed token lines");
        }
        self.malformed += malformed;
        self.sort();
        Ok(duplicates)
    }

    fn insert_loaded(&mut self, record: SentenceRecord) -> bool {
        if self.ids.contains(&record.id) {
            log::warn!("Duplicate sentence id: {}", record.id);
            return false;
        }
        self.insert(record);
        true
    }

    fn insert(&mut self, record: SentenceRecord) {
        self.ids.insert(record.id.clone());
        self.token_total += record.token_count;
        self.sentences.push(record);
    }

    /// Append a record, skipping it when its id is already present
    pub fn push(&mut self, record: SentenceRecord) -> bool {
        self.insert_loaded(record)
    }

    /// Append a record, failing on a duplicate id
    pub fn try_push(&mut self, record: SentenceRecord) -> Result<()> {
        if self.ids.contains(&record.id) {
            return Err(Error::DuplicateSentenceId(record.id));
        }
        self.insert(record);
        Ok(())
    }

    /// Lines that preceded the first sentence block
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn sentences(&self) -> &[SentenceRecord] {
        &self.sentences
    }

    pub fn sentences_mut(&mut self) -> impl Iterator<Item = &mut SentenceRecord> {
        self.sentences.iter_mut()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Real tokens over all sentences
    pub fn token_count(&self) -> usize {
        self.token_total
    }

    /// Sentences dropped by loads because of a malformed token line
    pub fn malformed_count(&self) -> usize {
        self.malformed
    }

    pub fn get_by_id(&self, id: &str) -> Option<&SentenceRecord> {
        self.index_of_id(id).map(|index| &self.sentences[index])
    }

    pub fn get_by_id_mut(&mut self, id: &str) -> Option<&mut SentenceRecord> {
        let index = self.index_of_id(id)?;
        self.sentences.get_mut(index)
    }

    pub fn get_by_index(&self, index: usize) -> Option<&SentenceRecord> {
        self.sentences.get(index)
    }

    pub fn get_by_index_mut(&mut self, index: usize) -> Option<&mut SentenceRecord> {
        self.sentences.get_mut(index)
    }

    pub fn index_of_id(&self, id: &str) -> Option<usize> {
        if !self.ids.contains(id) {
            return None;
        }
        self.sentences.iter().position(|record| record.id == id)
    }

    pub fn id_at(&self, index: usize) -> Option<&str> {
        self.sentences.get(index).map(|record| record.id.as_str())
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Every sentence id, sorted
    pub fn all_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.sentences.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids
    }

    pub fn remove_by_index(&mut self, index: usize) -> Option<SentenceRecord> {
        if index >= self.sentences.len() {
            return None;
        }
        let record = self.sentences.remove(index);
        self.ids.remove(&record.id);
        self.token_total -= record.token_count;
        Some(record)
    }

    pub fn remove_by_id(&mut self, id: &str) -> Option<SentenceRecord> {
        let index = self.index_of_id(id)?;
        self.remove_by_index(index)
    }

    fn resolve(&self, sentence: SentenceRef<'_>) -> Option<usize> {
        match sentence {
            SentenceRef::Id(id) => self.index_of_id(id),
            SentenceRef::Index(index) => (index < self.sentences.len()).then_some(index),
        }
    }

    /// Set the status of every row whose id renders as `token_id`
    ///
    /// Returns whether a row was found.
    pub fn set_token_tag<'a>(
        &mut self,
        sentence: impl Into<SentenceRef<'a>>,
        token_id: &str,
        tag: &str,
    ) -> bool {
        let Some(index) = self.resolve(sentence.into()) else {
            return false;
        };
        let mut found = false;
        for token in &mut self.sentences[index].tokens {
            if token.id.to_string() == token_id {
                token.status = Some(tag.to_string());
                found = true;
            }
        }
        found
    }

    pub fn set_sentence_tag(&mut self, index: usize, tag: &str) -> bool {
        match self.sentences.get_mut(index) {
            Some(record) => {
                record.tag = Some(tag.to_string());
                true
            }
            None => false,
        }
    }

    pub fn is_sentence_tagged(&self, index: usize) -> bool {
        self.sentences
            .get(index)
            .and_then(|record| record.tag.as_deref())
            .is_some_and(|tag| !tag.is_empty())
    }

    /// Tag each sentence with the smallest non-empty status of its tokens
    ///
    /// An existing sentence tag takes part in the comparison.
    pub fn propagate_sentence_tags(&mut self) {
        for record in &mut self.sentences {
            let smallest = record
                .tokens
                .iter()
                .filter_map(|token| token.status.as_deref())
                .chain(record.tag.as_deref())
                .filter(|tag| !tag.is_empty())
                .min()
                .map(str::to_string);
            if smallest.is_some() {
                record.tag = smallest;
            }
        }
    }

    /// Number of sentences with exactly `size` real tokens
    pub fn count_of_size(&self, size: usize) -> usize {
        self.sentences
            .iter()
            .filter(|record| record.token_count == size)
            .count()
    }

    /// Smallest and largest sentence size
    pub fn size_range(&self) -> Option<(usize, usize)> {
        let sizes = self.sentences.iter().map(|record| record.token_count);
        Some((sizes.clone().min()?, sizes.max()?))
    }

    /// Stable sort by sentence id
    pub fn sort(&mut self) {
        self.sentences.sort_by(|a, b| a.id.cmp(&b.id));
    }

    pub fn serialize(&self, include_header: bool, drop_deprel_fields: bool) -> String {
        let mut out = String::new();
        if include_header {
            out.push_str(&self.header);
        }
        for record in &self.sentences {
            out.push_str(&record.serialize(drop_deprel_fields));
        }
        out
    }

    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
        include_header: bool,
        drop_deprel_fields: bool,
    ) -> Result<()> {
        writer.write_all(self.serialize(include_header, drop_deprel_fields).as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
