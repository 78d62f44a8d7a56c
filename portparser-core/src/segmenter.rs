//! Sentence segmentation
//!
//! The input is normalized and split on single spaces into chunks. Chunks are
//! scanned left to right and each one either extends the current sentence or
//! closes it. Punctuation stays attached to its chunk; the decision only
//! looks at how a chunk ends, at the first character of the next chunk and
//! at the abbreviation table.

use crate::config::SegmenterConfig;
use crate::language::{self, LanguageTables};
use regex::Regex;
use std::sync::OnceLock;

/// Look-alike characters and list artifacts mapped before scanning
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{a0}", " "),
    ("—", "-"),
    ("–", "-"),
    ("＂", "\""),
    ("“", "\""),
    ("”", "\""),
    ("‟", "\""),
    ("″", "\""),
    ("‶", "\""),
    ("〃", "\""),
    ("״", "\""),
    ("˝", "\""),
    ("ʺ", "\""),
    ("˶", "\""),
    ("ˮ", "\""),
    ("ײ", "\""),
    (" ‣", "."),
    (" >>", "."),
    (" ○", "."),
    (" *", "."),
    (" | ", ". "),
    (" .", "."),
];

const LINE_BREAKS: &[(&str, &str)] = &[("\r", " "), ("\n", " "), ("\t", " ")];

fn space_runs() -> &'static Regex {
    static SPACE_RUNS: OnceLock<Regex> = OnceLock::new();
    SPACE_RUNS.get_or_init(|| Regex::new(" {2,}").expect("valid space-run pattern"))
}

/// Collapse whitespace and, with `replace`, map the replacement table
pub fn normalize(text: &str, replace: bool) -> String {
    let mut normalized = text.replace("  ", " ");
    if replace {
        for (from, to) in REPLACEMENTS {
            normalized = normalized.replace(from, to);
        }
    }
    for (from, to) in LINE_BREAKS {
        normalized = normalized.replace(from, to);
    }
    let collapsed = space_runs().replace_all(&normalized, " ");
    collapsed
        .strip_prefix(' ')
        .unwrap_or(&collapsed)
        .to_string()
}

/// Final touches applied to every sentence before it is emitted
///
/// Returns `None` for sentences that carry nothing (`""`, `"."`, `".."`).
pub fn clean_sentence(sentence: &str) -> Option<String> {
    if matches!(sentence, "" | "." | "..") {
        return None;
    }

    let chars: Vec<char> = sentence.chars().collect();
    let last = chars[chars.len() - 1];
    let before_last = chars.len().checked_sub(2).map(|i| chars[i]);

    if chars.len() > 2 && sentence.ends_with("..") && !sentence.ends_with("...") {
        return Some(chars[..chars.len() - 1].iter().collect());
    }

    let quoted_end = matches!(last, '\'' | '"') && matches!(before_last, Some('.' | '!' | '?'));
    if !matches!(last, '.' | '!' | '?' | ':' | ';') && !quoted_end {
        return Some(format!("{sentence}."));
    }

    let first = chars[0];
    if matches!(first, '\'' | '"')
        && last == first
        && chars.len() > 1
        && chars.iter().filter(|&&c| c == first).count() == 2
    {
        return Some(chars[1..chars.len() - 1].iter().collect());
    }

    Some(sentence.to_string())
}

/// Chunk-scanning sentence segmenter
#[derive(Debug, Clone)]
pub struct Segmenter<'a> {
    tables: &'a LanguageTables,
    config: SegmenterConfig,
}

impl Segmenter<'static> {
    /// Segmenter over the built-in Portuguese tables
    pub fn portuguese(config: SegmenterConfig) -> Self {
        Self::new(language::portuguese(), config)
    }
}

impl<'a> Segmenter<'a> {
    pub fn new(tables: &'a LanguageTables, config: SegmenterConfig) -> Self {
        Self { tables, config }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Split `text` into cleaned sentences, in source order
    pub fn segment(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text, self.config.replace);
        let mut chunks: Vec<&str> = normalized.split(' ').collect();
        if chunks.last() == Some(&"") {
            chunks.pop();
        }

        let mut scan = Scan::default();
        let limit = self.config.limit;

        for (i, &chunk) in chunks.iter().enumerate() {
            if i + 1 == chunks.len() {
                scan.push(chunk);
                scan.end();
                break;
            }

            let length = chunk.chars().count();
            if limit != 0 && length > limit {
                log::debug!("Discarding chunk longer than {limit} characters");
                continue;
            }
            if limit != 0 && scan.length_with(length) > limit {
                scan.end();
                scan.push(chunk);
                continue;
            }
            if length == 0 {
                continue;
            }
            if length < 3 {
                scan.push(chunk);
                continue;
            }

            let next_is_lower = chunks[i + 1]
                .chars()
                .next()
                .is_some_and(char::is_lowercase);

            if chunk.ends_with("...") || chunk.ends_with('!') || chunk.ends_with('?') {
                scan.push(chunk);
                scan.end();
            } else if chunk.ends_with(['.', ':', ';']) && next_is_lower {
                scan.push(chunk);
            } else if chunk.ends_with([':', ';']) {
                scan.push(chunk);
                scan.end();
            } else if ["!'", "!\"", "?'", "?\""].iter().any(|end| chunk.ends_with(end)) {
                scan.push(chunk);
                scan.end();
            } else if chunk.ends_with(".'") || chunk.ends_with(".\"") {
                scan.push(chunk);
                if !self.tables.ends_with_abbreviation(&chunk[..chunk.len() - 1]) {
                    scan.end();
                }
            } else if !chunk.ends_with('.') {
                scan.push(chunk);
            } else {
                scan.push(chunk);
                if !self.tables.ends_with_abbreviation(chunk) {
                    scan.end();
                }
            }
        }

        log::debug!(
            "Segmented {} chunks into {} sentences",
            chunks.len(),
            scan.sentences.len()
        );
        scan.sentences
    }
}

/// Accumulation state of one segmentation pass
#[derive(Default)]
struct Scan<'t> {
    buffer: Vec<&'t str>,
    length: usize,
    sentences: Vec<String>,
}

impl<'t> Scan<'t> {
    fn push(&mut self, chunk: &'t str) {
        self.length = self.length_with(chunk.chars().count());
        self.buffer.push(chunk);
    }

    /// Length of the current sentence once a chunk of `length` is appended
    fn length_with(&self, length: usize) -> usize {
        if self.buffer.is_empty() {
            length
        } else {
            self.length + 1 + length
        }
    }

    fn end(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let sentence = self.buffer.join(" ");
        if let Some(cleaned) = clean_sentence(&sentence) {
            self.sentences.push(cleaned);
        }
        self.buffer.clear();
        self.length = 0;
    }
}

/// Segment with the built-in Portuguese tables
pub fn segment(text: &str, replace: bool, limit: usize) -> Vec<String> {
    Segmenter::portuguese(SegmenterConfig { replace, limit }).segment(text)
}
