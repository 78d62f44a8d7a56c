use std::collections::HashMap;

/// Trie node keyed by character, built over reversed abbreviations
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes indexed by character
    children: HashMap<char, TrieNode>,
    /// Whether this node represents the end of an abbreviation
    is_end: bool,
}

/// Suffix trie for abbreviation matching
///
/// Abbreviations are stored back to front so a chunk can be walked from its
/// last character, which is where the segmenter and the tokenizer look.
/// Matching is case-sensitive.
#[derive(Debug, Clone, Default)]
pub struct AbbreviationTrie {
    root: TrieNode,
    len: usize,
}

impl AbbreviationTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the trie is empty (contains no abbreviations)
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Number of distinct abbreviations
    pub fn len(&self) -> usize {
        self.len
    }

    /// Insert an abbreviation into the trie
    pub fn insert(&mut self, abbreviation: &str) {
        if abbreviation.is_empty() {
            return;
        }

        let mut current = &mut self.root;
        for ch in abbreviation.chars().rev() {
            current = current.children.entry(ch).or_default();
        }

        if !current.is_end {
            self.len += 1;
        }
        current.is_end = true;
    }

    /// Build from a flat list of abbreviations
    pub fn from_list<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for abbreviation in abbreviations {
            trie.insert(abbreviation.as_ref());
        }
        trie
    }

    /// Exact membership
    pub fn contains(&self, text: &str) -> bool {
        let mut current = &self.root;
        for ch in text.chars().rev() {
            match current.children.get(&ch) {
                Some(node) => current = node,
                None => return false,
            }
        }
        current.is_end && !text.is_empty()
    }

    /// Whether `text` ends with a known abbreviation
    ///
    /// True on an exact match, or when some abbreviation is a suffix of `text`
    /// and the character right before it is not alphabetic (`(Dr.` but not
    /// `casa.` for the initial `a.`).
    pub fn ends_with_abbreviation(&self, text: &str) -> bool {
        if self.is_empty() {
            return false;
        }

        let chars: Vec<char> = text.chars().collect();
        let mut current = &self.root;

        for (consumed, &ch) in chars.iter().rev().enumerate() {
            match current.children.get(&ch) {
                Some(node) => {
                    current = node;
                    if current.is_end {
                        let start = chars.len() - (consumed + 1);
                        if start == 0 || !chars[start - 1].is_alphabetic() {
                            return true;
                        }
                    }
                }
                None => return false,
            }
        }

        false
    }
}
