//! Portuguese sentence segmentation, CoNLL-U tokenization and lexicon-based
//! post-correction
//!
//! The crate covers the text side of a Portuguese dependency parsing chain:
//!
//! - **Segmentation** splits raw text into sentences, honouring
//!   abbreviations, quotes and ellipses.
//! - **Tokenization** turns each sentence into CoNLL-U rows, expanding
//!   contractions (`do` = `de` + `o`) and clitic compounds (`fazê-lo`) into
//!   multi-word ranges.
//! - **Post-processing** corrects lemmas and features predicted by a parsing
//!   model against a lexicon and a table of usual forms.
//!
//! The parsing model itself is external and plugs in through
//! [`pipeline::ParsingModel`].
//!
//! # Example
//!
//! ```rust
//! use portparser_core::{Lexicon, Segmenter, SegmenterConfig, Tokenizer};
//!
//! let sentences = Segmenter::portuguese(SegmenterConfig::default())
//!     .segment("O livro do menino caiu. Ninguém viu.");
//! assert_eq!(sentences.len(), 2);
//!
//! let lexicon = Lexicon::default();
//! let record = Tokenizer::new(&lexicon).tokenize_str(&sentences[0], "S000001");
//! let forms: Vec<&str> = record.tokens.iter().map(|t| t.form.as_str()).collect();
//! assert_eq!(forms, ["O", "livro", "do", "de", "o", "menino", "caiu", "."]);
//! ```

pub mod config;
pub mod conllu;
pub mod error;
pub mod language;
pub mod lexicon;
pub mod pipeline;
pub mod postprocess;
pub mod segmenter;
pub mod sid;
pub mod tokenizer;

pub use config::{
    PerformanceConfig, PipelineConfig, PostprocessOptions, SegmenterConfig, TokenizerConfig,
};
pub use conllu::{Document, SentenceRecord, SentenceRef, Token, TokenId};
pub use error::{Error, Result};
pub use language::LanguageTables;
pub use lexicon::{Analysis, Lexicon, LexiconBuilder, PosTag};
pub use pipeline::{CommandModel, ParsingModel, Pipeline};
pub use postprocess::{Change, PostProcessor, Report, TagCategory, UsualForms};
pub use segmenter::{segment, Segmenter};
pub use sid::next_name;
pub use tokenizer::{match_pairs, trim, TaggedSentence, Tokenizer};
