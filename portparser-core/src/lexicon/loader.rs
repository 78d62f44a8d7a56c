//! Lexicon loading from tab-separated tables
//!
//! Two layouts are accepted:
//! - a single table with rows `form \t lemma \t TAG \t features`
//! - a directory with one `<TAG>.tsv` file per tag, rows `form \t lemma \t features`
//!
//! Blank lines and lines starting with `#` are ignored.

use super::{Lexicon, LexiconBuilder, PosTag};
use crate::error::{Error, Result};
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

impl Lexicon {
    /// Load a single four-column table
    pub fn from_tsv<R: Read>(reader: R) -> Result<Self> {
        let mut builder = LexiconBuilder::new();
        read_rows(reader, &mut builder, None)?;
        Ok(builder.build())
    }

    /// Load every `<TAG>.tsv` table found in a directory
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let mut builder = LexiconBuilder::new();
        let mut tables = 0;
        for tag in PosTag::ALL {
            let path = dir.join(format!("{}.tsv", tag.as_str()));
            if !path.is_file() {
                log::debug!("No lexicon table for {tag} in {}", dir.display());
                continue;
            }
            read_rows(fs::File::open(&path)?, &mut builder, Some(tag))?;
            tables += 1;
        }
        if tables == 0 {
            return Err(Error::Config(format!(
                "no lexicon tables found in {}",
                dir.display()
            )));
        }
        let lexicon = builder.build();
        log::info!(
            "Loaded {} analyses from {} lexicon tables",
            lexicon.len(),
            tables
        );
        Ok(lexicon)
    }

    /// Load from a directory of per-tag tables or from a single table file
    pub fn load_path(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Self::load_dir(path)
        } else {
            Self::from_tsv(fs::File::open(path)?)
        }
    }
}

fn read_rows<R: Read>(reader: R, builder: &mut LexiconBuilder, tag: Option<PosTag>) -> Result<()> {
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let line_no = index + 1;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        match (tag, fields.as_slice()) {
            (Some(tag), [form, lemma, features, ..]) => {
                builder.insert(*form, tag, *lemma, *features);
            }
            (None, [form, lemma, pos, features, ..]) => {
                let pos = pos
                    .parse::<PosTag>()
                    .map_err(|reason| Error::Lexicon { line: line_no, reason })?;
                builder.insert(*form, pos, *lemma, *features);
            }
            _ => {
                return Err(Error::Lexicon {
                    line: line_no,
                    reason: format!("too few columns ({})", fields.len()),
                })
            }
        }
    }
    Ok(())
}
