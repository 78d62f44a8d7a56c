//! Change log and counters of a post-processing run

use std::fmt;
use std::io::{self, Write};

/// Field a correction applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Lemma,
    Feats,
}

impl Field {
    fn prefix(self) -> char {
        match self {
            Field::Lemma => 'L',
            Field::Feats => 'F',
        }
    }

    fn index(self) -> usize {
        match self {
            Field::Lemma => 0,
            Field::Feats => 1,
        }
    }
}

/// Rule that produced a correction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Form absent from the lexicon under its tag
    NoLexicon,
    /// Exactly one lexicon analysis
    SingleCandidate,
    /// Several lexicon analyses
    ManyCandidates,
    UnknownTag,
    Weekday,
    Month,
    UsualAbbreviation,
    Ordinal,
    /// Value replaced because of the tag alone (`X`, `PROPN`, digits)
    ReplacedByTag,
}

impl Rule {
    pub const ALL: [Rule; 9] = [
        Rule::NoLexicon,
        Rule::SingleCandidate,
        Rule::ManyCandidates,
        Rule::UnknownTag,
        Rule::Weekday,
        Rule::Month,
        Rule::UsualAbbreviation,
        Rule::Ordinal,
        Rule::ReplacedByTag,
    ];

    fn suffix(self) -> &'static str {
        match self {
            Rule::NoLexicon => "noLEX",
            Rule::SingleCandidate => "1LEX",
            Rule::ManyCandidates => "mLEX",
            Rule::UnknownTag => "unkTAG",
            Rule::Weekday => "daysW",
            Rule::Month => "month",
            Rule::UsualAbbreviation => "uAbbr",
            Rule::Ordinal => "ord",
            Rule::ReplacedByTag => "repTAG",
        }
    }

    fn index(self) -> usize {
        Rule::ALL.iter().position(|rule| *rule == self).unwrap_or(0)
    }
}

/// Report label of a field/rule pair (`L1LEX`, `FrepTAG`)
pub fn label(field: Field, rule: Rule) -> String {
    format!("{}{}", field.prefix(), rule.suffix())
}

/// One rewritten field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub sid: String,
    pub token_id: String,
    pub form: String,
    pub field: Field,
    pub rule: Rule,
    pub old: String,
    pub new: String,
}

impl Change {
    pub fn label(&self) -> String {
        label(self.field, self.rule)
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.sid,
            self.token_id,
            self.form,
            self.label(),
            self.old,
            self.new
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    changes: Vec<Change>,
    changed: [usize; 2],
    counters: [[usize; Rule::ALL.len()]; 2],
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, change: Change) {
        let field = change.field.index();
        self.changed[field] += 1;
        self.counters[field][change.rule.index()] += 1;
        self.changes.push(change);
    }

    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Total corrections of a field
    pub fn changed(&self, field: Field) -> usize {
        self.changed[field.index()]
    }

    pub fn count(&self, field: Field, rule: Rule) -> usize {
        self.counters[field.index()][rule.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Counter lines, lemma counters first
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for field in [Field::Lemma, Field::Feats] {
            let total = format!("{}changed", field.prefix());
            out.push_str(&format!("{total:8} - fixed: {}\n", self.changed(field)));
            for rule in Rule::ALL {
                out.push_str(&format!(
                    "{:8} - fixed: {}\n",
                    label(field, rule),
                    self.count(field, rule)
                ));
            }
        }
        out
    }

    /// Write the change log (unless `quiet`) followed by the counters
    pub fn write_tsv<W: Write>(&self, writer: &mut W, quiet: bool) -> io::Result<()> {
        if !quiet {
            for change in &self.changes {
                writeln!(writer, "{change}")?;
            }
        }
        writeln!(writer)?;
        writeln!(writer, "{}", "=".repeat(58))?;
        writeln!(writer)?;
        writer.write_all(self.summary().as_bytes())?;
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(field: Field, rule: Rule) -> Change {
        Change {
            sid: "S000001".to_string(),
            token_id: "3".to_string(),
            form: "Dr.".to_string(),
            field,
            rule,
            old: "Dr.".to_string(),
            new: "doutor".to_string(),
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(label(Field::Lemma, Rule::SingleCandidate), "L1LEX");
        assert_eq!(label(Field::Feats, Rule::ReplacedByTag), "FrepTAG");
        assert_eq!(label(Field::Lemma, Rule::Weekday), "LdaysW");
    }

    #[test]
    fn test_counters() {
        let mut report = Report::new();
        report.record(change(Field::Lemma, Rule::UsualAbbreviation));
        report.record(change(Field::Feats, Rule::UsualAbbreviation));
        report.record(change(Field::Lemma, Rule::NoLexicon));

        assert_eq!(report.changed(Field::Lemma), 2);
        assert_eq!(report.changed(Field::Feats), 1);
        assert_eq!(report.count(Field::Lemma, Rule::UsualAbbreviation), 1);
        assert_eq!(report.count(Field::Feats, Rule::NoLexicon), 0);
        assert_eq!(report.changes().len(), 3);
    }

    #[test]
    fn test_write_tsv() {
        let mut report = Report::new();
        report.record(change(Field::Lemma, Rule::UsualAbbreviation));

        let mut out = Vec::new();
        report.write_tsv(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("S000001\t3\tDr.\tLuAbbr\tDr.\tdoutor\n"));
        assert!(text.contains("Lchanged - fixed: 1\n"));
        assert!(text.contains("LuAbbr   - fixed: 1\n"));
        assert!(text.contains("FrepTAG  - fixed: 0\n"));
        assert_eq!(text.lines().filter(|l| l.contains(" - fixed: ")).count(), 20);

        let mut quiet = Vec::new();
        report.write_tsv(&mut quiet, true).unwrap();
        let text = String::from_utf8(quiet).unwrap();
        assert!(!text.contains("doutor"));
        assert!(text.contains("Lchanged - fixed: 1\n"));
    }
}
