use super::LanguageTables;
use crate::error::Result;
use std::sync::OnceLock;

static PORTUGUESE: OnceLock<LanguageTables> = OnceLock::new();

const EMBEDDED_PORTUGUESE: &str = include_str!("../../configs/portuguese.toml");

fn load_embedded() -> Result<LanguageTables> {
    let tables = LanguageTables::from_toml_str(EMBEDDED_PORTUGUESE)?;
    log::debug!(
        "Loaded embedded {} tables: {} abbreviations",
        tables.language_name(),
        tables.abbreviations().len()
    );
    Ok(tables)
}

/// Built-in Portuguese tables, parsed on first use
pub fn portuguese() -> &'static LanguageTables {
    PORTUGUESE.get_or_init(|| load_embedded().expect("Failed to load embedded language tables"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_parse() {
        let tables = load_embedded().unwrap();
        assert_eq!(tables.language_code(), "pt");
        assert!(!tables.usual_forms().is_empty());
    }

    #[test]
    fn test_portuguese_multiple_times() {
        let first = portuguese();
        let second = portuguese();
        assert!(std::ptr::eq(first, second));
    }
}
