//! Element dataset loading and validation
//! A dataset is accepted whole or rejected whole; nothing is partially rendered.

use crate::constants::EMBEDDED_DATASET;
use crate::types::{ElementDataset, ElementRecord};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset contains no elements")]
    Empty,
    #[error("element {symbol:?} has atomic number 0")]
    InvalidNumber { symbol: String },
    #[error("atomic number {number} appears more than once")]
    DuplicateNumber { number: u32 },
    #[error("element {number} has no symbol")]
    MissingSymbol { number: u32 },
    #[error("element {number} has no name")]
    MissingName { number: u32 },
}

/// Parse and validate a JSON dataset document
pub fn parse(json: &str) -> Result<Vec<ElementRecord>, DatasetError> {
    let dataset: ElementDataset = serde_json::from_str(json)?;
    validate(&dataset.elements)?;
    Ok(dataset.elements)
}

fn validate(elements: &[ElementRecord]) -> Result<(), DatasetError> {
    if elements.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut seen = HashSet::with_capacity(elements.len());
    for element in elements {
        if element.number == 0 {
            return Err(DatasetError::InvalidNumber {
                symbol: element.symbol.clone(),
            });
        }
        if element.symbol.trim().is_empty() {
            return Err(DatasetError::MissingSymbol {
                number: element.number,
            });
        }
        if element.name.trim().is_empty() {
            return Err(DatasetError::MissingName {
                number: element.number,
            });
        }
        if !seen.insert(element.number) {
            return Err(DatasetError::DuplicateNumber {
                number: element.number,
            });
        }
    }
    Ok(())
}

pub fn load_embedded() -> Result<Vec<ElementRecord>, DatasetError> {
    parse(EMBEDDED_DATASET)
}

pub fn load_file(path: &Path) -> Result<Vec<ElementRecord>, DatasetError> {
    let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let elements = parse(&json)?;
    debug!(path = %path.display(), count = elements.len(), "Dataset file parsed");
    Ok(elements)
}

/// Load the override file when configured, falling back to the bundled
/// dataset if it is rejected.
pub fn load(override_path: Option<&Path>) -> Result<Vec<ElementRecord>, DatasetError> {
    if let Some(path) = override_path {
        match load_file(path) {
            Ok(elements) => {
                info!(path = %path.display(), count = elements.len(), "Loaded dataset");
                return Ok(elements);
            }
            Err(e) => {
                error!(error = %e, path = %path.display(), "Dataset rejected, using bundled dataset");
            }
        }
    }

    let elements = load_embedded()?;
    info!(count = elements.len(), "Loaded bundled dataset");
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(elements: &str) -> String {
        format!(r#"{{"elements": [{}]}}"#, elements)
    }

    #[test]
    fn embedded_dataset_is_valid() {
        let elements = load_embedded().unwrap();
        assert_eq!(elements.len(), 119);
        assert_eq!(elements[0].symbol, "H");
        assert_eq!(elements[0].periodic_position(), (1, 1));
        assert!(elements.iter().any(|e| e.symbol == "Og" && e.number == 118));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(parse(&doc("")), Err(DatasetError::Empty)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(parse("{\"elements\": ["), Err(DatasetError::Parse(_))));
        // number is required
        let missing = doc(r#"{"name": "Hydrogen", "symbol": "H", "category": "diatomic nonmetal"}"#);
        assert!(matches!(parse(&missing), Err(DatasetError::Parse(_))));
    }

    #[test]
    fn rejects_zero_number() {
        let json = doc(r#"{"name": "Nothing", "number": 0, "symbol": "X", "category": "unknown"}"#);
        assert!(matches!(parse(&json), Err(DatasetError::InvalidNumber { .. })));
    }

    #[test]
    fn rejects_duplicates() {
        let json = doc(
            r#"{"name": "Hydrogen", "number": 1, "symbol": "H", "category": "diatomic nonmetal"},
               {"name": "Deuterium", "number": 1, "symbol": "D", "category": "diatomic nonmetal"}"#,
        );
        match parse(&json) {
            Err(DatasetError::DuplicateNumber { number }) => assert_eq!(number, 1),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_blank_text() {
        let no_symbol = doc(r#"{"name": "Hydrogen", "number": 1, "symbol": " ", "category": "x"}"#);
        assert!(matches!(parse(&no_symbol), Err(DatasetError::MissingSymbol { number: 1 })));
        let no_name = doc(r#"{"name": "", "number": 2, "symbol": "He", "category": "x"}"#);
        assert!(matches!(parse(&no_name), Err(DatasetError::MissingName { number: 2 })));
    }

    #[test]
    fn missing_override_falls_back_to_bundled() {
        let path = std::env::temp_dir().join("periodic-table-missing-dataset.json");
        assert!(matches!(load_file(&path), Err(DatasetError::Read { .. })));
        let elements = load(Some(&path)).unwrap();
        assert_eq!(elements.len(), 119);
    }
}
