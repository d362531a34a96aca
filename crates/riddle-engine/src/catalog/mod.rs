use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single puzzle: level number, display text and canonical answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleRecord {
    /// 1-based level number. The record at catalog index `i` has level `i + 1`.
    pub level: u32,
    /// Short headline shown on the playing screen.
    pub title: String,
    /// Puzzle body text. Opaque to the engine; may contain simple
    /// line-break markup the host renders.
    pub description: String,
    /// Canonical expected answer.
    pub answer: String,
}

impl PuzzleRecord {
    /// Whether `raw_input` matches this record's answer.
    ///
    /// Both sides are normalized (trimmed and uppercased) and compared for
    /// exact equality. No fuzzy matching, no partial credit.
    pub fn matches(&self, raw_input: &str) -> bool {
        normalize_answer(raw_input) == normalize_answer(&self.answer)
    }
}

/// Normalize an answer for comparison: trim surrounding whitespace, uppercase.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Failures when constructing a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON document could not be parsed.
    #[error("catalog JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),
    /// A catalog must contain at least one puzzle.
    #[error("catalog contains no puzzles")]
    Empty,
    /// Level numbers must be dense and ordered: index `i` holds level `i + 1`.
    #[error("puzzle at index {index} has level {found}, expected {expected}")]
    NonSequentialLevel {
        index: usize,
        expected: u32,
        found: u32,
    },
    /// An answer that normalizes to the empty string would let an empty
    /// submission win; rejected at construction.
    #[error("puzzle level {level} has an answer that normalizes to empty")]
    EmptyAnswer { level: u32 },
}

/// JSON document shape for a catalog, loaded at runtime by the web bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogDoc {
    puzzles: Vec<PuzzleRecord>,
}

/// The fixed, ordered list of puzzles for one game.
///
/// Order defines progression order. A constructed catalog is guaranteed
/// non-empty with dense `1..=N` level numbering; there are no mutation
/// operations.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PuzzleRecord>,
}

impl Catalog {
    /// Build a catalog from records, validating the ordering invariants.
    pub fn new(records: Vec<PuzzleRecord>) -> Result<Self, CatalogError> {
        Self::validate(&records)?;
        Ok(Self { records })
    }

    /// Parse a catalog from a JSON document: `{"puzzles": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc: CatalogDoc = serde_json::from_str(json)?;
        Self::new(doc.puzzles)
    }

    fn validate(records: &[PuzzleRecord]) -> Result<(), CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (index, record) in records.iter().enumerate() {
            let expected = index as u32 + 1;
            if record.level != expected {
                return Err(CatalogError::NonSequentialLevel {
                    index,
                    expected,
                    found: record.level,
                });
            }
            if normalize_answer(&record.answer).is_empty() {
                return Err(CatalogError::EmptyAnswer {
                    level: record.level,
                });
            }
        }
        Ok(())
    }

    /// Get the record at `index`. Returns `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&PuzzleRecord> {
        self.records.get(index)
    }

    /// Record at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range. The progression controller never
    /// requests an invalid index, so hitting this is a wiring bug.
    pub fn record(&self, index: usize) -> &PuzzleRecord {
        &self.records[index]
    }

    /// Number of puzzles.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty. Always `false` for a constructed
    /// catalog; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in progression order.
    pub fn iter(&self) -> impl Iterator<Item = &PuzzleRecord> {
        self.records.iter()
    }
}
