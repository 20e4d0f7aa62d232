//! Game records and the storage seam the matcher reads from.
//!
//! The matcher never owns storage. It talks to a `Corpus`, which lists the
//! known record names and resolves one name to a full `GameRecord`.
//! `MemoryCorpus` is an ordered in-memory implementation.

use crate::image::SampleBuffer;
use crate::util::{SigMatchError, SigMatchResult};

/// A catalogued game and its reference signature.
#[derive(Clone, Debug, PartialEq)]
pub struct GameRecord {
    /// Unique, non-empty identifier within the corpus.
    pub name: String,
    /// Reference signature compared against queries.
    pub signature: SampleBuffer,
    /// Publisher or studio.
    pub editor: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Release year.
    pub year: Option<i32>,
}

impl GameRecord {
    /// Creates a record without metadata.
    pub fn new(name: impl Into<String>, signature: SampleBuffer) -> Self {
        Self {
            name: name.into(),
            signature,
            editor: None,
            description: None,
            year: None,
        }
    }

    /// Sets the editor.
    pub fn with_editor(mut self, editor: impl Into<String>) -> Self {
        self.editor = Some(editor.into());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the release year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// Read access to a collection of named game records.
pub trait Corpus {
    /// Returns the names of all known records, in scan order.
    fn names(&self) -> SigMatchResult<Vec<String>>;

    /// Resolves a name to its full record.
    ///
    /// Fails with `UnknownRecord` when the name is not stored.
    fn record(&self, name: &str) -> SigMatchResult<GameRecord>;
}

impl<C: Corpus + ?Sized> Corpus for &C {
    fn names(&self) -> SigMatchResult<Vec<String>> {
        (**self).names()
    }

    fn record(&self, name: &str) -> SigMatchResult<GameRecord> {
        (**self).record(name)
    }
}

/// In-memory corpus that scans records in insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemoryCorpus {
    records: Vec<GameRecord>,
}

impl MemoryCorpus {
    /// Creates an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a corpus from records in scan order.
    ///
    /// Fails on the first empty or repeated name.
    pub fn from_records<I>(records: I) -> SigMatchResult<Self>
    where
        I: IntoIterator<Item = GameRecord>,
    {
        let mut corpus = Self::new();
        for record in records {
            corpus.insert(record)?;
        }
        Ok(corpus)
    }

    /// Appends a record, rejecting empty or already-stored names.
    pub fn insert(&mut self, record: GameRecord) -> SigMatchResult<()> {
        if record.name.is_empty() {
            return Err(SigMatchError::EmptyName);
        }
        if self.position(&record.name).is_some() {
            return Err(SigMatchError::DuplicateRecord { name: record.name });
        }
        self.records.push(record);
        Ok(())
    }

    /// Removes and returns the record stored under `name`.
    pub fn remove(&mut self, name: &str) -> SigMatchResult<GameRecord> {
        let idx = self
            .position(name)
            .ok_or_else(|| SigMatchError::UnknownRecord {
                name: name.to_string(),
            })?;
        Ok(self.records.remove(idx))
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the stored records in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &GameRecord> {
        self.records.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }
}

impl Corpus for MemoryCorpus {
    fn names(&self) -> SigMatchResult<Vec<String>> {
        Ok(self.records.iter().map(|r| r.name.clone()).collect())
    }

    fn record(&self, name: &str) -> SigMatchResult<GameRecord> {
        self.position(name)
            .map(|idx| self.records[idx].clone())
            .ok_or_else(|| SigMatchError::UnknownRecord {
                name: name.to_string(),
            })
    }
}
