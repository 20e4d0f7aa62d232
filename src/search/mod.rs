//! Nearest-signature search over a corpus.
//!
//! The scan evaluates the query against every corpus record in order, always
//! passing the query as the first metric argument, and keeps the record with
//! the strictly smallest distance. Equal distances keep the earlier record.
//! Any lookup failure aborts the scan; no partial best is returned.

pub(crate) mod scan;

#[cfg(feature = "rayon")]
pub(crate) mod parallel;

use crate::corpus::{Corpus, GameRecord};
use crate::image::SampleView;
use crate::util::SigMatchResult;

pub use scan::find_best_match;

#[cfg(feature = "rayon")]
pub use parallel::find_best_match_par;

/// Outcome of a corpus scan.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    /// Closest record, or `None` when the corpus is empty.
    pub best: Option<GameRecord>,
    /// Distance of `best` to the query; `f32::INFINITY` when there is no match.
    pub distance: f32,
}

impl MatchResult {
    /// The result of scanning an empty corpus.
    pub fn no_match() -> Self {
        Self {
            best: None,
            distance: f32::INFINITY,
        }
    }

    /// Returns true when a record was selected.
    pub fn is_match(&self) -> bool {
        self.best.is_some()
    }

    /// Returns the name of the selected record.
    pub fn name(&self) -> Option<&str> {
        self.best.as_ref().map(|r| r.name.as_str())
    }
}

/// Configuration for corpus scans.
#[derive(Clone, Debug, Default)]
pub struct MatchConfig {
    /// Scores candidates on the rayon thread pool (requires the `rayon` feature).
    ///
    /// Without the feature the scan runs sequentially.
    pub parallel: bool,
}

#[cfg(feature = "rayon")]
mod bounds {
    /// Corpora scanned in parallel must be shareable across threads.
    pub trait MaybeSync: Sync {}
    impl<T: Sync + ?Sized> MaybeSync for T {}
}

#[cfg(not(feature = "rayon"))]
mod bounds {
    /// Placeholder bound; sequential scans impose no thread-safety requirement.
    pub trait MaybeSync {}
    impl<T: ?Sized> MaybeSync for T {}
}

pub use bounds::MaybeSync;

/// Front-end pairing a corpus with a scan configuration.
pub struct Matcher<C> {
    corpus: C,
    cfg: MatchConfig,
}

impl<C: Corpus + MaybeSync> Matcher<C> {
    /// Creates a matcher with the default (sequential) configuration.
    pub fn new(corpus: C) -> Self {
        Self {
            corpus,
            cfg: MatchConfig::default(),
        }
    }

    /// Replaces the scan configuration.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Returns the underlying corpus.
    pub fn corpus(&self) -> &C {
        &self.corpus
    }

    /// Finds the corpus record closest to `query`.
    pub fn find(&self, query: SampleView<'_>) -> SigMatchResult<MatchResult> {
        let names = self.corpus.names()?;
        #[cfg(feature = "rayon")]
        {
            if self.cfg.parallel {
                return find_best_match_par(query, &names, |name| self.corpus.record(name));
            }
        }
        find_best_match(query, &names, |name| self.corpus.record(name))
    }
}
