//! SigMatch identifies which game a captured frame belongs to by comparing a
//! grayscale signature against a corpus of reference signatures.
//!
//! The crate provides a resolution-independent signed distance between two
//! `u8` grids of possibly different sizes, and a linear scan that returns the
//! closest corpus record. Storage is abstracted behind the [`Corpus`] trait;
//! parallel scanning is available via the `rayon` feature.

pub mod corpus;
pub mod image;
pub mod metric;
pub mod remap;
pub mod search;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use image::io;

pub use corpus::{Corpus, GameRecord, MemoryCorpus};
pub use image::{SampleBuffer, SampleView};
pub use metric::{compare, signature_distance, Comparison};
pub use remap::remap;
pub use search::{find_best_match, MatchConfig, MatchResult, Matcher, MaybeSync};
pub use util::{SigMatchError, SigMatchResult};

#[cfg(feature = "rayon")]
pub use search::find_best_match_par;
