//! Directory-backed game corpus.
//!
//! A corpus directory holds `corpus.json` plus one grayscale signature image
//! per game. Signatures are decoded lazily, when the matcher asks for a record.

use serde::{Deserialize, Serialize};
use sigmatch::io::{load_signature, save_signature};
use sigmatch::{Corpus, GameRecord, SigMatchError, SigMatchResult};
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "corpus.json";
const MANIFEST_TMP_FILE: &str = "corpus.json.tmp";

#[derive(Debug, Default, Deserialize, Serialize)]
struct Manifest {
    games: Vec<ManifestEntry>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
struct ManifestEntry {
    name: String,
    signature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    year: Option<i32>,
}

pub struct DirCorpus {
    root: PathBuf,
    manifest: Manifest,
}

impl DirCorpus {
    /// Opens a corpus directory; a missing manifest is an empty corpus.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self, Box<dyn std::error::Error>> {
        let root = root.as_ref().to_path_buf();
        let path = root.join(MANIFEST_FILE);
        let manifest = if path.is_file() {
            serde_json::from_str(&fs::read_to_string(&path)?)?
        } else {
            Manifest::default()
        };
        Ok(Self { root, manifest })
    }

    /// Stores a new game: writes its signature image and rewrites the manifest.
    pub fn add(&mut self, record: &GameRecord) -> Result<(), Box<dyn std::error::Error>> {
        if record.name.is_empty() {
            return Err(SigMatchError::EmptyName.into());
        }
        if self.entry(&record.name).is_some() {
            return Err(SigMatchError::DuplicateRecord {
                name: record.name.clone(),
            }
            .into());
        }

        fs::create_dir_all(&self.root)?;
        let file_name = self.unused_file_name(&record.name);
        save_signature(&record.signature, self.root.join(&file_name))?;

        self.manifest.games.push(ManifestEntry {
            name: record.name.clone(),
            signature: file_name.clone(),
            editor: record.editor.clone(),
            description: record.description.clone(),
            year: record.year,
        });
        if let Err(err) = self.write_manifest() {
            self.manifest.games.pop();
            let _ = fs::remove_file(self.root.join(&file_name));
            return Err(err);
        }
        Ok(())
    }

    /// Replaces the manifest through a temporary file so readers never see a partial one.
    fn write_manifest(&self) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(&self.manifest)?;
        let tmp = self.root.join(MANIFEST_TMP_FILE);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, self.root.join(MANIFEST_FILE))?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.manifest.games.len()
    }

    fn entry(&self, name: &str) -> Option<&ManifestEntry> {
        self.manifest.games.iter().find(|e| e.name == name)
    }

    fn unused_file_name(&self, name: &str) -> String {
        let stem: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        let mut candidate = format!("{stem}.png");
        let mut suffix = 1;
        while self.root.join(&candidate).exists()
            || self.manifest.games.iter().any(|e| e.signature == candidate)
        {
            candidate = format!("{stem}_{suffix}.png");
            suffix += 1;
        }
        candidate
    }
}

impl Corpus for DirCorpus {
    fn names(&self) -> SigMatchResult<Vec<String>> {
        Ok(self.manifest.games.iter().map(|e| e.name.clone()).collect())
    }

    fn record(&self, name: &str) -> SigMatchResult<GameRecord> {
        let entry = self.entry(name).ok_or_else(|| SigMatchError::UnknownRecord {
            name: name.to_string(),
        })?;
        let signature =
            load_signature(self.root.join(&entry.signature)).map_err(|err| SigMatchError::Lookup {
                name: name.to_string(),
                reason: err.to_string(),
            })?;
        Ok(GameRecord {
            name: entry.name.clone(),
            signature,
            editor: entry.editor.clone(),
            description: entry.description.clone(),
            year: entry.year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DirCorpus, MANIFEST_FILE, MANIFEST_TMP_FILE};
    use sigmatch::{Corpus, GameRecord, Matcher, SampleBuffer, SigMatchError};

    #[test]
    fn added_games_are_matched_after_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut corpus = DirCorpus::open(dir.path()).unwrap();
        assert_eq!(corpus.len(), 0);

        let doom = GameRecord::new("Doom II", SampleBuffer::filled(20, 8, 4).unwrap())
            .with_editor("id Software")
            .with_year(1994);
        let myst = GameRecord::new("Myst", SampleBuffer::filled(90, 8, 4).unwrap());
        corpus.add(&doom).unwrap();
        corpus.add(&myst).unwrap();
        assert!(dir.path().join(MANIFEST_FILE).is_file());
        assert!(dir.path().join("Doom_II.png").is_file());

        let reopened = DirCorpus::open(dir.path()).unwrap();
        assert_eq!(reopened.names().unwrap(), vec!["Doom II", "Myst"]);

        let query = SampleBuffer::filled(20, 16, 8).unwrap();
        let result = Matcher::new(&reopened).find(query.view()).unwrap();
        let best = result.best.unwrap();
        assert_eq!(best.name, "Doom II");
        assert_eq!(best.editor.as_deref(), Some("id Software"));
        assert_eq!(best.year, Some(1994));
        assert_eq!(result.distance, 0.0);
    }

    #[test]
    fn duplicate_names_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut corpus = DirCorpus::open(dir.path()).unwrap();
        let record = GameRecord::new("Myst", SampleBuffer::filled(1, 2, 2).unwrap());
        corpus.add(&record).unwrap();
        assert!(corpus.add(&record).is_err());
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn missing_signature_file_is_a_lookup_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut corpus = DirCorpus::open(dir.path()).unwrap();
        let record = GameRecord::new("Myst", SampleBuffer::filled(1, 2, 2).unwrap());
        corpus.add(&record).unwrap();
        std::fs::remove_file(dir.path().join("Myst.png")).unwrap();

        let err = corpus.record("Myst").unwrap_err();
        assert!(matches!(err, SigMatchError::Lookup { ref name, .. } if name == "Myst"));
    }

    #[test]
    fn failed_manifest_write_leaves_no_signature_behind() {
        let dir = tempfile::tempdir().unwrap();
        let mut corpus = DirCorpus::open(dir.path()).unwrap();
        corpus
            .add(&GameRecord::new("Myst", SampleBuffer::filled(1, 2, 2).unwrap()))
            .unwrap();

        // A directory at the temp path makes the manifest write fail.
        std::fs::create_dir(dir.path().join(MANIFEST_TMP_FILE)).unwrap();
        let riven = GameRecord::new("Riven", SampleBuffer::filled(2, 2, 2).unwrap());
        assert!(corpus.add(&riven).is_err());
        assert_eq!(corpus.len(), 1);
        assert!(!dir.path().join("Riven.png").exists());

        std::fs::remove_dir(dir.path().join(MANIFEST_TMP_FILE)).unwrap();
        corpus.add(&riven).unwrap();
        assert!(dir.path().join("Riven.png").is_file());

        let reopened = DirCorpus::open(dir.path()).unwrap();
        assert_eq!(reopened.names().unwrap(), vec!["Myst", "Riven"]);
    }
}
