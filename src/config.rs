//! Layered configuration.
//!
//! Uses Figment to merge built-in defaults, an optional TOML file
//! (`notesum.toml` in the working directory unless another path is given)
//! and `NOTESUM_*` environment variables, in increasing priority. The
//! binary applies command-line flags on top.
//!
//! ```toml
//! notes_dir = "lectures"
//! output_dir = "summaries"
//! summary_type = "mixed"
//! extensions = [".txt", ".md"]
//! language = "en"
//! chunk_size = 8000
//! ```

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::notes::DEFAULT_EXTENSIONS;
use crate::stopwords::Language;
use crate::summary::{EngineOptions, SummaryKind};
use crate::{ChunkCapacity, Error, Result};

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "notesum.toml";

/// Prefix of environment overrides, e.g. `NOTESUM_LANGUAGE=en`.
pub const ENV_PREFIX: &str = "NOTESUM_";

/// Everything a batch run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned for notes.
    pub notes_dir: PathBuf,
    /// Directory summaries are written to.
    pub output_dir: PathBuf,
    /// Summary shape.
    #[serde(rename = "summary_type")]
    pub summary_kind: SummaryKind,
    /// File extensions to pick up.
    pub extensions: Vec<String>,
    /// Note language.
    pub language: Language,
    /// Reproducibility seed. Accepted and logged; nothing is randomized.
    pub seed: u64,
    /// Keywords extracted per chunk and kept per file.
    pub max_keywords: usize,
    /// Documents longer than this many characters are chunked.
    pub chunk_size: usize,
    /// Chunk flush threshold; three quarters of `chunk_size` when unset.
    pub min_chunk_size: Option<usize>,
    /// Sentences selected per sentence summary.
    pub summary_sentences: usize,
    /// Also write `<basename>_simple_summary.md` for each note.
    pub simple_summary: bool,
    /// Debug-level logging.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notes_dir: PathBuf::from("notes"),
            output_dir: PathBuf::from("summaries"),
            summary_kind: SummaryKind::default(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect(),
            language: Language::default(),
            seed: 42,
            max_keywords: 50,
            chunk_size: 8000,
            min_chunk_size: None,
            summary_sentences: 5,
            simple_summary: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Load defaults, then `file` (or `notesum.toml`), then the environment,
    /// and validate the result.
    ///
    /// A missing default file is ignored; a missing explicit `file` is an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when a source cannot be parsed or
    /// the merged values fail [`Config::validate`].
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let config = Self::load_unvalidated(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but leaves validation to the caller.
    ///
    /// For callers that layer more overrides (command-line flags) on top and
    /// validate once at the end.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] when a source is missing or cannot be
    /// parsed.
    pub fn load_unvalidated(file: Option<&Path>) -> Result<Self> {
        let toml = match file {
            Some(path) if !path.is_file() => {
                return Err(Error::InvalidConfig(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Toml::file(path),
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };

        Figment::from(Serialized::defaults(Self::default()))
            .merge(toml)
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }

    /// Check value ranges and chunk size consistency.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] or [`Error::InvalidChunkCapacity`].
    pub fn validate(&self) -> Result<()> {
        if self.max_keywords == 0 {
            return Err(Error::InvalidConfig("max_keywords must be > 0".into()));
        }
        if self.summary_sentences == 0 {
            return Err(Error::InvalidConfig("summary_sentences must be > 0".into()));
        }
        if self.extensions.iter().all(|e| e.trim().trim_start_matches('.').is_empty()) {
            return Err(Error::InvalidConfig("extensions must not be empty".into()));
        }
        self.capacity()?;
        Ok(())
    }

    /// Chunk capacity derived from `chunk_size` and `min_chunk_size`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkCapacity`] when `chunk_size` is zero or
    /// smaller than `min_chunk_size`.
    pub fn capacity(&self) -> Result<ChunkCapacity> {
        let min = self
            .min_chunk_size
            .unwrap_or_else(|| ChunkCapacity::for_max(self.chunk_size).min());
        Ok(ChunkCapacity::new(self.chunk_size).with_min(min)?)
    }

    /// Options for the summary engine.
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            language: self.language,
            max_keywords: self.max_keywords,
            summary_sentences: self.summary_sentences,
            seed: self.seed,
        }
    }
}
