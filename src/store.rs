//! Model artifact storage.
//!
//! One bincode-encoded [`FittedPipeline`] per word, at
//! `{dir}/{word}_model.bin`.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Result, TwosenseError};
use crate::pipeline::FittedPipeline;
use crate::word::TargetWord;

/// Environment variable naming the default models directory.
pub const MODELS_DIR_ENV: &str = "TWOSENSE_MODELS_DIR";

/// Directory used when nothing else is configured.
pub const DEFAULT_MODELS_DIR: &str = "models";

/// A directory of per-word model artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStore {
    dir: PathBuf,
}

impl ModelStore {
    /// Use `dir` for artifacts. The directory is created on first save.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Use `$TWOSENSE_MODELS_DIR`, falling back to `./models`.
    pub fn from_env() -> Self {
        match std::env::var_os(MODELS_DIR_ENV) {
            Some(dir) => Self::new(dir),
            None => Self::new(DEFAULT_MODELS_DIR),
        }
    }

    /// Where the artifact for `word` lives.
    pub fn path_for(&self, word: TargetWord) -> PathBuf {
        self.dir.join(word.model_file_name())
    }

    pub fn exists(&self, word: TargetWord) -> bool {
        self.path_for(word).is_file()
    }

    /// Write the artifact for the pipeline's word, replacing any previous one.
    ///
    /// The bytes go to a temporary file in the same directory which is then
    /// renamed over the target, so a reader never sees a partial artifact.
    pub fn save(&self, pipeline: &FittedPipeline) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(pipeline.word());

        let temp_file = NamedTempFile::new_in(&self.dir)?;
        {
            let writer = BufWriter::new(&temp_file);
            bincode::serialize_into(writer, pipeline)?;
        }
        temp_file.persist(&path).map_err(|e| e.error)?;

        info!(word = %pipeline.word(), path = %path.display(), "saved model");
        Ok(path)
    }

    /// Read the artifact for `word`.
    ///
    /// Fails with [`TwosenseError::NotFound`] if training has not produced it.
    pub fn load(&self, word: TargetWord) -> Result<FittedPipeline> {
        let path = self.path_for(word);
        if !path.is_file() {
            return Err(TwosenseError::not_found(word.as_str(), path));
        }

        let reader = BufReader::new(File::open(&path)?);
        let pipeline: FittedPipeline = bincode::deserialize_from(reader)?;
        if pipeline.word() != word {
            return Err(TwosenseError::serialization(format!(
                "{} holds a model for '{}', expected '{word}'",
                path.display(),
                pipeline.word()
            )));
        }

        debug!(%word, path = %path.display(), width = pipeline.width(), "loaded model");
        Ok(pipeline)
    }
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new(DEFAULT_MODELS_DIR)
    }
}
