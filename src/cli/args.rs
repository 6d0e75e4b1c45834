//! Command line argument parsing for the Twosense CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::store::{DEFAULT_MODELS_DIR, MODELS_DIR_ENV};
use crate::train::{DATA_DIR_ENV, TrainConfig};
use crate::word::TargetWord;

/// Twosense - two-sense word disambiguation for "director", "overtime" and "rubbish"
#[derive(Parser, Debug, Clone)]
#[command(name = "twosense")]
#[command(about = "Train and apply two-sense disambiguation models")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TwosenseArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TwosenseArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train models from corpus files
    Train(TrainArgs),

    /// Predict senses for a file of sentences
    Predict(PredictArgs),

    /// Score a stored model against a labeled file
    Evaluate(EvaluateArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Directory containing `{word}.txt` corpus files
    #[arg(long, value_name = "DIR", env = DATA_DIR_ENV)]
    pub base_dir: Option<PathBuf>,

    /// Directory to write model artifacts to
    #[arg(long, value_name = "DIR", env = MODELS_DIR_ENV)]
    pub models_dir: Option<PathBuf>,

    /// Words to train (default: all)
    #[arg(long, value_name = "WORD", num_args = 1.., value_delimiter = ',')]
    pub words: Vec<String>,

    /// Cross-validation folds (0 disables)
    #[arg(long, value_name = "N")]
    pub cv: Option<usize>,

    /// Ignore stage-1 sentence files
    #[arg(long)]
    pub no_stage1: bool,

    /// Disable data augmentation
    #[arg(long)]
    pub no_augmentation: bool,

    /// JSON training config; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl TrainArgs {
    /// Merge flags over `base`.
    pub fn apply_to(&self, mut base: TrainConfig) -> TrainConfig {
        if let Some(dir) = &self.base_dir {
            base.base_dir = dir.clone();
        }
        if let Some(dir) = &self.models_dir {
            base.models_dir = dir.clone();
        }
        if !self.words.is_empty() {
            base.words = self.words.clone();
        }
        if let Some(cv) = self.cv {
            base.cv_folds = cv;
        }
        if self.no_stage1 {
            base.use_stage1 = false;
        }
        if self.no_augmentation {
            base.use_augmentation = false;
        }
        base
    }
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Target word
    #[arg(long, value_enum)]
    pub word: TargetWord,

    /// Text file with one sentence per line
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// File to write one label per line to
    #[arg(long, value_name = "PATH")]
    pub output: PathBuf,

    /// Directory holding model artifacts
    #[arg(long, value_name = "DIR", env = MODELS_DIR_ENV, default_value = DEFAULT_MODELS_DIR)]
    pub models_dir: PathBuf,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Target word
    #[arg(long, value_enum)]
    pub word: TargetWord,

    /// Labeled file with "1" and "2" section markers
    #[arg(long, value_name = "PATH")]
    pub input: PathBuf,

    /// Directory holding model artifacts
    #[arg(long, value_name = "DIR", env = MODELS_DIR_ENV, default_value = DEFAULT_MODELS_DIR)]
    pub models_dir: PathBuf,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
