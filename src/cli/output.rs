//! Output formatting for CLI commands.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TwosenseArgs};
use crate::error::Result;
use crate::evaluation::{EvaluationReport, SenseScore};
use crate::train::TrainReport;
use crate::word::TargetWord;

/// Result structure for prediction.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionResult {
    pub word: TargetWord,
    pub predictions: usize,
    pub output: PathBuf,
}

/// Result structure for evaluation.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub word: TargetWord,
    pub input: PathBuf,
    pub report: EvaluationReport,
}

/// Something that knows how to print itself for people.
pub trait HumanOutput {
    fn print_human(&self, args: &TwosenseArgs);
}

impl HumanOutput for PredictionResult {
    fn print_human(&self, _args: &TwosenseArgs) {
        println!(
            "Wrote {} predictions to {}",
            self.predictions,
            self.output.display()
        );
    }
}

impl HumanOutput for TrainReport {
    fn print_human(&self, args: &TwosenseArgs) {
        for word in &self.trained {
            if let Some(cv) = &word.cross_validation {
                println!(
                    "{}: CV accuracy mean={:.3}, std={:.3}",
                    word.word, cv.mean, cv.std
                );
            }
            println!(
                "Saved {} model to {} ({})",
                word.word,
                word.model_path.display(),
                format_bytes(word.model_size_bytes)
            );
            if args.verbosity() > 1 {
                println!(
                    "  examples: {} sense 1, {} sense 2; {} features",
                    word.sense1_examples, word.sense2_examples, word.feature_width
                );
            }
        }
        for failure in &self.failed {
            eprintln!("{}: training failed: {}", failure.word, failure.error);
        }
    }
}

impl HumanOutput for EvaluationResult {
    fn print_human(&self, _args: &TwosenseArgs) {
        let report = &self.report;
        println!("Evaluation for '{}' ({})", self.word, self.input.display());
        println!("═══════════════");
        println!(
            "Accuracy: {:.3} ({}/{})",
            report.accuracy, report.correct, report.total
        );
        println!("Sense 1: {}", format_score(&report.sense1));
        println!("Sense 2: {}", format_score(&report.sense2));
    }
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &TwosenseArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                result.print_human(args);
            }
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &TwosenseArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn format_score(score: &SenseScore) -> String {
    match score.accuracy() {
        Some(accuracy) => format!("{accuracy:.3} ({}/{})", score.correct, score.total),
        None => "no examples".to_string(),
    }
}

/// Format bytes in human-readable format.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
