//! Command implementations for the Twosense CLI.

use std::fs;

use tracing::info;

use crate::analysis::split_lines;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::corpus::load_labeled_file;
use crate::error::{Result, TwosenseError};
use crate::evaluation::evaluate;
use crate::predict::Predictor;
use crate::store::ModelStore;
use crate::train::{TrainConfig, Trainer};

/// Execute a CLI command.
pub fn execute_command(args: TwosenseArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train_models(train_args, &args),
        Command::Predict(predict_args) => predict_file(predict_args, &args),
        Command::Evaluate(evaluate_args) => evaluate_file(evaluate_args, &args),
    }
}

/// Train every requested word and report per-word results.
fn train_models(args: &TrainArgs, cli_args: &TwosenseArgs) -> Result<()> {
    let base = match &args.config {
        Some(path) => TrainConfig::from_json_file(path)?,
        None => TrainConfig::default(),
    };
    let config = args.apply_to(base);
    info!(
        base_dir = %config.base_dir.display(),
        models_dir = %config.models_dir.display(),
        words = ?config.words,
        "starting training"
    );

    let report = Trainer::new(config).train_all();
    output_result(&report, cli_args)?;

    if report.is_success() {
        Ok(())
    } else {
        let words: Vec<String> = report.failed.iter().map(|f| f.word.to_string()).collect();
        Err(TwosenseError::data(format!(
            "training failed for: {}",
            words.join(", ")
        )))
    }
}

/// Label each line of the input file and write one label per line.
///
/// The output file is only written once every prediction has succeeded.
fn predict_file(args: &PredictArgs, cli_args: &TwosenseArgs) -> Result<()> {
    let contents = fs::read_to_string(&args.input)?;
    let lines = split_lines(&contents);

    let mut predictor = Predictor::new(ModelStore::new(&args.models_dir));
    let labels = predictor.predict(args.word, Some(lines.as_slice()))?;

    let mut body = labels
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    body.push('\n');
    fs::write(&args.output, body)?;

    output_result(
        &PredictionResult {
            word: args.word,
            predictions: labels.len(),
            output: args.output.clone(),
        },
        cli_args,
    )
}

/// Compare stored-model predictions with the labels in a corpus-format file.
fn evaluate_file(args: &EvaluateArgs, cli_args: &TwosenseArgs) -> Result<()> {
    let data = load_labeled_file(&args.input)?;

    let mut predictor = Predictor::new(ModelStore::new(&args.models_dir));
    let predicted = predictor.predict_senses(args.word, Some(data.sentences.as_slice()))?;
    let report = evaluate(&predicted, &data.senses)?;

    output_result(
        &EvaluationResult {
            word: args.word,
            input: args.input.clone(),
            report,
        },
        cli_args,
    )
}
