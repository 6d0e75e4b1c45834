use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;
use twosense::cli::{TwosenseArgs, execute_command};
use twosense::error::{Result, TwosenseError};
use twosense::pipeline::FittedPipeline;
use twosense::predict::Predictor;
use twosense::store::ModelStore;
use twosense::train::{TrainConfig, Trainer};
use twosense::word::{Sense, TargetWord};

const RUBBISH_CORPUS: &str = "rubbish
1: waste material such as paper, packaging and food scraps
2: nonsense, words or ideas that are foolish

1
Please put the rubbish in the green bin by the gate.
The garbage truck collects our rubbish every Tuesday.
We carried three bags of rubbish out to the bin.
The rubbish was left next to the garbage chute.
Foxes tore open the rubbish bin during the night.
2
That is a rubbish idea and you know it is nonsense.
He spoke nothing but nonsense and rubbish all evening.
What a rubbish idea, the whole plan is nonsense.
The critics called the report pure nonsense and rubbish.
Her rubbish idea about the moon landing is nonsense.
";

const OVERTIME_CORPUS: &str = "overtime
1: time worked beyond normal working hours
2: an extra period of play when the score is tied

1
She worked overtime to finish the quarterly report.
The union demanded higher overtime pay for night shifts.
Nurses were asked to put in overtime during the flu season.
He earns time and a half for every overtime hour.
The company cut overtime to save on payroll costs.
2
The hockey game went into overtime after a late equalizer.
They scored the winning goal early in overtime.
The playoff match needed two overtime periods.
Fans stayed in their seats as overtime began.
The referee blew the whistle to start overtime.
";

fn write_corpus(dir: &Path, word: TargetWord, contents: &str) {
    fs::write(dir.join(word.corpus_file_name()), contents).unwrap();
}

fn trainer(dir: &TempDir, words: &[&str]) -> Trainer {
    Trainer::new(TrainConfig {
        base_dir: dir.path().to_path_buf(),
        models_dir: dir.path().join("models"),
        words: words.iter().map(|w| w.to_string()).collect(),
        cv_folds: 5,
        ..TrainConfig::default()
    })
}

#[test]
fn rubbish_model_separates_waste_from_nonsense() -> Result<()> {
    let dir = TempDir::new()?;
    write_corpus(dir.path(), TargetWord::Rubbish, RUBBISH_CORPUS);

    let report = trainer(&dir, &["rubbish"]).train_all();
    assert!(report.is_success(), "{:?}", report.failed);
    assert_eq!(report.trained.len(), 1);
    let word_report = &report.trained[0];
    assert!(word_report.sense1_examples >= 6);
    assert!(word_report.sense2_examples >= 6);
    assert!(word_report.cross_validation.is_some());

    let mut predictor = Predictor::new(ModelStore::new(dir.path().join("models")));
    let sentences = [
        "Take out the rubbish bin tonight".to_string(),
        "That argument is complete rubbish".to_string(),
    ];
    let labels = predictor.predict(TargetWord::Rubbish, Some(sentences.as_slice()))?;
    assert_eq!(labels, vec![1, 2]);
    Ok(())
}

#[test]
fn saved_model_predicts_like_the_fitted_one() -> Result<()> {
    let dir = TempDir::new()?;
    let sentences = [
        "She worked overtime all week at the plant.",
        "Overtime pay doubles on public holidays.",
        "The final went to overtime after a tie.",
        "A goal in overtime decided the match.",
    ];
    let senses = [Sense::First, Sense::First, Sense::Second, Sense::Second];
    let pipeline = FittedPipeline::fit(TargetWord::Overtime, &sentences, &senses)?;

    let store = ModelStore::new(dir.path());
    store.save(&pipeline)?;
    let loaded = store.load(TargetWord::Overtime)?;

    let unseen = [
        "He refused to work overtime on Sunday.",
        "Overtime began with both teams exhausted.",
        "Completely unrelated words.",
    ];
    assert_eq!(loaded.predict(&unseen)?, pipeline.predict(&unseen)?);
    Ok(())
}

#[test]
fn predicting_without_a_model_names_the_missing_file() {
    let dir = TempDir::new().unwrap();
    let mut predictor = Predictor::new(ModelStore::new(dir.path()));
    let err = predictor
        .predict(TargetWord::Director, Some(["The director spoke."].as_slice()))
        .unwrap_err();

    assert!(matches!(err, TwosenseError::NotFound { .. }));
    let message = err.to_string();
    assert!(message.contains("director_model.bin"));
    assert!(message.contains("training"));
}

#[test]
fn cli_predict_writes_one_label_per_input_line() -> Result<()> {
    let dir = TempDir::new()?;
    write_corpus(dir.path(), TargetWord::Overtime, OVERTIME_CORPUS);
    let report = trainer(&dir, &["overtime"]).train_all();
    assert!(report.is_success(), "{:?}", report.failed);

    let input = dir.path().join("overtime_test.txt");
    let lines: Vec<String> = (0..50)
        .map(|i| {
            if i % 2 == 0 {
                format!("Worker {i} logged overtime hours at the warehouse.")
            } else {
                format!("Team {i} won the game in overtime.")
            }
        })
        .collect();
    // Mixed line endings: every one of them ends an input sentence.
    let body = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let end = match i % 3 {
                0 => "\n",
                1 => "\r\n",
                _ => "\r",
            };
            format!("{line}{end}")
        })
        .collect::<String>();
    fs::write(&input, body)?;
    let output = dir.path().join("result_overtime.txt");
    let models = dir.path().join("models");

    let args = TwosenseArgs::try_parse_from([
        "twosense",
        "-q",
        "predict",
        "--word",
        "overtime",
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--models-dir",
        models.to_str().unwrap(),
    ])
    .unwrap();
    execute_command(args)?;

    let written = fs::read_to_string(&output)?;
    let labels: Vec<&str> = written.lines().collect();
    assert_eq!(labels.len(), 50);
    assert!(labels.iter().all(|l| *l == "1" || *l == "2"));
    Ok(())
}

#[test]
fn cli_predict_leaves_no_output_when_the_model_is_missing() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.txt");
    fs::write(&input, "The director waved.\n").unwrap();
    let output = dir.path().join("out.txt");

    let args = TwosenseArgs::try_parse_from([
        "twosense",
        "-q",
        "predict",
        "--word",
        "director",
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--models-dir",
        dir.path().join("models").to_str().unwrap(),
    ])
    .unwrap();

    assert!(execute_command(args).is_err());
    assert!(!output.exists());
}

#[test]
fn cli_evaluate_scores_a_labeled_file() -> Result<()> {
    let dir = TempDir::new()?;
    write_corpus(dir.path(), TargetWord::Rubbish, RUBBISH_CORPUS);
    let report = trainer(&dir, &["rubbish"]).train_all();
    assert!(report.is_success(), "{:?}", report.failed);

    let labeled = dir.path().join("rubbish_labeled.txt");
    fs::write(
        &labeled,
        "1\nThrow the rubbish in the garbage bin.\n2\nThat is complete rubbish and nonsense.\n",
    )?;

    let args = TwosenseArgs::try_parse_from([
        "twosense",
        "--format",
        "json",
        "evaluate",
        "--word",
        "rubbish",
        "--input",
        labeled.to_str().unwrap(),
        "--models-dir",
        dir.path().join("models").to_str().unwrap(),
    ])
    .unwrap();
    execute_command(args)
}

#[test]
fn corpus_without_markers_fails_only_that_word() {
    let dir = TempDir::new().unwrap();
    write_corpus(dir.path(), TargetWord::Overtime, OVERTIME_CORPUS);
    write_corpus(dir.path(), TargetWord::Director, "director\nno markers at all here\n");

    let report = trainer(&dir, &["director", "overtime", "unknown"]).train_all();
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].word, TargetWord::Director);
    assert_eq!(report.trained.len(), 1);
    assert!(ModelStore::new(dir.path().join("models")).exists(TargetWord::Overtime));
}
