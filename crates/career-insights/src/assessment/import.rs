use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::Answers;

/// Failure while reading an answer sheet from disk.
#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answer sheet: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer sheet CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid answer sheet JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    question_id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    option_id: Option<String>,
}

/// Reads `question_id,option_id` rows. Blank option cells mark skipped
/// questions; a repeated question keeps its last answer.
pub fn answers_from_csv_reader<R: Read>(reader: R) -> Result<Answers, AnswerImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut answers = Answers::new();

    for record in csv_reader.deserialize::<AnswerRow>() {
        let row = record?;
        if row.question_id.is_empty() {
            continue;
        }
        match row.option_id {
            Some(option_id) => {
                answers.insert(row.question_id, option_id);
            }
            None => {
                answers.remove(&row.question_id);
            }
        }
    }

    Ok(answers)
}

pub fn answers_from_csv_path<P: AsRef<Path>>(path: P) -> Result<Answers, AnswerImportError> {
    let file = std::fs::File::open(path)?;
    answers_from_csv_reader(file)
}

/// Reads a JSON object mapping question ids to option ids.
pub fn answers_from_json_reader<R: Read>(reader: R) -> Result<Answers, AnswerImportError> {
    Ok(serde_json::from_reader(reader)?)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
