use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A quiz as loaded from a data file. Immutable once a session owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "timeLimit")]
    pub time_limit_seconds: u32,
    pub passing_score: u32,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "correctOption")]
    pub correct_option_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,
}

/// Media attached to a question. Opaque to the session; only views look inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Image {
        src: String,
        #[serde(default)]
        alt: String,
    },
    Video {
        src: String,
    },
    Code {
        #[serde(default)]
        language: String,
        code: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResults {
    pub score: usize,
    pub total_questions: usize,
    pub passed: bool,
}

impl QuizDefinition {
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Quiz")
    }

    /// Scores `answers` (question index to option index). Unanswered
    /// questions never count as correct.
    pub fn results(&self, answers: &BTreeMap<usize, usize>) -> QuizResults {
        let score = self
            .questions
            .iter()
            .enumerate()
            .filter(|(i, q)| answers.get(i).is_some_and(|&a| q.is_correct(a)))
            .count();

        QuizResults {
            score,
            total_questions: self.total_questions(),
            passed: score as u64 >= u64::from(self.passing_score),
        }
    }

    /// Checks the structural invariants the session relies on. Returns a
    /// human-readable reason for the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.questions.is_empty() {
            return Err("quiz has no questions".to_string());
        }

        for (i, q) in self.questions.iter().enumerate() {
            if q.options.is_empty() {
                return Err(format!("question {} has no options", i + 1));
            }
            if q.correct_option_index >= q.options.len() {
                return Err(format!(
                    "question {} has correctOption {} but only {} options",
                    i + 1,
                    q.correct_option_index,
                    q.options.len()
                ));
            }
        }

        Ok(())
    }
}

impl Question {
    pub fn is_correct(&self, option_index: usize) -> bool {
        self.correct_option_index == option_index
    }
}
