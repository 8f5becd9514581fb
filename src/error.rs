//! Error types shared across the crate.

use thiserror::Error;

/// Validation failures raised by session operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no quiz is active")]
    NoActiveQuiz,
    #[error("malformed quiz: {0}")]
    MalformedQuiz(String),
    #[error("option {index} does not exist (question has {options} options)")]
    InvalidAnswerIndex { index: usize, options: usize },
    #[error("question {index} is out of range (quiz has {total} questions)")]
    IndexOutOfRange { index: usize, total: usize },
}

/// Failures from the quiz and template loaders.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("quiz not found: {0}")]
    QuizNotFound(String),
    #[error("malformed quiz data in {id}: {reason}")]
    MalformedQuizData { id: String, reason: String },
    #[error("template not found: {0}")]
    TemplateNotFound(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Top-level error for the terminal host.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("terminal error: {0}")]
    Terminal(std::io::Error),
}
