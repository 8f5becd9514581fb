use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use crate::error::LoadError;
use crate::model::QuizDefinition;

const QUIZ_SUFFIX: &str = "-quiz.json";
const TEMPLATE_EXTENSIONS: [&str; 2] = ["txt", "html"];

/// Entry in the home page catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizEntry {
    pub id: String,
    pub title: String,
}

pub trait QuizLoader: Send + Sync {
    fn load(&self, id: &str) -> Result<QuizDefinition, LoadError>;

    fn list(&self) -> Result<Vec<QuizEntry>, LoadError>;
}

pub trait TemplateLoader: Send + Sync {
    fn load(&self, name: &str) -> Result<String, LoadError>;
}

/// Parses and validates quiz JSON. `id` is only used in error messages.
pub fn parse_quiz(content: &str, id: &str) -> Result<QuizDefinition, LoadError> {
    let quiz: QuizDefinition =
        serde_json::from_str(content).map_err(|e| LoadError::MalformedQuizData {
            id: id.to_string(),
            reason: e.to_string(),
        })?;

    quiz.validate().map_err(|reason| LoadError::MalformedQuizData {
        id: id.to_string(),
        reason,
    })?;

    Ok(quiz)
}

/// Reads `<dir>/<id>-quiz.json`.
#[derive(Debug, Clone)]
pub struct FsQuizLoader {
    dir: PathBuf,
}

impl FsQuizLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}{}", id, QUIZ_SUFFIX))
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

impl QuizLoader for FsQuizLoader {
    fn load(&self, id: &str) -> Result<QuizDefinition, LoadError> {
        if !is_valid_id(id) {
            return Err(LoadError::QuizNotFound(id.to_string()));
        }

        let path = self.path_for(id);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LoadError::QuizNotFound(id.to_string()));
            }
            Err(e) => return Err(LoadError::Io(e)),
        };

        parse_quiz(&content, id)
    }

    fn list(&self) -> Result<Vec<QuizEntry>, LoadError> {
        let mut entries = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(id) = file_name.strip_suffix(QUIZ_SUFFIX) else {
                continue;
            };
            if !is_valid_id(id) {
                continue;
            }

            // Unreadable files still get listed; opening them reports the error.
            let title = fs::read_to_string(&path)
                .ok()
                .and_then(|c| serde_json::from_str::<QuizDefinition>(&c).ok())
                .and_then(|q| q.title)
                .unwrap_or_else(|| id.to_string());

            entries.push(QuizEntry {
                id: id.to_string(),
                title,
            });
        }

        entries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(entries)
    }
}

/// Reads `<dir>/<name>.txt`, falling back to `<dir>/<name>.html`.
#[derive(Debug, Clone)]
pub struct FsTemplateLoader {
    dir: PathBuf,
}

impl FsTemplateLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateLoader for FsTemplateLoader {
    fn load(&self, name: &str) -> Result<String, LoadError> {
        if !is_valid_id(name) {
            return Err(LoadError::TemplateNotFound(name.to_string()));
        }

        for ext in TEMPLATE_EXTENSIONS {
            let path = self.dir.join(format!("{}.{}", name, ext));
            match fs::read_to_string(&path) {
                Ok(content) => return Ok(content),
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(LoadError::Io(e)),
            }
        }

        Err(LoadError::TemplateNotFound(name.to_string()))
    }
}

/// What a background load produced.
#[derive(Debug)]
pub enum LoadOutcome {
    Quiz {
        id: String,
        result: Result<QuizDefinition, LoadError>,
    },
    Template {
        name: String,
        result: Result<String, LoadError>,
    },
    Catalogue(Result<Vec<QuizEntry>, LoadError>),
}

/// Completion of a background load, tagged with the ticket it was requested under.
#[derive(Debug)]
pub struct LoadEvent {
    pub ticket: u64,
    pub outcome: LoadOutcome,
}

/// Runs quiz, template and catalogue loads off the event loop and posts the
/// outcome back on a channel.
#[derive(Clone)]
pub struct LoadDispatcher {
    quizzes: Arc<dyn QuizLoader>,
    templates: Arc<dyn TemplateLoader>,
    tx: mpsc::Sender<LoadEvent>,
}

impl LoadDispatcher {
    pub fn new(
        quizzes: Arc<dyn QuizLoader>,
        templates: Arc<dyn TemplateLoader>,
        tx: mpsc::Sender<LoadEvent>,
    ) -> Self {
        Self {
            quizzes,
            templates,
            tx,
        }
    }

    pub fn channel(
        quizzes: Arc<dyn QuizLoader>,
        templates: Arc<dyn TemplateLoader>,
    ) -> (Self, mpsc::Receiver<LoadEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self::new(quizzes, templates, tx), rx)
    }

    pub fn request_quiz(&self, ticket: u64, id: &str) {
        let loader = Arc::clone(&self.quizzes);
        let id = id.to_string();
        self.spawn(ticket, move || {
            let result = loader.load(&id);
            LoadOutcome::Quiz { id, result }
        });
    }

    pub fn request_template(&self, ticket: u64, name: &str) {
        let loader = Arc::clone(&self.templates);
        let name = name.to_string();
        self.spawn(ticket, move || {
            let result = loader.load(&name);
            LoadOutcome::Template { name, result }
        });
    }

    pub fn request_catalogue(&self, ticket: u64) {
        let loader = Arc::clone(&self.quizzes);
        self.spawn(ticket, move || LoadOutcome::Catalogue(loader.list()));
    }

    fn spawn<F>(&self, ticket: u64, load: F)
    where
        F: FnOnce() -> LoadOutcome + Send + 'static,
    {
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = load();
            // Receiver gone means the host has shut down.
            let _ = tx.send(LoadEvent { ticket, outcome });
        });
    }
}
