use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::SessionError;
use crate::model::{Question, QuizDefinition, QuizResults};
use crate::timer::{TickSource, TimerController, TimerEvent, TimerTick};

/// Result of moving forward from the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    /// Already on the last question; the caller should show results.
    Finished,
}

/// Owned copy of the session fields, detached from the live session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub config: Config,
    pub quiz: Option<Arc<QuizDefinition>>,
    pub current_index: usize,
    pub answers: BTreeMap<usize, usize>,
    pub time_remaining: u32,
    pub timer_running: bool,
    pub time_expired: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub epoch: u64,
}

impl SessionSnapshot {
    pub fn is_active(&self) -> bool {
        self.quiz.is_some()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.quiz
            .as_ref()
            .and_then(|q| q.questions.get(self.current_index))
    }

    pub fn answer_for(&self, index: usize) -> Option<usize> {
        self.answers.get(&index).copied()
    }
}

/// The state of one quiz attempt.
///
/// There is exactly one `Session` per application, owned by the host and lent
/// to whoever needs it. Without a quiz it is empty; `start_quiz` makes it
/// active. "Finished" is not stored: callers ask for results when `advance`
/// reports [`Advance::Finished`] or the timer expires.
#[derive(Debug)]
pub struct Session {
    config: Config,
    quiz: Option<Arc<QuizDefinition>>,
    current_index: usize,
    answers: BTreeMap<usize, usize>,
    time_remaining: u32,
    started_at: Option<DateTime<Utc>>,
    epoch: u64,
    timer: TimerController,
}

impl Session {
    pub fn new(config: Config, ticks: Box<dyn TickSource>) -> Self {
        Self {
            config,
            quiz: None,
            current_index: 0,
            answers: BTreeMap::new(),
            time_remaining: 0,
            started_at: None,
            epoch: 0,
            timer: TimerController::new(ticks),
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    pub fn is_active(&self) -> bool {
        self.quiz.is_some()
    }

    /// Identity of the current attempt. Bumped by every `start_quiz` and `clear`.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn time_expired(&self) -> bool {
        self.timer.has_expired()
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn quiz(&self) -> Option<&QuizDefinition> {
        self.quiz.as_deref()
    }

    pub fn start_quiz(&mut self, quiz: QuizDefinition) -> Result<(), SessionError> {
        quiz.validate().map_err(SessionError::MalformedQuiz)?;

        self.timer.reset();
        self.epoch += 1;
        self.current_index = 0;
        self.answers.clear();
        self.time_remaining = quiz.time_limit_seconds;
        self.started_at = Some(Utc::now());

        log::info!(
            "starting quiz {:?} ({} questions, {}s)",
            quiz.display_title(),
            quiz.total_questions(),
            quiz.time_limit_seconds
        );
        self.quiz = Some(Arc::new(quiz));

        if self.config.timer_enabled {
            self.timer.start(self.epoch);
        }
        Ok(())
    }

    /// Drops the current quiz and stops its timer.
    pub fn clear(&mut self) {
        self.timer.reset();
        if self.quiz.take().is_some() {
            log::debug!("session {} cleared", self.epoch);
        }
        self.epoch += 1;
        self.current_index = 0;
        self.answers.clear();
        self.time_remaining = 0;
        self.started_at = None;
    }

    pub fn stop_timer(&mut self) {
        self.timer.stop();
    }

    pub fn record_answer(&mut self, option_index: usize) -> Result<(), SessionError> {
        let question = self.current_question().ok_or(SessionError::NoActiveQuiz)?;
        let options = question.options.len();
        if option_index >= options {
            return Err(SessionError::InvalidAnswerIndex {
                index: option_index,
                options,
            });
        }
        self.answers.insert(self.current_index, option_index);
        Ok(())
    }

    pub fn go_to_question(&mut self, index: usize) -> Result<(), SessionError> {
        let total = self.active_quiz()?.total_questions();
        if index >= total {
            return Err(SessionError::IndexOutOfRange { index, total });
        }
        self.current_index = index;
        Ok(())
    }

    pub fn advance(&mut self) -> Result<Advance, SessionError> {
        let total = self.active_quiz()?.total_questions();
        if self.current_index + 1 >= total {
            return Ok(Advance::Finished);
        }
        self.current_index += 1;
        Ok(Advance::Moved(self.current_index))
    }

    pub fn retreat(&mut self) -> Result<(), SessionError> {
        self.active_quiz()?;
        if self.current_index > 0 {
            self.current_index -= 1;
        }
        Ok(())
    }

    pub fn compute_results(&self) -> Result<QuizResults, SessionError> {
        Ok(self.active_quiz()?.results(&self.answers))
    }

    /// Applies a delivered timer tick. Ticks scheduled by an earlier attempt
    /// are ignored.
    pub fn tick(&mut self, tick: TimerTick) -> TimerEvent {
        if tick.epoch != self.epoch || self.quiz.is_none() {
            log::debug!(
                "ignoring tick for session {} (current {})",
                tick.epoch,
                self.epoch
            );
            return TimerEvent::Ignored;
        }
        self.timer.on_tick(&mut self.time_remaining)
    }

    pub fn state(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config,
            quiz: self.quiz.clone(),
            current_index: self.current_index,
            answers: self.answers.clone(),
            time_remaining: self.time_remaining,
            timer_running: self.timer.is_running(),
            time_expired: self.timer.has_expired(),
            started_at: self.started_at,
            epoch: self.epoch,
        }
    }

    fn active_quiz(&self) -> Result<&QuizDefinition, SessionError> {
        self.quiz.as_deref().ok_or(SessionError::NoActiveQuiz)
    }

    fn current_question(&self) -> Option<&Question> {
        self.quiz
            .as_ref()
            .and_then(|q| q.questions.get(self.current_index))
    }
}
