//! Pure derivations from a session snapshot to what a page displays.

use chrono::Utc;

use crate::error::SessionError;
use crate::model::Content;
use crate::session::SessionSnapshot;
use crate::template::TemplateData;
use crate::timer::format_time;

pub const PASSED_MESSAGE: &str = "Congratulations! You passed the quiz.";
pub const FAILED_MESSAGE: &str = "Unfortunately, you did not pass the quiz.";
pub const TIME_UP_MESSAGE: &str = "Your time ran out!";

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub index: usize,
    pub label: char,
    pub text: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorView {
    pub number: usize,
    pub active: bool,
    pub answered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFeedback {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionView {
    pub title: String,
    pub question_number: usize,
    pub total_questions: usize,
    pub prompt: String,
    pub content: Option<Content>,
    pub options: Vec<OptionView>,
    pub indicators: Vec<IndicatorView>,
    pub progress_percentage: f64,
    pub timer: Option<String>,
    pub time_remaining: Option<u32>,
    pub correct_answers_count: usize,
    pub prev_disabled: bool,
    pub next_label: &'static str,
    /// Only set when per-question feedback is enabled and the question is answered.
    pub feedback: Option<AnswerFeedback>,
}

/// Option labels run `a`..`z`; options beyond that share `?`.
pub fn option_label(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| (b'a' + i) as char)
        .unwrap_or('?')
}

/// Returns `None` when no quiz is active.
pub fn derive_view(state: &SessionSnapshot) -> Option<QuestionView> {
    let quiz = state.quiz.as_ref()?;
    let question = quiz.questions.get(state.current_index)?;
    let total = quiz.total_questions();
    let selected = state.answer_for(state.current_index);

    let options = question
        .options
        .iter()
        .enumerate()
        .map(|(i, text)| OptionView {
            index: i,
            label: option_label(i),
            text: text.clone(),
            selected: selected == Some(i),
        })
        .collect();

    let indicators = (0..total)
        .map(|i| IndicatorView {
            number: i + 1,
            active: i == state.current_index,
            answered: state.answers.contains_key(&i),
        })
        .collect();

    let correct_answers_count = state
        .answers
        .iter()
        .filter(|(i, answer)| {
            quiz.questions
                .get(**i)
                .is_some_and(|q| q.is_correct(**answer))
        })
        .count();

    let progress = (state.current_index + 1) as f64 / total as f64 * 100.0;
    let progress_percentage = (progress * 100.0).round() / 100.0;

    let feedback = if state.config.feedback_on_each_question {
        selected.map(|answer| {
            if question.is_correct(answer) {
                AnswerFeedback::Correct
            } else {
                AnswerFeedback::Incorrect
            }
        })
    } else {
        None
    };

    Some(QuestionView {
        title: quiz.display_title().to_string(),
        question_number: state.current_index + 1,
        total_questions: total,
        prompt: question.prompt.clone(),
        content: question.content.clone(),
        options,
        indicators,
        progress_percentage,
        timer: state
            .config
            .timer_enabled
            .then(|| format_time(state.time_remaining)),
        time_remaining: state.config.timer_enabled.then_some(state.time_remaining),
        correct_answers_count,
        prev_disabled: state.current_index == 0,
        next_label: if state.current_index + 1 == total {
            "Finish"
        } else {
            "Next"
        },
        feedback,
    })
}

/// Values for the results template.
pub fn results_data(state: &SessionSnapshot) -> Result<TemplateData, SessionError> {
    let quiz = state.quiz.as_ref().ok_or(SessionError::NoActiveQuiz)?;

    let results = quiz.results(&state.answers);

    let elapsed = state
        .started_at
        .map(|start| (Utc::now() - start).num_seconds().max(0))
        .map(|secs| format_time(u32::try_from(secs).unwrap_or(u32::MAX)))
        .unwrap_or_default();

    Ok(TemplateData::new()
        .with("title", quiz.display_title())
        .with("score", results.score)
        .with("totalQuestions", results.total_questions)
        .with("passingScore", quiz.passing_score)
        .with("feedback", if results.passed { PASSED_MESSAGE } else { FAILED_MESSAGE })
        .with(
            "timeUpMessage",
            if state.time_expired { TIME_UP_MESSAGE } else { "" },
        )
        .with("elapsed", elapsed))
}
