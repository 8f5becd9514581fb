//! Page handlers and input routing for a quiz application.
//!
//! `App` is the context every route handler receives. It owns the session,
//! the load dispatcher and the current page; pages never navigate directly but
//! queue [`Navigation`] intents that the host feeds back into the router.
//! Handlers never touch the filesystem: quizzes, templates and the catalogue
//! arrive later as [`LoadEvent`]s.

use std::collections::VecDeque;

use crate::error::{LoadError, SessionError};
use crate::loader::{LoadDispatcher, LoadEvent, LoadOutcome, QuizEntry};
use crate::model::QuizDefinition;
use crate::router::{
    Location, Navigation, Router, TimerControl, HOME_PATH, NOT_FOUND_PATH, QUIZ_PATH,
    RESULTS_PATH,
};
use crate::session::{Advance, Session};
use crate::template::{self, TemplateData};
use crate::timer::{TimerEvent, TimerTick};
use crate::view;

pub const RESULTS_TEMPLATE: &str = "results-template";
pub const QUIZ_NOT_FOUND: &str = "Quiz not found.";
pub const PAGE_NOT_FOUND: &str = "Page not found.";

/// Used when the results template cannot be loaded.
pub const DEFAULT_RESULTS_TEMPLATE: &str = "\
{{title}}

You scored {{score}} out of {{totalQuestions}}.
{{feedback}}
{{timeUpMessage}}
Time taken: {{elapsed}}
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Home { entries: Vec<QuizEntry>, cursor: usize },
    Loading { id: String },
    Quiz,
    /// Results are scored; the template is still loading.
    ResultsLoading,
    Results { rendered: String },
    NotFound { message: String },
}

/// Host-independent user actions. Which ones apply depends on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    SelectOption(usize),
    GoToQuestion(usize),
    /// A typed digit. Consecutive digits build a question number, so `1`
    /// then `2` jumps to question 12 when the quiz has that many.
    Digit(u8),
    Next,
    Prev,
    CursorUp,
    CursorDown,
    Confirm,
    ReturnHome,
}

pub struct App {
    session: Session,
    loads: LoadDispatcher,
    page: Page,
    intents: VecDeque<Navigation>,
    load_ticket: u64,
    catalogue: Vec<QuizEntry>,
    pending_results: Option<TemplateData>,
    jump: usize,
}

impl App {
    pub fn new(session: Session, loads: LoadDispatcher) -> Self {
        Self {
            session,
            loads,
            page: Page::Home {
                entries: Vec::new(),
                cursor: 0,
            },
            intents: VecDeque::new(),
            load_ticket: 0,
            catalogue: Vec::new(),
            pending_results: None,
            jump: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Ticket of the most recent load request.
    pub fn load_ticket(&self) -> u64 {
        self.load_ticket
    }

    pub fn push_intent(&mut self, nav: Navigation) {
        self.intents.push_back(nav);
    }

    pub fn take_intent(&mut self) -> Option<Navigation> {
        self.intents.pop_front()
    }

    /// Shows the last known catalogue and asks for a fresh listing.
    pub fn show_home(&mut self, _location: &Location) {
        self.page = Page::Home {
            entries: self.catalogue.clone(),
            cursor: 0,
        };
        let ticket = self.next_ticket();
        self.loads.request_catalogue(ticket);
    }

    /// Requests the quiz named by the `id` query parameter. The session is
    /// started when the matching [`LoadEvent`] arrives.
    pub fn show_quiz(&mut self, location: &Location) {
        let Some(id) = location.query_param("id").filter(|id| !id.is_empty()) else {
            self.fail_load(&LoadError::QuizNotFound(String::new()));
            return;
        };

        let ticket = self.next_ticket();
        log::info!("loading quiz {} (ticket {})", id, ticket);
        self.page = Page::Loading { id: id.to_string() };
        self.loads.request_quiz(ticket, id);
    }

    pub fn show_results(&mut self, _location: &Location) {
        let data = match view::results_data(&self.session.state()) {
            Ok(data) => data,
            Err(_) => {
                log::debug!("results requested with no active quiz");
                self.push_intent(Navigation::Home);
                return;
            }
        };

        // Scored now so that later ticks or inputs cannot change the outcome.
        self.pending_results = Some(data);
        self.page = Page::ResultsLoading;
        let ticket = self.next_ticket();
        self.loads.request_template(ticket, RESULTS_TEMPLATE);
    }

    pub fn show_not_found(&mut self, _location: &Location) {
        self.page = Page::NotFound {
            message: PAGE_NOT_FOUND.to_string(),
        };
    }

    pub fn on_load(&mut self, event: LoadEvent) {
        if event.ticket != self.load_ticket {
            log::debug!(
                "ignoring superseded load (ticket {}, current {})",
                event.ticket,
                self.load_ticket
            );
            return;
        }

        match event.outcome {
            LoadOutcome::Quiz { id, result } => self.finish_quiz(id, result),
            LoadOutcome::Template { name, result } => self.finish_results(&name, result),
            LoadOutcome::Catalogue(result) => self.finish_catalogue(result),
        }
    }

    pub fn on_tick(&mut self, tick: TimerTick) {
        if self.session.tick(tick) == TimerEvent::TimeExpired {
            self.push_intent(Navigation::Results);
        }
    }

    /// Applies `input` to the current page. Inputs that mean nothing on this
    /// page are dropped.
    pub fn handle_input(&mut self, input: Input) -> Result<(), SessionError> {
        if !matches!(input, Input::Digit(_)) {
            self.jump = 0;
        }
        if input == Input::ReturnHome {
            self.push_intent(Navigation::Home);
            return Ok(());
        }

        match &mut self.page {
            Page::Home { entries, cursor } => match input {
                Input::CursorUp => {
                    *cursor = cursor.saturating_sub(1);
                }
                Input::CursorDown => {
                    if *cursor + 1 < entries.len() {
                        *cursor += 1;
                    }
                }
                Input::Confirm => {
                    if let Some(entry) = entries.get(*cursor) {
                        let id = entry.id.clone();
                        self.intents.push_back(Navigation::Quiz { id });
                    }
                }
                _ => {}
            },
            Page::Quiz => match input {
                Input::SelectOption(i) => self.session.record_answer(i)?,
                Input::GoToQuestion(i) => self.session.go_to_question(i)?,
                Input::Digit(d) => {
                    let total = self.session.quiz().map_or(0, |q| q.total_questions());
                    let extended = self.jump * 10 + usize::from(d);
                    let number = if self.jump > 0 && extended <= total {
                        extended
                    } else {
                        usize::from(d)
                    };
                    self.jump = 0;
                    if number > 0 {
                        self.session.go_to_question(number - 1)?;
                        self.jump = number;
                    }
                }
                Input::Next => {
                    if self.session.advance()? == Advance::Finished {
                        self.intents.push_back(Navigation::Results);
                    }
                }
                Input::Prev => self.session.retreat()?,
                _ => {}
            },
            Page::Results { .. } | Page::NotFound { .. } => {
                if input == Input::Confirm {
                    self.intents.push_back(Navigation::Home);
                }
            }
            Page::Loading { .. } | Page::ResultsLoading => {}
        }
        Ok(())
    }

    fn next_ticket(&mut self) -> u64 {
        self.load_ticket += 1;
        self.load_ticket
    }

    fn finish_quiz(&mut self, id: String, result: Result<QuizDefinition, LoadError>) {
        if !matches!(self.page, Page::Loading { .. }) {
            log::debug!("ignoring load of {}: no longer on the quiz page", id);
            return;
        }

        let quiz = match result {
            Ok(quiz) => quiz,
            Err(e) => {
                self.fail_load(&e);
                return;
            }
        };

        match self.session.start_quiz(quiz) {
            Ok(()) => self.page = Page::Quiz,
            Err(e) => self.fail_load(&LoadError::MalformedQuizData {
                id,
                reason: e.to_string(),
            }),
        }
    }

    fn finish_results(&mut self, name: &str, result: Result<String, LoadError>) {
        if self.page != Page::ResultsLoading {
            return;
        }
        let Some(data) = self.pending_results.take() else {
            return;
        };

        let source = result.unwrap_or_else(|e| {
            log::warn!("using built-in {}: {}", name, e);
            DEFAULT_RESULTS_TEMPLATE.to_string()
        });
        self.page = Page::Results {
            rendered: template::render(&source, &data),
        };
    }

    fn finish_catalogue(&mut self, result: Result<Vec<QuizEntry>, LoadError>) {
        let entries = match result {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("cannot list quizzes: {}", e);
                return;
            }
        };

        if let Page::Home {
            entries: shown,
            cursor,
        } = &mut self.page
        {
            *cursor = (*cursor).min(entries.len().saturating_sub(1));
            shown.clone_from(&entries);
        }
        self.catalogue = entries;
    }

    fn fail_load(&mut self, error: &LoadError) {
        log::warn!("quiz load failed: {}", error);
        self.session.clear();
        self.page = Page::NotFound {
            message: QUIZ_NOT_FOUND.to_string(),
        };
    }
}

impl TimerControl for App {
    fn stop_timer(&mut self) {
        self.session.stop_timer();
    }
}

/// The standard route table: home, quiz, results and the 404 fallback.
pub fn build_router() -> Router<App> {
    let mut router = Router::new();
    router.add_route(HOME_PATH, App::show_home);
    router.add_route(QUIZ_PATH, App::show_quiz);
    router.add_route(RESULTS_PATH, App::show_results);
    router.add_route(NOT_FOUND_PATH, App::show_not_found);
    router
}

/// Feeds queued navigation intents back into the router until none remain.
pub fn drain_intents(router: &mut Router<App>, app: &mut App) {
    while let Some(nav) = app.take_intent() {
        router.navigate_to(app, &nav.target());
    }
}
