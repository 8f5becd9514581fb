//! Building blocks for timed multiple-choice quizzes: a path router, a
//! placeholder template renderer, a quiz session state machine and the
//! countdown timer that drives it.

pub mod app;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod router;
pub mod session;
pub mod template;
pub mod timer;
pub mod view;

pub use config::Config;
pub use error::{LoadError, SessionError};
pub use model::{Content, Question, QuizDefinition, QuizResults};
pub use router::{Location, Navigation, Router};
pub use session::{Advance, Session, SessionSnapshot};
pub use timer::{TimerEvent, TimerTick};
