use std::path::PathBuf;

use clap::Parser;

use quizkit::config::Overrides;

#[derive(Parser, Debug)]
#[command(name = "quizkit", version, about = "Timed multiple-choice quizzes in the terminal")]
pub struct Cli {
    /// Location to open first, e.g. "/quiz?id=ww2" [default: /]
    #[arg(default_value = "/")]
    pub start: String,

    /// Directory holding <id>-quiz.json files
    #[arg(long, value_name = "dir", default_value = "quizzes")]
    pub quizzes: PathBuf,

    /// Directory holding page templates
    #[arg(long, value_name = "dir", default_value = "templates")]
    pub templates: PathBuf,

    /// Config file [default: ./quizkit.yaml if present]
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Enable the countdown timer
    #[arg(long, conflicts_with = "no_timer")]
    pub timer: bool,

    /// Disable the countdown timer
    #[arg(long)]
    pub no_timer: bool,

    /// Show whether each answer is correct as soon as it is chosen
    #[arg(long)]
    pub feedback: bool,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        let timer_enabled = if self.timer {
            Some(true)
        } else if self.no_timer {
            Some(false)
        } else {
            None
        };

        Overrides {
            timer_enabled,
            feedback_on_each_question: self.feedback.then_some(true),
        }
    }
}
