pub mod home;
pub mod keybar;
pub mod layout;
pub mod question;
pub mod result;
pub mod sidebar;
pub mod statusbar;
pub mod titlebar;

use ratatui::Frame;

use quizkit::app::{App, Page};
use quizkit::view::derive_view;

use crate::tui::HostState;

pub fn draw(f: &mut Frame, app: &App, host: &HostState) {
    let area = f.area();
    let layout = layout::compute_layout(area);

    match app.page() {
        Page::Home { entries, cursor } => {
            home::draw_home(f, layout.body, entries, *cursor);
        }
        Page::Loading { id } => {
            result::draw_loading(f, layout.body, id);
        }
        Page::Quiz => match derive_view(&app.session().state()) {
            Some(view) => {
                titlebar::draw_titlebar(f, layout.titlebar, &view);
                let middle = layout::split_middle(layout.body);
                sidebar::draw_sidebar(f, middle.sidebar, &view);
                question::draw_question(f, middle.main, &view);
            }
            None => result::draw_message(f, layout.body, "No quiz is active."),
        },
        Page::ResultsLoading => {
            result::draw_loading(f, layout.body, "results");
        }
        Page::Results { rendered } => {
            result::draw_results(f, layout.body, rendered);
        }
        Page::NotFound { message } => {
            result::draw_message(f, layout.body, message);
        }
    }

    statusbar::draw_statusbar(f, layout.statusbar, app, host);
    keybar::draw_keybar(f, layout.keybar, app.page());
}
