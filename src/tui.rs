use std::io;
use std::sync::mpsc;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::CrosstermBackend;
use ratatui::Terminal;

use quizkit::app::{self, App, Input, Page};
use quizkit::error::AppError;
use quizkit::loader::LoadEvent;
use quizkit::router::Router;
use quizkit::timer::TimerTick;

/// What a key means to the host, before page routing.
enum KeyAction {
    Quit,
    Back,
    Forward,
    Input(Input),
    None,
}

/// Status line state kept by the host between frames.
#[derive(Debug, Default)]
pub struct HostState {
    pub notice: Option<String>,
}

pub fn run_tui(
    mut app: App,
    mut router: Router<App>,
    start: &str,
    timer_rx: mpsc::Receiver<TimerTick>,
    load_rx: mpsc::Receiver<LoadEvent>,
) -> Result<(), AppError> {
    enable_raw_mode().map_err(AppError::Terminal)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(AppError::Terminal)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(AppError::Terminal)?;

    router.navigate_to(&mut app, start);
    app::drain_intents(&mut router, &mut app);

    let result = main_loop(&mut terminal, &mut app, &mut router, &timer_rx, &load_rx);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    router: &mut Router<App>,
    timer_rx: &mpsc::Receiver<TimerTick>,
    load_rx: &mpsc::Receiver<LoadEvent>,
) -> Result<(), AppError> {
    let mut host = HostState::default();

    loop {
        terminal
            .draw(|f| crate::ui::draw(f, app, &host))
            .map_err(AppError::Terminal)?;

        if event::poll(Duration::from_millis(100)).map_err(AppError::Terminal)? {
            if let Event::Key(key) = event::read().map_err(AppError::Terminal)? {
                let action = if key.kind == KeyEventKind::Press {
                    map_key(key, app.page())
                } else {
                    KeyAction::None
                };
                match action {
                    KeyAction::Quit => break,
                    KeyAction::Back => {
                        router.back(app);
                    }
                    KeyAction::Forward => {
                        router.forward(app);
                    }
                    KeyAction::Input(input) => {
                        host.notice = match app.handle_input(input) {
                            Ok(()) => None,
                            Err(e) => {
                                log::debug!("input {:?} rejected: {}", input, e);
                                Some(e.to_string())
                            }
                        };
                    }
                    KeyAction::None => {}
                }
            }
        }

        // Each event runs to completion before the next one is looked at.
        while let Ok(tick) = timer_rx.try_recv() {
            app.on_tick(tick);
            app::drain_intents(router, app);
        }

        while let Ok(load) = load_rx.try_recv() {
            app.on_load(load);
            app::drain_intents(router, app);
        }

        app::drain_intents(router, app);
    }

    Ok(())
}

fn map_key(key: KeyEvent, page: &Page) -> KeyAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('q') if ctrl => return KeyAction::Quit,
        KeyCode::Left if alt => return KeyAction::Back,
        KeyCode::Right if alt => return KeyAction::Forward,
        KeyCode::Esc => return KeyAction::Input(Input::ReturnHome),
        _ => {}
    }

    let input = match page {
        Page::Home { .. } => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Input::CursorUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Input::CursorDown),
            KeyCode::Enter => Some(Input::Confirm),
            _ => None,
        },
        Page::Quiz => match key.code {
            KeyCode::Char(c @ 'a'..='z') if !ctrl => {
                Some(Input::SelectOption((c as u8 - b'a') as usize))
            }
            KeyCode::Char(c @ '0'..='9') => Some(Input::Digit(c as u8 - b'0')),
            KeyCode::Right | KeyCode::Enter => Some(Input::Next),
            KeyCode::Left => Some(Input::Prev),
            _ => None,
        },
        Page::Results { .. } | Page::NotFound { .. } => match key.code {
            KeyCode::Enter => Some(Input::Confirm),
            _ => None,
        },
        Page::Loading { .. } | Page::ResultsLoading => None,
    };

    input.map_or(KeyAction::None, KeyAction::Input)
}
