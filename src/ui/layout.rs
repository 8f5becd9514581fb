use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub titlebar: Rect,
    pub body: Rect,
    pub statusbar: Rect,
    pub keybar: Rect,
}

pub struct QuizLayout {
    pub sidebar: Rect,
    pub main: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // titlebar
            Constraint::Min(5),    // page body
            Constraint::Length(1), // statusbar
            Constraint::Length(1), // keybar
        ])
        .split(area);

    AppLayout {
        titlebar: vertical[0],
        body: vertical[1],
        statusbar: vertical[2],
        keybar: vertical[3],
    }
}

pub fn split_middle(body: Rect) -> QuizLayout {
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // question indicators
            Constraint::Min(20),    // question
        ])
        .split(body);

    QuizLayout {
        sidebar: middle[0],
        main: middle[1],
    }
}
