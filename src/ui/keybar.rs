use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use quizkit::app::Page;

pub fn draw_keybar(f: &mut Frame, area: Rect, page: &Page) {
    let bindings: Vec<(&str, &str)> = match page {
        Page::Home { .. } => vec![
            ("↑/↓", "select"),
            ("Enter", "open"),
            ("Alt+←/→", "back/forward"),
            ("Ctrl+Q", "quit"),
        ],
        Page::Quiz => vec![
            ("a-z", "answer"),
            ("←/→", "prev/next"),
            ("0-9", "jump"),
            ("Esc", "home"),
            ("Ctrl+Q", "quit"),
        ],
        Page::Results { .. } | Page::NotFound { .. } => vec![
            ("Enter", "home"),
            ("Alt+←/→", "back/forward"),
            ("Ctrl+Q", "quit"),
        ],
        Page::Loading { .. } | Page::ResultsLoading => vec![("Esc", "home"), ("Ctrl+Q", "quit")],
    };

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (i, (key, action)) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let line = Line::from(spans);
    let widget = Paragraph::new(line).style(Style::default().bg(Color::Rgb(20, 20, 20)));
    f.render_widget(widget, area);
}
