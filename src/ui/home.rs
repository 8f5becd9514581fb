use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use quizkit::loader::QuizEntry;

pub fn draw_home(f: &mut Frame, area: Rect, entries: &[QuizEntry], cursor: usize) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Quizzes",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if entries.is_empty() {
        lines.push(Line::from(Span::styled(
            "No quizzes found.",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, entry) in entries.iter().enumerate() {
        let style = if i == cursor {
            Style::default()
                .fg(Color::White)
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(if i == cursor { " ▸ " } else { "   " }, style),
            Span::styled(entry.title.clone(), style),
            Span::styled(format!("  ({})", entry.id), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let block = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}
