use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use quizkit::view::QuestionView;

pub fn draw_sidebar(f: &mut Frame, area: Rect, view: &QuestionView) {
    let inner_height = area.height.saturating_sub(2) as usize; // top/bottom border

    // Keep the active indicator in view
    let active = view.question_number.saturating_sub(1);
    let scroll = active.saturating_sub(inner_height.saturating_sub(1));

    let lines: Vec<Line> = view
        .indicators
        .iter()
        .skip(scroll)
        .take(inner_height)
        .map(|ind| {
            let (icon, color) = if ind.answered {
                ("●", Color::Green)
            } else {
                ("○", Color::DarkGray)
            };
            let style = if ind.active {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            Line::from(vec![
                Span::styled(if ind.active { " ▸ " } else { "   " }, style),
                Span::styled(format!("{} ", icon), style.fg(color)),
                Span::styled(format!("{:>3}", ind.number), style),
            ])
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Qs ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}
