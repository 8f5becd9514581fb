use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use quizkit::view::QuestionView;

const LOW_TIME_SECS: u32 = 30;

pub fn draw_titlebar(f: &mut Frame, area: Rect, view: &QuestionView) {
    let title_text = format!("[ {} ]", view.title);
    let title_span = Span::styled(
        title_text.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let timer_text = match &view.timer {
        Some(t) => format!(" {} remaining ", t),
        None => String::new(),
    };
    let low = view.time_remaining.is_some_and(|s| s <= LOW_TIME_SECS);
    let timer_span = if low {
        Span::styled(
            timer_text.clone(),
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(timer_text.clone(), Style::default().fg(Color::Rgb(200, 200, 120)))
    };

    // Center the title, timer flush right
    let available = area.width as usize;
    let title_len = title_text.chars().count();
    let timer_len = timer_text.chars().count();
    let center_pad = available.saturating_sub(title_len) / 2;
    let right_pad = available.saturating_sub(center_pad + title_len + timer_len);

    let line = Line::from(vec![
        Span::raw(" ".repeat(center_pad)),
        title_span,
        Span::raw(" ".repeat(right_pad)),
        timer_span,
    ]);

    let widget = Paragraph::new(line)
        .style(Style::default().bg(Color::DarkGray))
        .alignment(Alignment::Left);
    f.render_widget(widget, area);
}
