use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use quizkit::app::{App, Page};
use quizkit::view::derive_view;

use crate::tui::HostState;

pub fn draw_statusbar(f: &mut Frame, area: Rect, app: &App, host: &HostState) {
    let mut spans: Vec<Span> = vec![Span::raw(" ")];

    if let Page::Quiz = app.page() {
        if let Some(view) = derive_view(&app.session().state()) {
            let answered = view.indicators.iter().filter(|i| i.answered).count();
            spans.push(Span::styled(
                format!("● {} answered", answered),
                Style::default().fg(Color::Green),
            ));
            spans.push(Span::raw("   "));
            spans.push(Span::styled(
                format!("○ {} left", view.total_questions - answered),
                Style::default().fg(Color::White),
            ));
            spans.push(Span::raw("   "));
        }
    }

    if let Some(notice) = &host.notice {
        spans.push(Span::styled(notice.clone(), Style::default().fg(Color::Red)));
    }

    let widget = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Rgb(30, 30, 30)));
    f.render_widget(widget, area);
}
