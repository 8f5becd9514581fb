use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use quizkit::model::Content;
use quizkit::view::{AnswerFeedback, QuestionView};

pub fn draw_question(f: &mut Frame, area: Rect, view: &QuestionView) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(
            "Question {} of {}  ({:.2}%)",
            view.question_number, view.total_questions, view.progress_percentage
        ),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        view.prompt.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    if let Some(content) = &view.content {
        lines.push(Line::from(""));
        lines.extend(content_lines(content));
    }

    lines.push(Line::from(""));
    for opt in &view.options {
        let marker = if opt.selected { "(●)" } else { "( )" };
        let style = if opt.selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {} {}. ", marker, opt.label), style),
            Span::styled(opt.text.clone(), style),
        ]));
    }

    match view.feedback {
        Some(AnswerFeedback::Correct) => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "✓ Correct",
                Style::default().fg(Color::Green),
            )));
        }
        Some(AnswerFeedback::Incorrect) => {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "✗ Incorrect",
                Style::default().fg(Color::Red),
            )));
        }
        None => {}
    }

    lines.push(Line::from(""));
    let prev_style = if view.prev_disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Cyan)
    };
    lines.push(Line::from(vec![
        Span::styled("[← Previous]", prev_style),
        Span::raw("   "),
        Span::styled(
            format!("[{} →]", view.next_label),
            Style::default().fg(Color::Cyan),
        ),
    ]));

    let block = Block::default().borders(Borders::ALL);
    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn content_lines(content: &Content) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    match content {
        Content::Image { src, alt } => {
            let label = if alt.is_empty() { src.clone() } else { format!("{} ({})", alt, src) };
            vec![Line::from(Span::styled(format!("[image] {}", label), dim))]
        }
        Content::Video { src } => {
            vec![Line::from(Span::styled(format!("[video] {}", src), dim))]
        }
        Content::Code { language, code } => {
            let mut out = Vec::new();
            if !language.is_empty() {
                out.push(Line::from(Span::styled(format!("── {} ──", language), dim)));
            }
            for l in code.lines() {
                out.push(Line::from(Span::styled(
                    format!("  {}", l),
                    Style::default().fg(Color::Yellow),
                )));
            }
            out
        }
    }
}
