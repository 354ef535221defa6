use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{notification::Severity, Model};

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let Some(notification) = model.notifications.last() else {
        return;
    };

    let color = match notification.severity {
        Severity::Info => Color::Blue,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", notification.title),
            Style::default().fg(Color::Black).bg(color),
        ),
        Span::styled(
            format!(" {}", notification.description),
            Style::default().fg(color),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), rect);
}
