use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::model::{Model, Page};

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let left = Paragraph::new(format!(" {}", model.page.title()))
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(left, rect);

    let hints = if model.page == Page::Upload {
        "o pick · s upload · x remove · Tab next page · q quit "
    } else {
        "1-5 pages · Tab next page · Esc dismiss · q quit "
    };

    let right = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    frame.render_widget(right, rect);
}
