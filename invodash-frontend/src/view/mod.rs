use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::{error::AppError, model::{Model, Page}, terminal::TerminalWrapper};

mod dashboard;
mod notification;
mod sidebar;
mod statusline;
mod upload;

pub fn render_model(terminal: &mut TerminalWrapper, model: &Model) -> Result<(), AppError> {
    terminal.draw(|frame| {
        let layout = model.layout.clone();

        sidebar::view(model, frame, layout.sidebar);

        match model.page {
            Page::Dashboard => dashboard::view(frame, layout.content),
            Page::Upload => upload::view(model, frame, layout.content),
            Page::Analytics | Page::Invoices | Page::Settings => {
                placeholder(model, frame, layout.content)
            }
        }

        notification::view(model, frame, layout.notification);
        statusline::view(model, frame, layout.statusline);
    })
}

fn placeholder(model: &Model, frame: &mut Frame, rect: Rect) {
    let paragraph = Paragraph::new(format!("{} is not available yet.", model.page.title()))
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(paragraph, rect);
}
