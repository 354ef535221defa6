use ratatui::prelude::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Debug)]
pub struct AppLayout {
    pub sidebar: Rect,
    pub content: Rect,
    pub notification: Rect,
    pub statusline: Rect,
}

impl AppLayout {
    pub fn new(rect: Rect) -> Self {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(100),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(rect);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Percentage(100)])
            .split(main[0]);

        Self {
            sidebar: columns[0],
            content: columns[1],
            notification: main[1],
            statusline: main[2],
        }
    }
}
