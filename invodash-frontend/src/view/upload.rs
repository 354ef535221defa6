use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{upload::UploadState, Model};

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(9),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .split(rect);

    header(frame, rows[0]);
    picker(model, frame, rows[1]);
    selection(model, frame, rows[2]);
    status(model, frame, rows[3]);
}

fn header(frame: &mut Frame, rect: Rect) {
    let lines = vec![
        Line::styled(
            "Upload Invoice",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Upload your invoice documents to the processing webhook",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), rect);
}

fn picker(model: &Model, frame: &mut Frame, rect: Rect) {
    let mut lines = vec![
        Line::from("Press o and enter a file path to select an invoice"),
        Line::styled(
            "PDF, JPG, PNG, DOC (MAX. 10MB)",
            Style::default().fg(Color::DarkGray),
        ),
        Line::raw(""),
        Line::styled(
            "Secure Upload: your files are securely transmitted",
            Style::default().fg(Color::DarkGray),
        ),
        Line::styled(
            "Auto Processing: invoices are automatically processed via n8n",
            Style::default().fg(Color::DarkGray),
        ),
        Line::styled(
            "Multi-Device: upload from any device - PC, tablet, or mobile",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    if let Some(input) = &model.prompt {
        lines.push(Line::from(vec![
            Span::styled("Path: ", Style::default().fg(Color::Blue)),
            Span::raw(input.clone()),
            Span::styled("█", Style::default().fg(Color::Blue)),
        ]));
    }

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Invoice Upload"),
    );

    frame.render_widget(card, rect);
}

fn selection(model: &Model, frame: &mut Frame, rect: Rect) {
    let Some(file) = model.upload.selected_file() else {
        return;
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                file.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {:.2} MB", file.size_in_mb()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::styled(
            "s upload · x remove",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        rect,
    );
}

fn status(model: &Model, frame: &mut Frame, rect: Rect) {
    let line = match &model.upload {
        UploadState::Uploading(file) => Line::styled(
            format!("Uploading {}...", file.name),
            Style::default().fg(Color::Yellow),
        ),
        UploadState::Succeeded { uploaded } => Line::styled(
            format!("{} uploaded successfully!", uploaded),
            Style::default().fg(Color::Green),
        ),
        UploadState::Failed { .. } => Line::styled(
            "Upload failed. Please try again.",
            Style::default().fg(Color::Red),
        ),
        UploadState::Idle | UploadState::FileSelected(_) => return,
    };

    frame.render_widget(Paragraph::new(line), rect);
}
