use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

use crate::model::dashboard::{InvoiceStatus, Trend, METRICS, RECENT_ACTIVITY, SALES, STATS};

pub fn view(frame: &mut Frame, rect: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(5),
        ])
        .split(rect);

    header(frame, rows[0]);
    metrics(frame, rows[1]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    sales(frame, charts[0]);
    activity(frame, charts[1]);

    stats(frame, rows[3]);
}

fn header(frame: &mut Frame, rect: Rect) {
    let lines = vec![
        Line::styled(
            "Welcome back!",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Here's what's happening with your invoices today.",
            Style::default().fg(Color::DarkGray),
        ),
    ];

    frame.render_widget(Paragraph::new(lines), rect);
}

fn metrics(frame: &mut Frame, rect: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rect);

    for (metric, column) in METRICS.iter().zip(columns.iter()) {
        let (arrow, color) = match metric.trend {
            Trend::Up => ("▲", Color::Green),
            Trend::Down => ("▼", Color::Red),
        };

        let lines = vec![
            Line::styled(metric.value, Style::default().add_modifier(Modifier::BOLD)),
            Line::from(vec![
                Span::styled(
                    format!("{} {}", arrow, metric.change),
                    Style::default().fg(color),
                ),
                Span::styled(" from last month", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(metric.title)
                .title_style(Style::default().fg(Color::DarkGray)),
        );

        frame.render_widget(card, *column);
    }
}

fn sales(frame: &mut Frame, rect: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Sales Analytics");
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); SALES.len()])
        .split(inner);

    for (month, row) in SALES.iter().zip(rows.iter()) {
        let gauge = Gauge::default()
            .ratio(f64::from(month.value) / 100.0)
            .label(format!("{} {}%", month.month, month.value))
            .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray));

        frame.render_widget(gauge, *row);
    }
}

fn stats(frame: &mut Frame, rect: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, STATS.len() as u32);
            STATS.len()
        ])
        .split(rect);

    for (stat, column) in STATS.iter().zip(columns.iter()) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(*column);
        frame.render_widget(block, *column);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Length(1)])
            .split(inner);

        let lines = vec![
            Line::styled(stat.title, Style::default().fg(Color::DarkGray)),
            Line::styled(stat.value, Style::default().add_modifier(Modifier::BOLD)),
        ];
        frame.render_widget(Paragraph::new(lines), rows[0]);

        let gauge = Gauge::default()
            .ratio(f64::from(stat.progress) / 100.0)
            .label("")
            .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray));
        frame.render_widget(gauge, rows[1]);
    }
}

fn activity(frame: &mut Frame, rect: Rect) {
    let rows: Vec<Row> = RECENT_ACTIVITY
        .iter()
        .map(|activity| {
            let status_color = match activity.status {
                InvoiceStatus::Paid => Color::Green,
                InvoiceStatus::Pending => Color::Yellow,
                InvoiceStatus::Overdue => Color::Red,
            };

            Row::new(vec![
                Cell::from(activity.invoice),
                Cell::from(Span::styled(
                    activity.date,
                    Style::default().fg(Color::DarkGray),
                )),
                Cell::from(activity.amount),
                Cell::from(Span::styled(
                    activity.status.label(),
                    Style::default().fg(status_color),
                )),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(8),
        ],
    )
    .block(Block::default().borders(Borders::ALL).title("Recent Activity"));

    frame.render_widget(table, rect);
}
