//! Stateless renderers for each panel view.

use crate::constants::{HOME_TITLE, PLACEHOLDER_HINT, SYNC_EMPTY_HINT};
use crate::dashboard::DashboardView;
use crate::demo::{self, ticket};
use crate::operations::{OperationKind, PricingState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_alignment(Alignment::Left)
}

fn status_color(status: &str) -> Color {
    match status {
        "active" | "connected" | "complete" | "Active" => Color::Green,
        "checked in" | "stable" | "Booking" => Color::Blue,
        "cancelled" | "refunded" => Color::Red,
        _ => Color::Gray,
    }
}

pub fn render_home(f: &mut Frame, rect: Rect, view: &DashboardView<'_>) {
    let outer = panel_block(HOME_TITLE);
    let inner = outer.inner(rect);
    f.render_widget(outer, rect);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    // KPI cards
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[0]);
    for (kpi, area) in demo::KPIS.iter().zip(cards.iter()) {
        let body = vec![
            Line::from(Span::styled(kpi.value, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(format!("target {}", kpi.target)),
            Line::from(Span::styled(kpi.change, Style::default().fg(Color::Cyan))),
        ];
        f.render_widget(Paragraph::new(body).block(panel_block(kpi.label)), *area);
    }

    // Dynamic pricing
    let (label, color) = match view.pricing {
        PricingState::Inactive => ("Dynamic pricing: off  (p to enable)", Color::Gray),
        PricingState::Activating => ("Dynamic pricing: activating...", Color::Yellow),
        PricingState::Active => ("Dynamic pricing: ACTIVE  (p to disable)", Color::Yellow),
    };
    f.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(color))).block(panel_block("Pricing engine")),
        rows[1],
    );

    // Export progress
    let export = view.operation(OperationKind::Export);
    let gauge = Gauge::default()
        .block(panel_block("Report export (e)"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(u16::from(export.progress))
        .label(if export.is_running() {
            format!("{}%", export.progress)
        } else {
            "idle".to_string()
        });
    f.render_widget(gauge, rows[2]);

    // Forecast
    let forecast_rows = demo::FORECAST
        .iter()
        .map(|(day, score, trend)| Row::new(vec![day.to_string(), score.to_string(), trend.to_string()]));
    let table = Table::new(forecast_rows, [Constraint::Length(6), Constraint::Length(8), Constraint::Length(8)])
        .header(Row::new(vec!["Day", "Score", "Trend"]).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(panel_block("Demand forecast"));
    f.render_widget(table, rows[3]);
}

pub fn render_tickets(
    f: &mut Frame,
    rect: Rect,
    view: &DashboardView<'_>,
    table_state: &mut TableState,
    focused: bool,
) {
    let header_box = if view.all_selected() { "[x]" } else { "[ ]" };
    let rows = view.records.iter().map(|record| {
        let check = if view.is_selected(&record.id) { "[x]" } else { "[ ]" };
        let status = record.attr(ticket::STATUS).unwrap_or("-");
        Row::new(vec![
            Cell::from(check),
            Cell::from(record.id.clone()),
            Cell::from(record.attr(ticket::HOLDER).unwrap_or("-").to_string()),
            Cell::from(record.attr(ticket::SHOW).unwrap_or("-").to_string()),
            Cell::from(record.attr(ticket::TIER).unwrap_or("-").to_string()),
            Cell::from(record.attr(ticket::PRICE).unwrap_or("-").to_string()),
            Cell::from(Span::styled(status.to_string(), Style::default().fg(status_color(status)))),
            Cell::from(record.attr(ticket::DATE).unwrap_or("-").to_string()),
        ])
    });

    let title = if view.selection.is_empty() {
        "Tickets".to_string()
    } else {
        format!("Tickets · {} selected · c cancel · f refund", view.selection.len())
    };
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(10),
            Constraint::Min(14),
            Constraint::Min(12),
            Constraint::Length(14),
            Constraint::Length(6),
            Constraint::Length(11),
            Constraint::Length(11),
        ],
    )
    .header(
        Row::new(vec![header_box, "ID", "Holder", "Show", "Tier", "Price", "Status", "Date"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(panel_block(&title).border_style(Style::default().fg(border)))
    .row_highlight_style(Style::default().bg(Color::DarkGray));

    f.render_stateful_widget(table, rect, table_state);
}

pub fn render_data_integration(f: &mut Frame, rect: Rect, view: &DashboardView<'_>) {
    let sync = view.operation(OperationKind::Sync);
    let title = if sync.is_running() {
        "Data integration · syncing..."
    } else {
        "Data integration · s to sync"
    };

    if view.sync_cache.is_empty() {
        let hint = Paragraph::new(SYNC_EMPTY_HINT)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(panel_block(title));
        f.render_widget(hint, rect);
        return;
    }

    let rows = view.sync_cache.iter().map(|item| {
        Row::new(vec![
            Cell::from(item.id.to_string()),
            Cell::from(item.name.clone()),
            Cell::from(item.value.clone()),
            Cell::from(Span::styled(item.status.clone(), Style::default().fg(status_color(&item.status)))),
            Cell::from(item.last_updated.clone()),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(24),
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Length(16),
        ],
    )
    .header(
        Row::new(vec!["#", "Source", "Value", "Status", "Updated"]).style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(panel_block(title));
    f.render_widget(table, rect);
}

pub fn render_shows(f: &mut Frame, rect: Rect) {
    let rows = demo::SHOWS.iter().map(|show| {
        Row::new(vec![
            Cell::from(show.title),
            Cell::from(show.date),
            Cell::from(Span::styled(show.status, Style::default().fg(status_color(show.status)))),
            Cell::from(show.occupancy),
        ])
    });
    let table = Table::new(
        rows,
        [Constraint::Min(24), Constraint::Length(14), Constraint::Length(10), Constraint::Length(10)],
    )
    .header(Row::new(vec!["Show", "Date", "Status", "Occupancy"]).style(Style::default().add_modifier(Modifier::BOLD)))
    .block(panel_block("Show management"));
    f.render_widget(table, rect);
}

pub fn render_engagement(f: &mut Frame, rect: Rect) {
    let outer = panel_block("Audience engagement");
    let inner = outer.inner(rect);
    f.render_widget(outer, rect);

    let constraints = vec![Constraint::Length(3); demo::SEGMENTS.len()];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for ((label, engagement, state), area) in demo::SEGMENTS.iter().zip(rows.iter()) {
        let color = if *state == "now" { Color::Red } else { Color::Cyan };
        let gauge = Gauge::default()
            .block(Block::default().title(format!("{} ({})", label, state)))
            .gauge_style(Style::default().fg(color))
            .percent(u16::from(*engagement));
        f.render_widget(gauge, *area);
    }
}

pub fn render_audience(f: &mut Frame, rect: Rect, zone_state: &mut TableState, picked: Option<usize>, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(rect);

    let rows = demo::ZONES.iter().enumerate().map(|(i, zone)| {
        let marker = if picked == Some(i) { "◆" } else { " " };
        let row = Row::new(vec![
            marker.to_string(),
            zone.name.to_string(),
            format!("{}%", zone.occupancy),
            zone.capacity.to_string(),
            zone.revenue.to_string(),
        ]);
        if picked == Some(i) {
            row.style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        } else {
            row
        }
    });
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Min(22),
            Constraint::Length(10),
            Constraint::Length(9),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["", "Zone", "Occupancy", "Capacity", "Revenue"]).style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(panel_block("Audience by zone").border_style(Style::default().fg(border)))
    .row_highlight_style(Style::default().bg(Color::DarkGray));
    f.render_stateful_widget(table, chunks[0], zone_state);

    let detail = match picked.and_then(|i| demo::ZONES.get(i)) {
        Some(zone) => format!(
            "{} · {}% of {} seats · {}",
            zone.name, zone.occupancy, zone.capacity, zone.revenue
        ),
        None => "No zone picked".to_string(),
    };
    f.render_widget(Paragraph::new(detail).block(panel_block("Zone")), chunks[1]);
}

pub fn render_live_monitoring(f: &mut Frame, rect: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rect);

    let feeds = demo::CAMERAS
        .iter()
        .map(|(location, flow)| Row::new(vec!["● LIVE".to_string(), location.to_string(), flow.to_string()]));
    let table = Table::new(feeds, [Constraint::Length(8), Constraint::Min(18), Constraint::Length(10)])
        .header(Row::new(vec!["", "Camera", "Flow"]).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(panel_block("Camera feeds"));
    f.render_widget(table, chunks[0]);

    let alerts: Vec<Line> = demo::ALERTS
        .iter()
        .map(|(time, message)| {
            Line::from(vec![
                Span::styled(format!("{} ", time), Style::default().fg(Color::DarkGray)),
                Span::raw(*message),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(alerts).block(panel_block("Alerts")), chunks[1]);
}

pub fn render_placeholder(f: &mut Frame, rect: Rect, title: &str) {
    let body = vec![
        Line::from(Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(PLACEHOLDER_HINT),
    ];
    let paragraph = Paragraph::new(body).alignment(Alignment::Center).block(panel_block(title));
    f.render_widget(paragraph, rect);
}
