use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table, Wrap,
};

use crate::app::{App, CUSTOMER_FIELD_LABELS, Mode, TRAINING_FIELD_LABELS, View};
use crate::calendar::{self, MonthCursor};
use crate::config::ThemePreference;
use crate::models::Training;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    let theme = theme_from(app.theme);
    draw_background(frame, size, &theme);
    draw_main(frame, app, size, &theme);

    match app.mode {
        Mode::Loading => draw_overlay(frame, size, "Loading data from server...", &theme),
        Mode::Error => draw_error(frame, app, size, &theme),
        Mode::CustomerForm => draw_customer_form(frame, app, size, &theme),
        Mode::TrainingForm => draw_training_form(frame, app, size, &theme),
        Mode::ConfirmDeleteCustomer => draw_confirm_customer_delete(frame, app, size, &theme),
        Mode::ConfirmDeleteTraining => draw_confirm_training_delete(frame, app, size, &theme),
        Mode::ConfirmReset => draw_confirm_reset(frame, size, &theme),
        Mode::FilterInput => draw_filter_input(frame, app, size, &theme),
        Mode::Browse => {}
    }

    if matches!(app.mode, Mode::Browse) && !app.show_help {
        if let Some(toast) = app.active_toast() {
            draw_toast(frame, size, &toast.message, toast.is_error, &theme);
        }
    }

    if app.show_help {
        draw_help(frame, size, &theme);
    }
}

fn draw_main(frame: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let content = area.inner(Margin {
        vertical: 1,
        horizontal: 2,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(content);

    let header = Paragraph::new(header_line(app, theme))
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(theme.border_style())
                .style(theme.panel_style()),
        );
    frame.render_widget(header, chunks[0]);

    match app.view {
        View::Customers => draw_customer_table(frame, app, chunks[1], theme),
        View::Trainings => draw_training_table(frame, app, chunks[1], theme),
        View::Calendar => draw_calendar(frame, app, chunks[1], theme),
        View::Stats => draw_stats(frame, app, chunks[1], theme),
    }

    let footer = Paragraph::new(footer_line(app, theme)).alignment(Alignment::Left);
    frame.render_widget(footer, chunks[2]);
}

fn header_line(app: &App, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            "Personal Trainer",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];

    for (index, view) in [View::Customers, View::Trainings, View::Calendar, View::Stats]
        .into_iter()
        .enumerate()
    {
        let label = format!(" {} {} ", index + 1, view.title());
        if view == app.view {
            spans.push(Span::styled(
                label,
                Style::default()
                    .bg(theme.accent)
                    .fg(theme.accent_contrast())
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(label, theme.muted_style()));
        }
        spans.push(Span::raw(" "));
    }

    if !app.filter.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("filter: {}", app.filter),
            Style::default().fg(theme.highlight),
        ));
    }

    Line::from(spans)
}

fn footer_line(app: &App, theme: &Theme) -> Line<'static> {
    let hints = match app.view {
        View::Customers => {
            "a add • e edit • d delete • t training • x export CSV • y copy CSV • / filter • h help • q quit"
        }
        View::Trainings => "d delete • / filter • r refresh • h help • q quit",
        View::Calendar => "←→↑↓ day • n/p month • t today • h help • q quit",
        View::Stats => "1-4 views • r refresh • h help • q quit",
    };
    Line::from(Span::styled(hints, theme.muted_style()))
}

fn draw_customer_table(frame: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let rows: Vec<Row> = app
        .visible_customers()
        .iter()
        .map(|customer| {
            let data = &customer.data;
            Row::new(vec![
                Cell::from(data.firstname.clone()),
                Cell::from(data.lastname.clone()),
                Cell::from(data.email.clone()),
                Cell::from(data.phone.clone()),
                Cell::from(data.streetaddress.clone()),
                Cell::from(data.postcode.clone()),
                Cell::from(data.city.clone()),
            ])
        })
        .collect();
    let count = rows.len();

    let header = Row::new(CUSTOMER_FIELD_LABELS.map(Cell::from))
        .style(theme.muted_style().add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Ratio(1, 8),
        Constraint::Ratio(1, 8),
        Constraint::Ratio(2, 8),
        Constraint::Ratio(1, 8),
        Constraint::Ratio(1, 8),
        Constraint::Ratio(1, 8),
        Constraint::Ratio(1, 8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel_block(
            &format!("Customers ({count})"),
            theme,
        ))
        .row_highlight_style(
            Style::default()
                .bg(theme.accent)
                .fg(theme.accent_contrast())
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▍ ");

    frame.render_stateful_widget(table, area, &mut app.customer_state);
}

fn draw_training_table(frame: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let rows: Vec<Row> = app
        .visible_trainings()
        .iter()
        .map(|training| {
            Row::new(vec![
                Cell::from(format_training_date(training)),
                Cell::from(format!("{} min", training.duration)),
                Cell::from(training.activity.clone()),
                Cell::from(training.customer_name()),
            ])
        })
        .collect();
    let count = rows.len();

    let header = Row::new(["Date", "Duration", "Activity", "Customer"].map(Cell::from))
        .style(theme.muted_style().add_modifier(Modifier::BOLD));
    let widths = [
        Constraint::Length(18),
        Constraint::Length(10),
        Constraint::Min(16),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(panel_block(
            &format!("Trainings ({count})"),
            theme,
        ))
        .row_highlight_style(
            Style::default()
                .bg(theme.accent)
                .fg(theme.accent_contrast())
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▍ ");

    frame.render_stateful_widget(table, area, &mut app.training_state);
}

fn draw_stats(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let totals = app.stat_totals;
    let summary = Line::from(vec![
        Span::styled(
            format!("{} activities", totals.activities),
            Style::default().fg(theme.accent),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} minutes total", totals.total_minutes),
            Style::default().fg(theme.highlight),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{} sessions", totals.total_sessions),
            Style::default().fg(theme.success),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(summary)
            .alignment(Alignment::Center)
            .block(panel_block("Dashboard", theme)),
        chunks[0],
    );

    let max_minutes = app
        .summaries
        .iter()
        .map(|summary| summary.total_minutes)
        .max()
        .unwrap_or(0);
    let bar_area = chunks[1].width.saturating_sub(36) as i64;

    let lines: Vec<Line> = if app.summaries.is_empty() {
        vec![Line::from(Span::styled(
            "No trainings recorded.",
            theme.muted_style(),
        ))]
    } else {
        app.summaries
            .iter()
            .map(|summary| {
                let width = bar_width(summary.total_minutes, max_minutes, bar_area);
                let bar: String = "█".repeat(width);
                Line::from(vec![
                    Span::raw(format!("{:<14.14} ", summary.activity)),
                    Span::styled(bar, Style::default().fg(theme.accent)),
                    Span::raw(format!(
                        " {} min / {} sessions",
                        summary.total_minutes, summary.sessions
                    )),
                ])
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(panel_block("Total Minutes by Activity", theme)),
        chunks[1],
    );
}

fn bar_width(minutes: i64, max_minutes: i64, available: i64) -> usize {
    if max_minutes <= 0 || available <= 0 || minutes <= 0 {
        return 0;
    }
    ((minutes * available) / max_minutes).max(1) as usize
}

fn draw_calendar(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(60), Constraint::Min(24)])
        .split(area);

    let by_day = calendar::trainings_by_day(&app.trainings);
    let grid = build_calendar_lines(app.month, &by_day, app.selected_day, theme);
    frame.render_widget(
        Paragraph::new(grid).block(panel_block(&app.month.label(), theme)),
        chunks[0],
    );

    let day_trainings: Vec<&Training> = by_day
        .get(&app.selected_day)
        .map(|entries| entries.clone())
        .unwrap_or_default();
    let items: Vec<ListItem> = if day_trainings.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No trainings on this day.",
            theme.muted_style(),
        )))]
    } else {
        day_trainings
            .iter()
            .map(|training| {
                let time = calendar::parse_training_date(training)
                    .map(|date| date.format("%H:%M").to_string())
                    .unwrap_or_else(|| "--:--".to_string());
                ListItem::new(Line::from(vec![
                    Span::styled(time, Style::default().fg(theme.accent)),
                    Span::raw(format!(
                        "  {} — {} ({} min)",
                        training.activity,
                        training.customer_name(),
                        training.duration
                    )),
                ]))
            })
            .collect()
    };
    let title = app.selected_day.format("%a %Y-%m-%d").to_string();
    frame.render_widget(List::new(items).block(panel_block(&title, theme)), chunks[1]);
}

fn build_calendar_lines(
    month: MonthCursor,
    by_day: &HashMap<NaiveDate, Vec<&Training>>,
    selected_day: NaiveDate,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let cell_width = 7;
    let mut lines = Vec::new();

    let header_labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let mut header_spans = Vec::new();
    for (index, label) in header_labels.iter().enumerate() {
        let text = format!("{:^width$}", label, width = cell_width);
        header_spans.push(Span::styled(text, theme.muted_style()));
        if index < header_labels.len() - 1 {
            header_spans.push(Span::raw(" "));
        }
    }
    lines.push(Line::from(header_spans));

    for week in calendar::month_weeks(month) {
        let mut spans = Vec::new();
        for (index, cell) in week.iter().enumerate() {
            let span = match cell {
                Some(date) => {
                    let sessions = by_day.get(date).map(Vec::len).unwrap_or(0);
                    let label = if sessions > 0 {
                        format!("{:>2} ({:>2})", date.day(), sessions.min(99))
                    } else {
                        format!("{:>2}     ", date.day())
                    };
                    if *date == selected_day {
                        Span::styled(
                            label,
                            Style::default()
                                .bg(theme.accent)
                                .fg(theme.accent_contrast())
                                .add_modifier(Modifier::BOLD),
                        )
                    } else if sessions > 0 {
                        Span::styled(label, Style::default().fg(theme.success))
                    } else {
                        Span::raw(label)
                    }
                }
                None => Span::raw(format!("{:width$}", "", width = cell_width)),
            };
            spans.push(span);
            if index < week.len() - 1 {
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
    }

    lines
}

fn draw_customer_form(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let Some(form) = app.customer_form.as_ref() else {
        return;
    };
    let block = centered_rect(60, 60, area);
    frame.render_widget(Clear, block);

    let mut lines = Vec::new();
    for (index, label) in CUSTOMER_FIELD_LABELS.iter().enumerate() {
        let value = if index == form.focus {
            Span::styled(
                form.values[index].clone(),
                Style::default().fg(theme.accent),
            )
        } else {
            Span::raw(form.values[index].clone())
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<16}", format!("{label}:")),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            value,
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab next field • Enter save • Esc cancel",
        theme.muted_style(),
    )));
    if let Some(status) = &app.status {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(theme.error),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(panel_block(form.title(), theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, block);
}

fn draw_training_form(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let Some(form) = app.training_form.as_ref() else {
        return;
    };
    let block = centered_rect(60, 45, area);
    frame.render_widget(Clear, block);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Customer:       ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(form.customer_name.clone()),
        ]),
        Line::from(""),
    ];
    for (index, label) in TRAINING_FIELD_LABELS.iter().enumerate() {
        let value = if index == form.focus {
            Span::styled(
                form.values[index].clone(),
                Style::default().fg(theme.accent),
            )
        } else {
            Span::raw(form.values[index].clone())
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<20}", format!("{label}:")),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            value,
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab next field • Enter save • Esc cancel",
        theme.muted_style(),
    )));
    if let Some(status) = &app.status {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(theme.error),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(panel_block("Add Training", theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, block);
}

fn draw_confirm_customer_delete(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let Some(customer) = app.pending_customer_delete.as_ref() else {
        return;
    };
    let message = format!(
        "Delete {}? This will also delete all of their training sessions on the server.",
        customer.data.full_name()
    );
    draw_confirm(frame, area, "Delete Customer", &message, theme);
}

fn draw_confirm_training_delete(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let Some(training) = app.pending_training_delete.as_ref() else {
        return;
    };
    let message = format!(
        "Delete {} ({} min) for {}?",
        training.activity,
        training.duration,
        training.customer_name()
    );
    draw_confirm(frame, area, "Delete Training", &message, theme);
}

fn draw_confirm_reset(frame: &mut Frame, area: Rect, theme: &Theme) {
    draw_confirm(
        frame,
        area,
        "Reset Database",
        "Reset the demo database? All customers and trainings will be replaced with seed data. This cannot be undone.",
        theme,
    );
}

fn draw_confirm(frame: &mut Frame, area: Rect, title: &str, message: &str, theme: &Theme) {
    let block = centered_rect(60, 30, area);
    frame.render_widget(Clear, block);
    let lines = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "y confirm • n cancel",
            theme.muted_style(),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel_block(title, theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, block);
}

fn draw_filter_input(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let block = centered_rect(60, 25, area);
    frame.render_widget(Clear, block);
    let lines = vec![
        Line::from("Show only rows containing:"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Filter: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                app.filter_input.clone(),
                Style::default().fg(theme.accent),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter apply • Esc cancel",
            theme.muted_style(),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(panel_block("Filter", theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, block);
}

fn draw_error(frame: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let block = centered_rect(60, 30, area);
    frame.render_widget(Clear, block);
    let lines = vec![
        Line::from(Span::styled(
            app.status.clone().unwrap_or_else(|| "Unknown error".to_string()),
            Style::default().fg(theme.error),
        )),
        Line::from(""),
        Line::from(Span::styled("r retry • q quit", theme.muted_style())),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel_block("Connection Error", theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, block);
}

fn draw_overlay(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let block = centered_rect(60, 20, area);
    frame.render_widget(Clear, block);
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .block(panel_block("Status", theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, block);
}

fn draw_toast(frame: &mut Frame, area: Rect, message: &str, is_error: bool, theme: &Theme) {
    let width = (message.len() as u16 + 6).clamp(20, area.width.saturating_sub(2));
    let height = 3;
    let x = area.x + area.width.saturating_sub(width + 1);
    let y = area.y + area.height.saturating_sub(height + 4);
    let rect = Rect::new(x, y, width, height);

    frame.render_widget(Clear, rect);
    let style = if is_error {
        Style::default().fg(theme.error).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.success).add_modifier(Modifier::BOLD)
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(message.to_string(), style)))
        .alignment(Alignment::Center)
        .block(panel_block("Notice", theme));
    frame.render_widget(paragraph, rect);
}

fn draw_help(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = centered_rect(70, 70, area);
    frame.render_widget(Clear, block);

    let lines = vec![
        Line::from(Span::styled(
            "Keys",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("1-4 / Tab       switch view"),
        Line::from("↑ ↓             select row"),
        Line::from("a               add customer"),
        Line::from("e               edit selected customer"),
        Line::from("d               delete selected row"),
        Line::from("t               add training for selected customer"),
        Line::from("x               export customers to CSV file"),
        Line::from("y               copy customers CSV to clipboard"),
        Line::from("/               filter rows (Esc clears)"),
        Line::from("n / p           next / previous month (calendar)"),
        Line::from("r               refresh from server"),
        Line::from("c               cycle colour theme"),
        Line::from("R               reset demo database"),
        Line::from("q               quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press h or Esc to close",
            theme.muted_style(),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(panel_block("Help", theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, block);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let vertical = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    vertical[1]
}

fn draw_background(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default().style(Style::default().bg(theme.bg).fg(theme.text));
    frame.render_widget(block, area);
}

fn panel_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style())
        .style(theme.panel_style())
        .title(Line::from(Span::styled(
            format!(" {} ", title),
            theme.title_style(),
        )))
}

fn format_training_date(training: &Training) -> String {
    calendar::parse_training_date(training)
        .map(|date| date.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| training.date.clone())
}

#[derive(Clone, Copy)]
struct Theme {
    bg: Color,
    panel: Color,
    border: Color,
    text: Color,
    muted: Color,
    accent: Color,
    highlight: Color,
    success: Color,
    error: Color,
    accent_dark: Color,
}

impl Theme {
    fn panel_style(&self) -> Style {
        Style::default().bg(self.panel).fg(self.text)
    }

    fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn title_style(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    fn accent_contrast(&self) -> Color {
        if matches!(self.bg, Color::Rgb(242, 244, 248)) {
            self.accent_dark
        } else {
            Color::Black
        }
    }
}

fn theme_from(pref: ThemePreference) -> Theme {
    match pref {
        ThemePreference::Terminal => Theme {
            bg: Color::Reset,
            panel: Color::Reset,
            border: Color::DarkGray,
            text: Color::Reset,
            muted: Color::DarkGray,
            accent: Color::Blue,
            highlight: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            accent_dark: Color::Black,
        },
        ThemePreference::Dark => Theme {
            bg: Color::Rgb(12, 18, 36),
            panel: Color::Rgb(18, 28, 52),
            border: Color::Rgb(44, 72, 112),
            text: Color::Rgb(220, 230, 255),
            muted: Color::Rgb(150, 170, 200),
            accent: Color::Rgb(90, 180, 255),
            highlight: Color::Rgb(255, 210, 120),
            success: Color::Rgb(120, 220, 140),
            error: Color::Rgb(255, 120, 120),
            accent_dark: Color::Rgb(26, 60, 110),
        },
        ThemePreference::Light => Theme {
            bg: Color::Rgb(242, 244, 248),
            panel: Color::Rgb(255, 255, 255),
            border: Color::Rgb(210, 220, 235),
            text: Color::Rgb(26, 32, 44),
            muted: Color::Rgb(90, 110, 140),
            accent: Color::Rgb(70, 130, 235),
            highlight: Color::Rgb(255, 165, 80),
            success: Color::Rgb(36, 150, 90),
            error: Color::Rgb(220, 60, 80),
            accent_dark: Color::Rgb(18, 34, 64),
        },
    }
}
