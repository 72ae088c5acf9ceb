use chrono::Datelike;
use kubelek_core::builtin::MONTH_NAMES;
use kubelek_core::calendar::{CalendarEntry, iso_date};
use kubelek_core::model::{Family, Fraction};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use crate::app::App;

pub(crate) fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let next = app.next_collection();
    let next_entry = next.entry();

    // Outer layout: title, next-collection panel, table, status line. The
    // panel collapses to zero height when there is nothing upcoming, both
    // outside the schedule year and once the schedule is exhausted.
    let panel_height = if next_entry.is_some() { 3 } else { 0 };
    let layout_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(panel_height),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let chunks = layout_chunks.as_ref();
    let [header_area, panel_area, table_area, status_area] = chunks else {
        return;
    };

    // Title / header
    let header = Paragraph::new("kubelek – waste collection duty rota")
        .block(Block::default().borders(Borders::ALL).title("Kubelek"));
    frame.render_widget(header, *header_area);

    // Next collection panel
    if let Some(entry) = next_entry {
        let text = format!("{} · duty family {}", iso_date(entry.date), entry.duty);
        let panel = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Next collection"),
            )
            .style(Style::default().fg(Color::Green));
        frame.render_widget(panel, *panel_area);
    }

    draw_schedule_table(frame, app, *table_area, next_entry);

    // Status bar
    let filter_label = app
        .selected_family()
        .map_or_else(|| "all families".to_owned(), |family| format!("family {family}"));
    let status_text = format!(
        "Showing {filter_label} · ←/→/Tab cycle duty filter · a show all · q/Ctrl-C quit"
    );
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, *status_area);
}

fn draw_schedule_table(
    frame: &mut Frame<'_>,
    app: &App,
    area: Rect,
    next_entry: Option<&CalendarEntry>,
) {
    let entries = app.calendar.entries();
    let selected = app.selected_family();
    let next_date = next_entry.map(|entry| entry.date);

    // Header: month name on the first day of each month, day number below.
    let mut header_cells = vec![Cell::from("")];
    for (entry, month_label) in entries.iter().zip(month_labels(&app.calendar.months())) {
        let text = Text::from(vec![
            Line::from(month_label),
            Line::from(entry.date.day().to_string()),
        ]);
        let mut cell = Cell::from(text);
        if Some(entry.date) == next_date {
            cell = cell.style(Style::default().fg(Color::Yellow));
        }
        header_cells.push(cell);
    }
    let table_header = Row::new(header_cells)
        .height(2)
        .style(Style::default().add_modifier(Modifier::BOLD));

    // Duty row, then one row per fraction.
    let mut duty_cells = vec![Cell::from("DYŻUR")];
    for entry in entries {
        let mut style = Style::default();
        if is_dimmed(selected, entry) {
            style = style.add_modifier(Modifier::DIM);
        }
        if Some(entry.date) == next_date {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        duty_cells.push(Cell::from(entry.duty.to_string()).style(style));
    }
    let mut rows = vec![Row::new(duty_cells)];

    for fraction in Fraction::ALL {
        let row_style = Style::default().fg(fraction_color(fraction));
        let mut cells = vec![Cell::from(fraction_label(fraction)).style(row_style)];
        for entry in entries {
            let mark = if entry.fractions.contains(fraction) {
                "●"
            } else {
                ""
            };
            let mut style = row_style;
            if is_dimmed(selected, entry) {
                style = style.add_modifier(Modifier::DIM);
            }
            cells.push(Cell::from(mark).style(style));
        }
        rows.push(Row::new(cells));
    }

    let mut column_widths = vec![Constraint::Length(18)];
    column_widths.extend(entries.iter().map(|_| Constraint::Length(6)));

    let title = match selected {
        Some(family) => format!(
            "Schedule {} (duty filter: {family})",
            app.calendar.year()
        ),
        None => format!("Schedule {}", app.calendar.year()),
    };

    let table = Table::new(rows, column_widths)
        .header(table_header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn is_dimmed(selected: Option<&Family>, entry: &CalendarEntry) -> bool {
    selected.is_some_and(|family| entry.duty != *family)
}

/// One label per table column from the calendar's month grouping: the month
/// name on the first column of each month, blank on the rest.
fn month_labels(months: &[(u32, usize)]) -> Vec<String> {
    let mut labels = Vec::new();
    for &(month, count) in months {
        labels.push(month_abbrev(month));
        labels.extend((1..count).map(|_| String::new()));
    }
    labels
}

fn month_abbrev(month: u32) -> String {
    MONTH_NAMES
        .get(month as usize)
        .map(|name| name.chars().take(3).collect())
        .unwrap_or_default()
}

fn fraction_label(fraction: Fraction) -> &'static str {
    match fraction {
        Fraction::Mixed => "ODPADY ZMIESZANE",
        Fraction::Paper => "PAPIER",
        Fraction::Glass => "SZKŁO",
        Fraction::Metal => "METALE I TWORZYWA",
        Fraction::Bio => "BIOODPADY",
    }
}

fn fraction_color(fraction: Fraction) -> Color {
    match fraction {
        Fraction::Mixed => Color::Gray,
        Fraction::Paper => Color::Blue,
        Fraction::Glass => Color::Cyan,
        Fraction::Metal => Color::Yellow,
        Fraction::Bio => Color::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_labels_mark_only_the_first_column_of_each_month() {
        let labels = month_labels(&[(1, 3), (2, 2), (3, 2)]);
        assert_eq!(labels, ["Sty", "", "", "Lut", "", "Mar", ""]);
    }

    #[test]
    fn month_abbrev_handles_multibyte_month_names() {
        assert_eq!(month_abbrev(10), "Paź");
        assert_eq!(month_abbrev(3), "Mar");
        assert_eq!(month_abbrev(13), "", "out-of-range months get no label");
    }
}
