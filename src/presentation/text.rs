//! Plain-text rendering of a whole dashboard view, for terminals and logs.

use crate::dashboard::{DashboardView, LoadStatus};
use crate::presentation::selector::day_buttons;
use crate::presentation::summary::summary_cards;
use crate::presentation::table::DataTable;
use chrono::FixedOffset;
use std::fmt::Write;

pub const TITLE: &str = "Weather Station Dashboard";

/// Title, day selector, summary cards and the readings table.
///
/// The selected day is wrapped in `[* ]`, the others in `[ ]`.
pub fn render_text(view: &DashboardView, offset: &FixedOffset) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_view(&mut out, view, offset);
    out
}

fn write_view(out: &mut String, view: &DashboardView, offset: &FixedOffset) -> std::fmt::Result {
    writeln!(out, "{TITLE}")?;
    writeln!(out, "{}", "=".repeat(TITLE.chars().count()))?;

    match &view.status {
        LoadStatus::Pending => writeln!(out, "Cargando datos...")?,
        LoadStatus::Failed(message) => writeln!(out, "Error al cargar los datos: {message}")?,
        LoadStatus::Loaded => {}
    }

    let buttons: Vec<String> = day_buttons(&view.days, &view.selection)
        .into_iter()
        .map(|button| {
            if button.selected {
                format!("[* {}]", button.label)
            } else {
                format!("[ {} ]", button.label)
            }
        })
        .collect();
    writeln!(out, "{}", buttons.join(" "))?;
    writeln!(out)?;

    for card in summary_cards(&view.averages) {
        writeln!(out, "{}: {}", card.title, card.value)?;
    }
    writeln!(out)?;

    let headers = DataTable::headers();
    let table = DataTable::from_readings(&view.readings, offset);
    let date_width = table
        .rows
        .iter()
        .map(|row| row.date.chars().count())
        .chain(std::iter::once(headers[0].chars().count()))
        .max()
        .unwrap_or_default();
    writeln!(
        out,
        "{:<date_width$} | {} | {} | {}",
        headers[0], headers[1], headers[2], headers[3]
    )?;
    for row in &table.rows {
        writeln!(
            out,
            "{:<date_width$} | {:>w1$} | {:>w2$} | {:>w3$}",
            row.date,
            row.temperature,
            row.humidity,
            row.pressure,
            w1 = headers[1].chars().count(),
            w2 = headers[2].chars().count(),
            w3 = headers[3].chars().count(),
        )?;
    }
    if table.is_empty() {
        writeln!(out, "(sin datos)")?;
    }
    Ok(())
}
