//! `show` command: print the grid for one date without the TUI

use anyhow::{Context, Result};
use classgrid_core::{ClassgridPreferences, GridLayout, PositionedSession, Schedule, ViewState};
use comfy_table::{Cell, Color, ContentArrangement, Table};

pub fn run_show(
    schedule: &Schedule,
    state: &ViewState,
    preferences: &ClassgridPreferences,
    json: bool,
    no_color: bool,
) -> Result<()> {
    let layout = GridLayout::compute(
        schedule,
        state,
        preferences.alternation_layout,
        &preferences.locale,
    );

    if json {
        println!("{}", layout_json(&layout)?);
        return Ok(());
    }

    println!(
        "{} (week {}, {})",
        layout.header,
        layout.week_parity,
        layout.mode.title()
    );

    if layout.drawable_sessions().next().is_none() {
        println!("No sessions");
        return Ok(());
    }

    println!("{}", sessions_table(&layout, no_color));
    Ok(())
}

pub fn layout_json(layout: &GridLayout<'_>) -> Result<String> {
    serde_json::to_string_pretty(layout).context("Failed to serialize grid layout")
}

/// Drawn sessions sorted by day then start time
pub fn sessions_table(layout: &GridLayout<'_>, no_color: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers = [
        "Day", "Time", "Session", "Kind", "Room", "Week", "Cols", "Rows",
    ];
    if no_color {
        table.set_header(headers.to_vec());
    } else {
        table.set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );
    }

    let mut sessions: Vec<&PositionedSession<'_>> = layout.drawable_sessions().collect();
    sessions.sort_by_key(|p| (p.session.day.index(), p.session.start_minutes()));

    for positioned in sessions {
        let session = positioned.session;
        let coordinate = positioned.coordinate;
        table.add_row(vec![
            session.day.short_name().to_string(),
            session.time_range(),
            session.name.clone(),
            session.kind.clone().unwrap_or_else(|| "-".to_string()),
            session.room.clone().unwrap_or_else(|| "-".to_string()),
            session
                .week
                .map(|w| w.to_string())
                .unwrap_or_else(|| "A/B".to_string()),
            format!("{}-{}", coordinate.col_start, coordinate.col_end),
            format!("{}-{}", coordinate.row_start, coordinate.row_end),
        ]);
    }

    table
}
