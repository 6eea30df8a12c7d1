//! Plain-text rendering of the dashboard models.

use std::fmt::Write as _;

use client_core::{
    view::{
        chart::{layout_attempts_chart, ChartLayout, CHART_HEIGHT, CHART_PADDING},
        format_count,
        table::{launch_rows, TABLE_COLUMNS},
    },
    DashboardState,
};
use shared::domain::{FilterField, FilterOptions, SchemaMeta};

const TEXT_BAR_WIDTH: f32 = 40.0;

pub fn render_dashboard(state: &DashboardState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Orbital Launch Tracker");
    let _ = writeln!(
        out,
        "Orbital launch attempts: {}",
        format_count(state.attempts())
    );

    let active: Vec<String> = FilterField::ALL
        .iter()
        .filter(|field| !state.filters().get(**field).is_empty())
        .map(|field| format!("{}={}", field.query_key(), state.filters().get(*field)))
        .collect();
    if !active.is_empty() {
        let _ = writeln!(out, "Filters: {}", active.join(", "));
    }

    let _ = writeln!(out, "\nAttempts per year");
    out.push_str(&render_chart(&layout_attempts_chart(state.attempts_by_year())));

    let _ = writeln!(out, "\nRecent launches");
    out.push_str(&render_table(state));
    out
}

/// Draws each chart bar as a horizontal run of blocks proportional to its height.
pub fn render_chart(layout: &ChartLayout) -> String {
    let bars = match layout {
        ChartLayout::Placeholder(message) => return format!("{message}\n"),
        ChartLayout::Bars(bars) => bars,
    };
    let plot_height = CHART_HEIGHT - CHART_PADDING * 2.0;
    let count_width = bars
        .iter()
        .map(|bar| bar.count.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for bar in bars {
        let blocks = (bar.height / plot_height * TEXT_BAR_WIDTH).round() as usize;
        let _ = writeln!(
            out,
            "{:>4} {:>count_width$} {}",
            bar.year,
            bar.count,
            "█".repeat(blocks)
        );
    }
    out
}

fn render_table(state: &DashboardState) -> String {
    let rows = launch_rows(state.launches());
    let mut widths = TABLE_COLUMNS.map(|column| column.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &TABLE_COLUMNS, &widths);
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    let rule: Vec<&str> = rule.iter().map(String::as_str).collect();
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, &row.cells(), &widths);
    }

    let pagination = state.pagination();
    let _ = writeln!(
        out,
        "{}{}{}",
        if pagination.has_previous() { "< " } else { "" },
        pagination.range_label(),
        if pagination.has_next() { " >" } else { "" }
    );
    out
}

fn push_row(out: &mut String, cells: &[&str], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}

pub fn render_filter_options(options: &FilterOptions) -> String {
    let mut out = String::new();
    for field in FilterField::ALL.iter().filter(|field| !field.is_date()) {
        let values = options.values(*field);
        let _ = writeln!(out, "{} ({}):", field.label(), values.len());
        for value in values {
            let _ = writeln!(out, "  {value}");
        }
    }
    out
}

pub fn render_schema(schema: &SchemaMeta) -> String {
    format!(
        "Ingestion version: {}\nLast ingest: {}\nRows: {}\nDistinct launches: {}\n",
        schema.ingestion_version,
        schema.last_ingest_time.as_deref().unwrap_or("never"),
        format_count(schema.row_count),
        format_count(schema.distinct_launch_count),
    )
}

#[cfg(test)]
mod tests {
    use client_core::FetchOutcome;
    use shared::domain::{LaunchRecord, YearlyCount};

    use super::*;

    #[test]
    fn empty_chart_prints_placeholder() {
        assert_eq!(render_chart(&layout_attempts_chart(&[])), "No data yet.\n");
    }

    #[test]
    fn chart_bars_scale_to_the_largest_year() {
        let text = render_chart(&layout_attempts_chart(&[
            YearlyCount {
                year: 2019,
                count: 5,
            },
            YearlyCount {
                year: 2020,
                count: 10,
            },
        ]));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("2019  5 {}", "█".repeat(20)));
        assert_eq!(lines[1], format!("2020 10 {}", "█".repeat(40)));
    }

    #[test]
    fn dashboard_lists_metric_rows_and_pagination() {
        let mut state = DashboardState::new();
        state.set_filter(FilterField::Agency, "NASA");
        let requests = state.mount();
        let generation = requests
            .iter()
            .find_map(|request| match request {
                client_core::FetchRequest::LaunchPage { generation, .. } => Some(*generation),
                _ => None,
            })
            .expect("page request");
        state.apply(FetchOutcome::LaunchPage {
            generation,
            rows: vec![LaunchRecord {
                launch_tag: Some("1958-ALP".to_string()),
                launch_date_raw: Some("1958-02-01".to_string()),
                plname: Some("Explorer 1".to_string()),
                ..LaunchRecord::default()
            }],
        });

        let text = render_dashboard(&state);
        assert!(text.contains("Orbital launch attempts: 0"));
        assert!(text.contains("Filters: agency=NASA"));
        assert!(text.contains("No data yet."));
        assert!(text.contains("1958-02-01  1958-ALP"));
        assert!(text.contains("Explorer 1"));
        assert!(text.trim_end().ends_with("Showing 1 - 1"));
    }

    #[test]
    fn schema_summary_formats_counts() {
        let text = render_schema(&SchemaMeta {
            ingestion_version: "v1".to_string(),
            last_ingest_time: None,
            row_count: 7012,
            distinct_launch_count: 6741,
        });
        assert!(text.contains("Last ingest: never"));
        assert!(text.contains("Distinct launches: 6,741"));
    }

    #[test]
    fn filter_options_skip_date_fields() {
        let text = render_filter_options(&FilterOptions {
            agencies: vec!["NASA".to_string()],
            ..FilterOptions::default()
        });
        assert!(text.starts_with("Agency (1):\n  NASA\n"));
        assert!(!text.contains("Since"));
    }
}
