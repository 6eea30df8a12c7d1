//! Dashboard sections: filter controls, the attempts metric, the launch table
//! with its pager, and the API status strip.

use chrono::NaiveDate;
use client_core::{
    view::{
        format_count,
        table::{launch_rows, TABLE_COLUMNS},
    },
    DashboardState, FetchRequest,
};
use eframe::egui::{self, RichText};
use shared::domain::FilterField;

use crate::controller::reducer::DashboardView;
use crate::ui::theme::{api_environment_label, ERROR_TEXT, METRIC_SIZE, OK_TEXT};

/// In-progress text of the two date inputs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DateDrafts {
    pub since: String,
    pub until: String,
}

impl DateDrafts {
    fn slot_mut(&mut self, field: FilterField) -> &mut String {
        match field {
            FilterField::Until => &mut self.until,
            _ => &mut self.since,
        }
    }
}

/// Returns the filter value a date draft should commit, if any.
///
/// Blank clears the filter; anything that is not a full, zero-padded
/// `YYYY-MM-DD` date stays a draft.
pub fn committed_date(draft: &str) -> Option<String> {
    let draft = draft.trim();
    if draft.is_empty() {
        return Some(String::new());
    }
    NaiveDate::parse_from_str(draft, "%Y-%m-%d")
        .ok()
        .filter(|date| date.format("%Y-%m-%d").to_string() == draft)
        .map(|_| draft.to_string())
}

pub fn show_filters(
    ui: &mut egui::Ui,
    state: &mut DashboardState,
    drafts: &mut DateDrafts,
) -> Vec<FetchRequest> {
    let mut requests = Vec::new();

    ui.horizontal_wrapped(|ui| {
        for field in FilterField::ALL {
            ui.vertical(|ui| {
                ui.label(field.label());
                if field.is_date() {
                    let draft = drafts.slot_mut(field);
                    let response = ui.add(
                        egui::TextEdit::singleline(draft)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(110.0),
                    );
                    if response.changed() {
                        if let Some(value) = committed_date(draft) {
                            requests.extend(state.set_filter(field, value));
                        }
                    }
                } else {
                    requests.extend(filter_combo(ui, state, field));
                }
            });
        }

        ui.vertical(|ui| {
            ui.label("");
            if ui.button("Reset filters").clicked() {
                *drafts = DateDrafts::default();
                requests.extend(state.reset_filters());
            }
        });
    });

    requests
}

fn filter_combo(
    ui: &mut egui::Ui,
    state: &mut DashboardState,
    field: FilterField,
) -> Vec<FetchRequest> {
    let mut selected = state.filters().get(field).to_string();
    let selected_text = if selected.is_empty() {
        "All".to_string()
    } else {
        selected.clone()
    };

    egui::ComboBox::from_id_salt(field.query_key())
        .selected_text(selected_text)
        .width(150.0)
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut selected, String::new(), "All");
            for value in state.filter_options().values(field) {
                ui.selectable_value(&mut selected, value.clone(), value.as_str());
            }
        });

    state.set_filter(field, selected)
}

pub fn show_metric(ui: &mut egui::Ui, attempts: u64) {
    ui.label(RichText::new(format_count(attempts)).size(METRIC_SIZE).strong());
    ui.label("orbital launch attempts match the current filters");
}

/// Launch table plus Previous/Next controls.
pub fn show_launch_table(ui: &mut egui::Ui, state: &mut DashboardState) -> Vec<FetchRequest> {
    let rows = launch_rows(state.launches());

    egui::ScrollArea::horizontal()
        .id_salt("launch_table_scroll")
        .show(ui, |ui| {
            egui::Grid::new("launch_table")
                .num_columns(TABLE_COLUMNS.len())
                .striped(true)
                .spacing([18.0, 6.0])
                .show(ui, |ui| {
                    for column in TABLE_COLUMNS {
                        ui.strong(column);
                    }
                    ui.end_row();

                    for row in &rows {
                        for cell in row.cells() {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });

    if rows.is_empty() {
        ui.weak("No launches on this page.");
    }

    let pagination = state.pagination();
    let mut requests = Vec::new();
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(pagination.has_previous(), egui::Button::new("Previous"))
            .clicked()
        {
            requests.extend(state.previous_page());
        }
        if ui
            .add_enabled(pagination.has_next(), egui::Button::new("Next"))
            .clicked()
        {
            requests.extend(state.next_page());
        }
        if pagination.row_count > 0 {
            ui.label(pagination.range_label());
        }
    });
    requests
}

/// Bottom strip with the API target and diagnostics; returns true when
/// "Check API" was clicked.
pub fn show_status_bar(ui: &mut egui::Ui, view: &DashboardView, api_base_url: &str) -> bool {
    let mut check_requested = false;
    ui.horizontal_wrapped(|ui| {
        ui.label(format!(
            "API: {api_base_url} ({})",
            api_environment_label(api_base_url)
        ));
        ui.separator();
        match view.api_healthy {
            Some(true) => {
                ui.colored_label(OK_TEXT, "healthy");
            }
            Some(false) => {
                ui.colored_label(ERROR_TEXT, "unreachable");
            }
            None => {
                ui.weak("not checked");
            }
        }
        if let Some(schema) = &view.schema {
            ui.separator();
            ui.label(format!(
                "{} rows, {} launches, ingest {}",
                format_count(schema.row_count),
                format_count(schema.distinct_launch_count),
                schema.last_ingest_time.as_deref().unwrap_or("never")
            ));
        }
        ui.separator();
        if ui.button("Check API").clicked() {
            check_requested = true;
        }
    });

    if !view.status.is_empty() {
        let color = if view.last_error.is_some() {
            ERROR_TEXT
        } else {
            ui.visuals().weak_text_color()
        };
        ui.colored_label(color, view.status.as_str());
    }
    check_requested
}
