use std::time::Duration;

use client_core::{view::chart::layout_attempts_chart, FetchRequest};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::protocol::DEFAULT_API_BASE_URL;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{dispatch_backend_command, dispatch_fetches};
use crate::controller::reducer::{reduce, DashboardView};
use crate::ui::{
    chart::show_attempts_chart,
    panels::{self, DateDrafts},
    theme::{card, CARD_SPACING},
};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub api_base_url: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

pub struct DashboardGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    view: DashboardView,
    date_drafts: DateDrafts,
    api_base_url: String,
}

impl DashboardGuiApp {
    /// Builds the app and queues the initial fetches.
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        let mut app = Self {
            cmd_tx,
            ui_rx,
            view: DashboardView::new(),
            date_drafts: DateDrafts::default(),
            api_base_url: startup.api_base_url,
        };
        let requests = app.view.dashboard.mount();
        app.dispatch(requests);
        dispatch_backend_command(&app.cmd_tx, BackendCommand::CheckHealth, &mut app.view.status);
        app
    }

    fn dispatch(&mut self, requests: Vec<FetchRequest>) {
        if !requests.is_empty() {
            tracing::debug!(count = requests.len(), "dispatching dashboard fetches");
        }
        dispatch_fetches(&self.cmd_tx, requests, &mut self.view.status);
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            reduce(&mut self.view, event);
        }
    }

    fn check_api(&mut self) {
        for cmd in [BackendCommand::CheckHealth, BackendCommand::LoadSchemaMeta] {
            dispatch_backend_command(&self.cmd_tx, cmd, &mut self.view.status);
        }
    }

    fn show_dashboard(&mut self, ui: &mut egui::Ui) {
        ui.heading("Orbital Launch Tracker");
        ui.add_space(CARD_SPACING);

        let requests = card(ui, "Filters", |ui| {
            panels::show_filters(ui, &mut self.view.dashboard, &mut self.date_drafts)
        });
        self.dispatch(requests);
        ui.add_space(CARD_SPACING);

        card(ui, "Orbital launch attempts", |ui| {
            panels::show_metric(ui, self.view.dashboard.attempts());
        });
        ui.add_space(CARD_SPACING);

        card(ui, "Attempts by year", |ui| {
            let layout = layout_attempts_chart(self.view.dashboard.attempts_by_year());
            show_attempts_chart(ui, &layout);
        });
        ui.add_space(CARD_SPACING);

        let requests = card(ui, "Launches", |ui| {
            panels::show_launch_table(ui, &mut self.view.dashboard)
        });
        self.dispatch(requests);
    }
}

impl eframe::App for DashboardGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::bottom("api_status").show(ctx, |ui| {
            ui.add_space(4.0);
            if panels::show_status_bar(ui, &self.view, &self.api_base_url) {
                self.check_api();
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| self.show_dashboard(ui));
        });

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}

#[cfg(test)]
mod tests {
    use client_core::FetchOutcome;
    use crossbeam_channel::bounded;
    use shared::domain::YearlyCount;

    use super::*;

    #[test]
    fn bootstrap_queues_mount_fetches_and_health_check() {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (_ui_tx, ui_rx) = bounded(16);
        let _app = DashboardGuiApp::bootstrap(cmd_tx, ui_rx, StartupConfig::default());

        let names: Vec<&str> = cmd_rx.try_iter().map(|cmd| cmd.name()).collect();
        assert_eq!(
            names,
            vec![
                "fetch_filter_options",
                "fetch_orbital_attempts",
                "fetch_attempts_by_year",
                "fetch_launches",
                "check_health",
            ]
        );
    }

    #[test]
    fn drains_backend_events_into_view() {
        let (cmd_tx, cmd_rx) = bounded(16);
        let (ui_tx, ui_rx) = bounded(16);
        let mut app = DashboardGuiApp::bootstrap(cmd_tx, ui_rx, StartupConfig::default());
        let generation = cmd_rx
            .try_iter()
            .find_map(|cmd| match cmd {
                BackendCommand::Fetch(FetchRequest::AttemptsByYear { generation, .. }) => {
                    Some(generation)
                }
                _ => None,
            })
            .expect("stats fetch");

        let years = vec![YearlyCount {
            year: 1965,
            count: 114,
        }];
        ui_tx
            .send(UiEvent::Fetched(FetchOutcome::AttemptsByYear {
                generation,
                years: years.clone(),
            }))
            .expect("send");
        ui_tx
            .send(UiEvent::Info("Backend worker ready".to_string()))
            .expect("send");
        app.process_ui_events();

        assert_eq!(app.view.dashboard.attempts_by_year(), years.as_slice());
        assert_eq!(app.view.status, "Backend worker ready");
    }
}
