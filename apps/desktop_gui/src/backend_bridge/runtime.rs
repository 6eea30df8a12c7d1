//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{execute_fetch, DashboardApi, LaunchApiClient};
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Starts the backend worker thread.
///
/// Each command runs as its own task; nothing is cancelled or retried, and
/// results are sent back in completion order.
pub fn launch(api_base_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let client: Arc<dyn DashboardApi> = match LaunchApiClient::new(api_base_url) {
            Ok(client) => Arc::new(client),
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    err.to_string(),
                )));
                tracing::error!("failed to create launch api client: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));
            while let Ok(cmd) = cmd_rx.recv() {
                let client = Arc::clone(&client);
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let command = cmd.name();
                    let event = run_command(client.as_ref(), cmd).await;
                    forward_event(&ui_tx, command, event);
                });
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    });
}

/// Hands a command result to the UI; returns false when it was dropped.
fn forward_event(ui_tx: &Sender<UiEvent>, command: &'static str, event: UiEvent) -> bool {
    match ui_tx.try_send(event) {
        Ok(()) => true,
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command, "ui event queue is full; dropping command result");
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!(command, "ui event queue closed; dropping command result");
            false
        }
    }
}

async fn run_command(client: &dyn DashboardApi, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::Fetch(request) => UiEvent::Fetched(execute_fetch(client, request).await),
        BackendCommand::CheckHealth => match client.health().await {
            Ok(health) => UiEvent::HealthChecked(health),
            Err(err) => UiEvent::Error(UiError::from_message(
                UiErrorContext::HealthCheck,
                err.to_string(),
            )),
        },
        BackendCommand::LoadSchemaMeta => match client.schema_meta().await {
            Ok(schema) => UiEvent::SchemaLoaded(schema),
            Err(err) => UiEvent::Error(UiError::from_message(
                UiErrorContext::SchemaMeta,
                err.to_string(),
            )),
        },
    }
}
