//! Command orchestration helpers from UI actions to backend command queue.

use client_core::FetchRequest;
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the dashboard"
                    .to_string();
        }
    }
}

/// Queues every fetch produced by a dashboard reducer.
pub fn dispatch_fetches(
    cmd_tx: &Sender<BackendCommand>,
    requests: Vec<FetchRequest>,
    status: &mut String,
) {
    for request in requests {
        dispatch_backend_command(cmd_tx, BackendCommand::Fetch(request), status);
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;

    #[test]
    fn queues_each_fetch_in_order() {
        let (cmd_tx, cmd_rx) = bounded(8);
        let mut status = String::new();
        let mut state = client_core::DashboardState::new();

        dispatch_fetches(&cmd_tx, state.mount(), &mut status);

        let names: Vec<&str> = cmd_rx.try_iter().map(|cmd| cmd.name()).collect();
        assert_eq!(
            names,
            vec![
                "fetch_filter_options",
                "fetch_orbital_attempts",
                "fetch_attempts_by_year",
                "fetch_launches",
            ]
        );
        assert!(status.is_empty());
    }

    #[test]
    fn reports_full_and_disconnected_queues() {
        let (cmd_tx, cmd_rx) = bounded(1);
        let mut status = String::new();
        dispatch_backend_command(&cmd_tx, BackendCommand::CheckHealth, &mut status);
        dispatch_backend_command(&cmd_tx, BackendCommand::CheckHealth, &mut status);
        assert_eq!(status, "UI command queue is full; please retry");

        drop(cmd_rx);
        dispatch_backend_command(&cmd_tx, BackendCommand::LoadSchemaMeta, &mut status);
        assert!(status.starts_with("Backend command processor disconnected"));
    }
}
