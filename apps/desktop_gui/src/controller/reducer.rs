//! Applies backend events to the dashboard view state.

use client_core::DashboardState;
use shared::domain::SchemaMeta;

use crate::controller::events::{UiError, UiErrorContext, UiEvent};

#[derive(Debug, Default)]
pub struct DashboardView {
    pub dashboard: DashboardState,
    pub status: String,
    pub api_healthy: Option<bool>,
    pub schema: Option<SchemaMeta>,
    pub last_error: Option<UiError>,
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            status: "Loading launch data".to_string(),
            ..Self::default()
        }
    }
}

pub fn reduce(view: &mut DashboardView, event: UiEvent) {
    match event {
        UiEvent::Info(message) => {
            view.status = message;
        }
        UiEvent::Fetched(outcome) => {
            view.dashboard.apply(outcome);
        }
        UiEvent::HealthChecked(health) => {
            view.api_healthy = Some(health.ok);
            view.last_error = None;
        }
        UiEvent::SchemaLoaded(schema) => {
            view.schema = Some(schema);
        }
        UiEvent::Error(err) => {
            tracing::warn!(context = ?err.context(), category = ?err.category(), "{}", err.message());
            view.status = err.summary();
            if err.context() == UiErrorContext::HealthCheck {
                view.api_healthy = Some(false);
            }
            view.last_error = Some(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use client_core::{FetchOutcome, FetchRequest};
    use shared::domain::{FilterField, HealthStatus, YearlyCount};

    use super::*;

    fn stats_generation(requests: &[FetchRequest]) -> u64 {
        requests
            .iter()
            .find_map(|request| match request {
                FetchRequest::AttemptsByYear { generation, .. } => Some(*generation),
                _ => None,
            })
            .expect("stats request")
    }

    #[test]
    fn fetched_outcomes_update_dashboard_unless_stale() {
        let mut view = DashboardView::new();
        let stale = stats_generation(&view.dashboard.mount());
        let fresh = stats_generation(&view.dashboard.set_filter(FilterField::State, "CN"));

        let years = vec![YearlyCount {
            year: 2020,
            count: 39,
        }];
        reduce(
            &mut view,
            UiEvent::Fetched(FetchOutcome::AttemptsByYear {
                generation: fresh,
                years: years.clone(),
            }),
        );
        reduce(
            &mut view,
            UiEvent::Fetched(FetchOutcome::AttemptsByYear {
                generation: stale,
                years: Vec::new(),
            }),
        );
        assert_eq!(view.dashboard.attempts_by_year(), years.as_slice());
    }

    #[test]
    fn health_failures_mark_api_unhealthy() {
        let mut view = DashboardView::new();
        reduce(
            &mut view,
            UiEvent::Error(UiError::from_message(
                UiErrorContext::HealthCheck,
                "request to /api/health failed: connection refused",
            )),
        );
        assert_eq!(view.api_healthy, Some(false));
        assert!(view.status.starts_with("Health check failed"));

        reduce(&mut view, UiEvent::HealthChecked(HealthStatus { ok: true }));
        assert_eq!(view.api_healthy, Some(true));
        assert!(view.last_error.is_none());
    }
}
