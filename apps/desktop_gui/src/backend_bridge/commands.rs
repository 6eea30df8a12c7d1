//! Backend commands queued from UI to backend worker.

use client_core::FetchRequest;

#[derive(Debug)]
pub enum BackendCommand {
    Fetch(FetchRequest),
    CheckHealth,
    LoadSchemaMeta,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Fetch(FetchRequest::FilterOptions) => "fetch_filter_options",
            BackendCommand::Fetch(FetchRequest::AttemptsCount { .. }) => "fetch_orbital_attempts",
            BackendCommand::Fetch(FetchRequest::AttemptsByYear { .. }) => {
                "fetch_attempts_by_year"
            }
            BackendCommand::Fetch(FetchRequest::LaunchPage { .. }) => "fetch_launches",
            BackendCommand::CheckHealth => "check_health",
            BackendCommand::LoadSchemaMeta => "load_schema_meta",
        }
    }
}
