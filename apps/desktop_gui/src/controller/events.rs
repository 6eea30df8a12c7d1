//! UI/backend events and error modeling for desktop GUI controller.

use client_core::FetchOutcome;
use shared::domain::{HealthStatus, SchemaMeta};

#[derive(Debug)]
pub enum UiEvent {
    Info(String),
    Fetched(FetchOutcome),
    HealthChecked(HealthStatus),
    SchemaLoaded(SchemaMeta),
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Server,
    Validation,
    Unknown,
}

/// Only startup and the diagnostics panel report errors; dashboard fetches
/// degrade to empty data instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    HealthCheck,
    SchemaMeta,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("malformed")
            || message_lower.contains("failed to decode")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("returned 5")
            || message_lower.contains("internal")
        {
            UiErrorCategory::Server
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("connect")
            || message_lower.contains("dns")
            || message_lower.contains("disconnect")
            || message_lower.contains("request to")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn summary(&self) -> String {
        let what = match self.context {
            UiErrorContext::BackendStartup => "Backend worker startup failure",
            UiErrorContext::HealthCheck => "Health check failed",
            UiErrorContext::SchemaMeta => "Schema metadata unavailable",
        };
        let hint = match self.category {
            UiErrorCategory::Transport => "API unreachable; check the base URL and network. ",
            UiErrorCategory::Server => "API reported an internal error. ",
            UiErrorCategory::Validation => "API response was not understood. ",
            UiErrorCategory::Unknown => "",
        };
        format!("{what}: {hint}{}", self.message)
    }
}
