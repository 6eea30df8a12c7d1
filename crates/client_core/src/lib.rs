use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::{
    domain::{AttemptsCount, FilterOptions, HealthStatus, LaunchRecord, SchemaMeta, YearlyCount},
    error::ApiException,
    protocol::{Endpoint, QueryParams},
};
use thiserror::Error;
use tracing::{debug, warn};

pub mod config;
pub mod dashboard;
pub mod view;

pub use dashboard::{DashboardState, FetchOutcome, FetchRequest, Filters};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid api base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },
    #[error(transparent)]
    Api(#[from] ApiException),
    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only view of the launch API consumed by the dashboard.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn filter_options(&self) -> Result<FilterOptions, ClientError>;
    async fn orbital_attempts(&self, params: &QueryParams) -> Result<u64, ClientError>;
    async fn attempts_by_year(&self, params: &QueryParams)
        -> Result<Vec<YearlyCount>, ClientError>;
    async fn launches(&self, params: &QueryParams) -> Result<Vec<LaunchRecord>, ClientError>;
    async fn health(&self) -> Result<HealthStatus, ClientError>;
    async fn schema_meta(&self) -> Result<SchemaMeta, ClientError>;
}

#[derive(Debug, Clone)]
pub struct LaunchApiClient {
    http: Client,
    base_url: String,
}

impl LaunchApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_http_client(Client::new(), base_url)
    }

    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        url::Url::parse(&base_url).map_err(|source| ClientError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &QueryParams,
    ) -> Result<T, ClientError> {
        let url = endpoint.url(&self.base_url, params);
        debug!(%endpoint, %url, "issuing api request");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Transport { endpoint, source })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ClientError::Transport { endpoint, source })?;
        if !status.is_success() {
            return Err(ApiException::from_body(status.as_u16(), endpoint.path(), &body).into());
        }
        serde_json::from_str(&body).map_err(|source| ClientError::Decode { endpoint, source })
    }
}

#[async_trait]
impl DashboardApi for LaunchApiClient {
    async fn filter_options(&self) -> Result<FilterOptions, ClientError> {
        self.get_json(Endpoint::FilterOptions, &QueryParams::new())
            .await
    }

    async fn orbital_attempts(&self, params: &QueryParams) -> Result<u64, ClientError> {
        let body: AttemptsCount = self.get_json(Endpoint::OrbitalAttempts, params).await?;
        Ok(body.count)
    }

    async fn attempts_by_year(
        &self,
        params: &QueryParams,
    ) -> Result<Vec<YearlyCount>, ClientError> {
        self.get_json(Endpoint::AttemptsByYear, params).await
    }

    async fn launches(&self, params: &QueryParams) -> Result<Vec<LaunchRecord>, ClientError> {
        self.get_json(Endpoint::Launches, params).await
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.get_json(Endpoint::Health, &QueryParams::new()).await
    }

    async fn schema_meta(&self) -> Result<SchemaMeta, ClientError> {
        self.get_json(Endpoint::SchemaMeta, &QueryParams::new())
            .await
    }
}

fn or_fallback<T>(
    endpoint: Endpoint,
    generation: Option<u64>,
    result: Result<T, ClientError>,
    fallback: impl FnOnce() -> T,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            warn!(%endpoint, ?generation, "fetch failed; showing empty data: {err}");
            fallback()
        }
    }
}

/// Runs one dashboard fetch, mapping any failure to the endpoint's empty value.
pub async fn execute_fetch(api: &dyn DashboardApi, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::FilterOptions => {
            let result = api.filter_options().await;
            FetchOutcome::FilterOptions(or_fallback(
                Endpoint::FilterOptions,
                None,
                result,
                FilterOptions::default,
            ))
        }
        FetchRequest::AttemptsCount { generation, params } => {
            let result = api.orbital_attempts(&params).await;
            FetchOutcome::AttemptsCount {
                generation,
                count: or_fallback(Endpoint::OrbitalAttempts, Some(generation), result, || 0),
            }
        }
        FetchRequest::AttemptsByYear { generation, params } => {
            let result = api.attempts_by_year(&params).await;
            FetchOutcome::AttemptsByYear {
                generation,
                years: or_fallback(
                    Endpoint::AttemptsByYear,
                    Some(generation),
                    result,
                    Vec::new,
                ),
            }
        }
        FetchRequest::LaunchPage { generation, params } => {
            let result = api.launches(&params).await;
            FetchOutcome::LaunchPage {
                generation,
                rows: or_fallback(Endpoint::Launches, Some(generation), result, Vec::new),
            }
        }
    }
}

/// Runs every request concurrently and applies the outcomes to `state`.
///
/// Outcomes are applied in request order once all of them complete.
pub async fn fetch_all(
    api: &dyn DashboardApi,
    state: &mut DashboardState,
    requests: Vec<FetchRequest>,
) {
    let outcomes = join_all(
        requests
            .into_iter()
            .map(|request| execute_fetch(api, request)),
    )
    .await;
    for outcome in outcomes {
        state.apply(outcome);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
