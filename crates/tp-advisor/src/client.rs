//! HTTP client for the advisor service

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tp_core::config::AdvisorConfig;
use tp_models::{Developer, Task};
use url::Url;

use crate::error::AdvisorError;
use crate::types::{RecommendRequest, Recommendation, Report, ReportRequest};
use crate::Advisor;

/// Advisor reached over HTTP
#[derive(Debug, Clone)]
pub struct AdvisorClient {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
}

impl AdvisorClient {
    pub fn new(config: &AdvisorConfig) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url(&config.base_url)?,
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, AdvisorError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.base_url.join(path)?;
        let mut request = self
            .client
            .post(url.clone())
            .header("Accept", "application/json")
            .json(body);
        if let Some(ref key) = self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "Advisor request failed");
            AdvisorError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "Advisor returned an error");
            return Err(AdvisorError::ServiceUnavailable {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| AdvisorError::Decode(format!("{}, body: {}", e, body)))
    }
}

/// Parse the base url so that relative joins append to its path
fn base_url(raw: &str) -> Result<Url, AdvisorError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait]
impl Advisor for AdvisorClient {
    async fn recommend_for(
        &self,
        developers: &[Developer],
        tasks: &[Task],
        current_task: &Task,
    ) -> Result<Recommendation, AdvisorError> {
        let request = RecommendRequest {
            developers,
            tasks,
            current_task,
        };
        self.post("recommend", &request).await
    }

    async fn report(&self, developers: &[Developer], tasks: &[Task]) -> Result<Report, AdvisorError> {
        self.post("report", &ReportRequest { developers, tasks }).await
    }
}
