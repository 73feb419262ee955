use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::AppError;
use crate::model::{RoundKey, ScoreEdit, ScoreTable};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Body of a full table fetch.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoresResponse {
    pub scores: ScoreTable,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedScore {
    pub round: RoundKey,
    pub hole_index: usize,
    pub score: Option<i32>,
}

/// Body of a single-score update. A rejected update carries `error` instead.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub updated_score: Option<UpdatedScore>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// The remote scores source.
#[async_trait]
pub trait ScoresApi: Send + Sync {
    async fn fetch_scores(&self) -> Result<ScoresResponse, AppError>;

    /// `Ok` only when the remote accepted the change.
    async fn update_score(&self, edit: &ScoreEdit) -> Result<UpdateResponse, AppError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

#[derive(Clone, Debug)]
pub struct HttpScoresApi {
    client: Client,
    url: String,
}

impl HttpScoresApi {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ScoresApi for HttpScoresApi {
    async fn fetch_scores(&self) -> Result<ScoresResponse, AppError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let body = resp.text().await?;
        let parsed: ScoresResponse = serde_json::from_str(&body)?;
        debug!(url = %self.url, pairings = parsed.scores.iter().count(), "fetched score table");
        Ok(parsed)
    }

    async fn update_score(&self, edit: &ScoreEdit) -> Result<UpdateResponse, AppError> {
        let resp = self.client.put(&self.url).json(edit).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        let parsed = match serde_json::from_str::<UpdateResponse>(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                return Err(AppError::Rejected(format!(
                    "remote answered {status} with an unreadable body: {e}"
                )));
            }
        };

        if !status.is_success() || !parsed.success {
            let reason = parsed
                .error
                .or(parsed.message)
                .unwrap_or_else(|| format!("remote answered {status}"));
            return Err(AppError::Rejected(reason));
        }
        Ok(parsed)
    }

    fn name(&self) -> &str {
        &self.url
    }
}
