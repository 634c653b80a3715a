use crate::error::{ApiError, FetchFailure};
use crate::types::{ConversationsPayload, ConversationsResponse, ErrorBody};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const SLACK_MESSAGES_PATH: &str = "/api/stemma/slack/v1/messages";
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Anything that can produce the conversations linked to a resource key.
#[async_trait]
pub trait ConversationSource: Send + Sync + 'static {
    async fn get_conversations(
        &self,
        resource_key: &str,
    ) -> Result<ConversationsPayload, FetchFailure>;
}

#[derive(Clone)]
pub struct SlackConversationsApi {
    client: Client,
    messages_url: Url,
}

impl SlackConversationsApi {
    pub fn new(base_url: &Url) -> Result<Self, ApiError> {
        Self::with_timeouts(base_url, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT)
    }

    pub fn with_timeouts(
        base_url: &Url,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent("stemma-view/0.1")
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            messages_url: base_url.join(SLACK_MESSAGES_PATH)?,
        })
    }

    pub fn messages_url(&self) -> &Url {
        &self.messages_url
    }

    /// One GET per call. Non-2xx and transport errors are both returned as
    /// [`FetchFailure`]; only the former carries a status code.
    pub async fn get_conversations(
        &self,
        resource_key: &str,
    ) -> Result<ConversationsPayload, FetchFailure> {
        tracing::debug!(resource_key, "Fetching slack conversations");

        let response = self
            .client
            .get(self.messages_url.clone())
            .query(&[("key", resource_key)])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(resource_key, "No response for slack conversations: {e}");
                FetchFailure::no_response()
            })?;

        let status = response.status();
        if !status.is_success() {
            let status_message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(FetchFailure::status(status.as_u16(), status_message));
        }

        let body: ConversationsResponse = response.json().await.map_err(|e| {
            tracing::warn!(resource_key, %status, "Undecodable slack conversations body: {e}");
            FetchFailure::status(status.as_u16(), None)
        })?;

        Ok(ConversationsPayload {
            conversations: body.conversations,
            status_code: Some(status.as_u16()),
            status_message: Some(body.message),
        })
    }
}

#[async_trait]
impl ConversationSource for SlackConversationsApi {
    async fn get_conversations(
        &self,
        resource_key: &str,
    ) -> Result<ConversationsPayload, FetchFailure> {
        SlackConversationsApi::get_conversations(self, resource_key).await
    }
}
