use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackUser {
    pub display_name: String,
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub real_name: String,
    pub image_72: String,
    pub image_original: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl SlackUser {
    pub fn label(&self) -> &str {
        if !self.display_name.is_empty() {
            &self.display_name
        } else if !self.real_name.is_empty() {
            &self.real_name
        } else {
            &self.id
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackMessage {
    pub author: String,
    pub channel_id: String,
    pub channel: String,
    pub key: String,
    pub team: String,
    pub text: String,
    /// Timestamp of the parent message.
    pub thread_ts: String,
    /// Same as `thread_ts` for linked threads, only parents are captured.
    pub ts: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A Slack thread linked to a catalog resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlackConversation {
    pub message: SlackMessage,
    pub author: SlackUser,
    pub permalink: String,
    /// Counts the root message too.
    pub replies: u32,
}

impl SlackConversation {
    /// Replies shown to a person, excluding the tagged root message.
    pub fn display_replies(&self) -> u32 {
        self.replies.saturating_sub(1)
    }

    pub fn element_key(&self) -> String {
        format!("key:{}", self.message.key)
    }

    pub fn message_time(&self) -> Option<DateTime<Utc>> {
        parse_slack_ts(&self.message.thread_ts)
    }
}

/// Parses a Slack `seconds.micros` timestamp.
pub fn parse_slack_ts(ts: &str) -> Option<DateTime<Utc>> {
    let (secs, frac) = match ts.split_once('.') {
        Some((secs, frac)) => (secs, frac),
        None => (ts, ""),
    };
    let secs = secs.parse::<i64>().ok()?;
    let micros = if frac.is_empty() {
        0
    } else {
        let digits: String = frac.chars().take(6).collect();
        let padded = format!("{digits:0<6}");
        padded.parse::<u32>().ok()?
    };
    DateTime::from_timestamp(secs, micros * 1_000)
}

/// Body of `GET /api/stemma/slack/v1/messages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationsResponse {
    pub message: String,
    #[serde(default)]
    pub conversations: Vec<SlackConversation>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

/// Normalized outcome carried by success and failure actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationsPayload {
    pub conversations: Vec<SlackConversation>,
    pub status_code: Option<u16>,
    pub status_message: Option<String>,
}
