use crate::types::{ConversationsPayload, SlackConversation};

pub const REQUEST: &str = "stemma/slack/GET_SLACK_CONVERSATIONS_REQUEST";
pub const SUCCESS: &str = "stemma/slack/GET_SLACK_CONVERSATIONS_SUCCESS";
pub const FAILURE: &str = "stemma/slack/GET_SLACK_CONVERSATIONS_FAILURE";

#[derive(Debug, Clone, PartialEq)]
pub struct ConversationsState {
    pub is_loading: bool,
    pub status_code: Option<u16>,
    pub conversations: Vec<SlackConversation>,
}

impl Default for ConversationsState {
    fn default() -> Self {
        Self {
            is_loading: true,
            status_code: None,
            conversations: Vec::new(),
        }
    }
}

impl ConversationsState {
    pub fn is_error(&self) -> bool {
        !self.is_loading && !self.status_code.is_some_and(|code| (200..300).contains(&code))
    }
}

/// Actions the conversations container reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversationsAction {
    Request { resource_key: String },
    Success(ConversationsPayload),
    Failure(ConversationsPayload),
    /// Any action this container does not handle.
    Other { kind: String },
}

impl ConversationsAction {
    pub fn request(resource_key: impl Into<String>) -> Self {
        Self::Request {
            resource_key: resource_key.into(),
        }
    }

    pub fn success(payload: ConversationsPayload) -> Self {
        Self::Success(payload)
    }

    pub fn failure(payload: ConversationsPayload) -> Self {
        Self::Failure(payload)
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Request { .. } => REQUEST,
            Self::Success(_) => SUCCESS,
            Self::Failure(_) => FAILURE,
            Self::Other { kind } => kind,
        }
    }
}

pub fn reduce(state: ConversationsState, action: &ConversationsAction) -> ConversationsState {
    match action {
        ConversationsAction::Request { .. } => ConversationsState {
            is_loading: true,
            status_code: None,
            ..state
        },
        ConversationsAction::Success(payload) | ConversationsAction::Failure(payload) => {
            ConversationsState {
                is_loading: false,
                status_code: payload.status_code,
                conversations: payload.conversations.clone(),
            }
        }
        ConversationsAction::Other { .. } => state,
    }
}
