pub mod api;
pub mod error;
pub mod flow;
pub mod state;
pub mod types;

pub use api::{ConversationSource, SlackConversationsApi};
pub use error::{ApiError, FailureCause, FetchFailure};
pub use flow::ConversationsStore;
pub use state::{reduce, ConversationsAction, ConversationsState};
pub use types::*;
