use crate::api::ConversationSource;
use crate::state::{reduce, ConversationsAction, ConversationsState};
use crate::types::ConversationsPayload;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Runs one fetch and turns its outcome into exactly one action.
pub async fn fetch_conversations_worker<S>(source: &S, resource_key: &str) -> ConversationsAction
where
    S: ConversationSource + ?Sized,
{
    match source.get_conversations(resource_key).await {
        Ok(payload) => {
            info!(
                resource_key,
                status = ?payload.status_code,
                count = payload.conversations.len(),
                "Slack conversations loaded"
            );
            ConversationsAction::success(payload)
        }
        Err(failure) => {
            warn!(resource_key, cause = ?failure.cause(), "Slack conversations failed: {failure}");
            ConversationsAction::failure(ConversationsPayload {
                conversations: Vec::new(),
                status_code: failure.status_code,
                status_message: failure.status_message,
            })
        }
    }
}

/// Spawns a worker for every request action until `requests` closes.
/// Workers are never de-duplicated or cancelled.
pub async fn watch_conversation_requests(
    source: Arc<dyn ConversationSource>,
    mut requests: mpsc::UnboundedReceiver<ConversationsAction>,
    outcomes: mpsc::UnboundedSender<ConversationsAction>,
) {
    while let Some(action) = requests.recv().await {
        let ConversationsAction::Request { resource_key } = action else {
            continue;
        };
        debug!(resource_key = %resource_key, "Spawning slack conversations worker");

        let source = source.clone();
        let outcomes = outcomes.clone();
        tokio::spawn(async move {
            let outcome = fetch_conversations_worker(source.as_ref(), &resource_key).await;
            if outcomes.send(outcome).is_err() {
                debug!(resource_key = %resource_key, "Conversations store gone, outcome discarded");
            }
        });
    }
    debug!("Slack conversations watcher stopped");
}

/// Single consumer of conversation actions. Owns the state and applies
/// transitions in the order outcomes arrive.
pub struct ConversationsStore {
    state: ConversationsState,
    request_tx: mpsc::UnboundedSender<ConversationsAction>,
    outcome_rx: mpsc::UnboundedReceiver<ConversationsAction>,
}

impl ConversationsStore {
    /// Must be called from within a tokio runtime.
    pub fn start(source: Arc<dyn ConversationSource>) -> Self {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        tokio::spawn(watch_conversation_requests(source, request_rx, outcome_tx));

        Self {
            state: ConversationsState::default(),
            request_tx,
            outcome_rx,
        }
    }

    pub fn state(&self) -> &ConversationsState {
        &self.state
    }

    pub fn dispatch(&mut self, action: ConversationsAction) {
        self.apply(&action);
        if matches!(action, ConversationsAction::Request { .. })
            && self.request_tx.send(action).is_err()
        {
            warn!("Slack conversations watcher is not running");
        }
    }

    /// Applies every outcome that is already available. Returns how many.
    pub fn process_outcomes(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.outcome_rx.try_recv() {
            self.apply(&action);
            applied += 1;
        }
        applied
    }

    pub async fn next_outcome(&mut self) -> Option<&ConversationsState> {
        let action = self.outcome_rx.recv().await?;
        self.apply(&action);
        Some(&self.state)
    }

    fn apply(&mut self, action: &ConversationsAction) {
        debug!(action = action.kind(), "Applying conversations action");
        self.state = reduce(std::mem::take(&mut self.state), action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchFailure;
    use crate::types::fixtures::conversation;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Notify;
    use tokio::time::timeout;

    struct ScriptedSource {
        calls: Mutex<Vec<String>>,
        outcome: Result<ConversationsPayload, FetchFailure>,
        gates: HashMap<String, Arc<Notify>>,
        tag_with_key: bool,
    }

    impl ScriptedSource {
        fn new(outcome: Result<ConversationsPayload, FetchFailure>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                outcome,
                gates: HashMap::new(),
                tag_with_key: false,
            }
        }

        /// Successful fetches return a single conversation keyed by the request.
        fn tagged(mut self) -> Self {
            self.tag_with_key = true;
            self
        }

        fn gated(mut self, key: &str, gate: Arc<Notify>) -> Self {
            self.gates.insert(key.to_string(), gate);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ConversationSource for ScriptedSource {
        async fn get_conversations(
            &self,
            resource_key: &str,
        ) -> Result<ConversationsPayload, FetchFailure> {
            self.calls.lock().unwrap().push(resource_key.to_string());
            if let Some(gate) = self.gates.get(resource_key) {
                gate.notified().await;
            }
            let mut outcome = self.outcome.clone();
            if let (true, Ok(payload)) = (self.tag_with_key, &mut outcome) {
                payload.conversations = vec![conversation(resource_key, 1)];
            }
            outcome
        }
    }

    fn ok_payload() -> ConversationsPayload {
        ConversationsPayload {
            conversations: Vec::new(),
            status_code: Some(200),
            status_message: None,
        }
    }

    #[tokio::test]
    async fn worker_emits_success_with_fetched_payload() {
        let payload = ConversationsPayload {
            conversations: vec![conversation("a", 2)],
            status_code: Some(200),
            status_message: None,
        };
        let source = ScriptedSource::new(Ok(payload.clone()));

        let action = fetch_conversations_worker(&source, "testUri").await;

        assert_eq!(source.calls(), vec!["testUri".to_string()]);
        assert_eq!(action, ConversationsAction::success(payload));
    }

    #[tokio::test]
    async fn worker_emits_failure_with_empty_conversations() {
        let source = ScriptedSource::new(Err(FetchFailure::status(500, Some("oops".to_string()))));

        let action = fetch_conversations_worker(&source, "testUri").await;

        assert_eq!(
            action,
            ConversationsAction::failure(ConversationsPayload {
                conversations: Vec::new(),
                status_code: Some(500),
                status_message: Some("oops".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn watcher_only_spawns_for_requests() {
        let source = Arc::new(ScriptedSource::new(Ok(ok_payload())));
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
        let watcher = tokio::spawn(watch_conversation_requests(
            source.clone(),
            request_rx,
            outcome_tx,
        ));

        request_tx
            .send(ConversationsAction::Other {
                kind: "INVALID.ACTION".to_string(),
            })
            .unwrap();
        request_tx.send(ConversationsAction::request("testUri")).unwrap();
        drop(request_tx);
        watcher.await.unwrap();

        let outcome = outcome_rx.recv().await.expect("one outcome");
        assert!(matches!(outcome, ConversationsAction::Success(_)));
        assert!(outcome_rx.recv().await.is_none());
        assert_eq!(source.calls(), vec!["testUri".to_string()]);
    }

    #[tokio::test]
    async fn request_flow_settles_on_success() {
        let source = Arc::new(ScriptedSource::new(Ok(ok_payload())));
        let mut store = ConversationsStore::start(source.clone());

        store.dispatch(ConversationsAction::request("testUri"));
        assert!(store.state().is_loading);

        let state = timeout(Duration::from_secs(2), store.next_outcome())
            .await
            .expect("outcome in time")
            .expect("outcome");

        assert_eq!(
            *state,
            ConversationsState {
                is_loading: false,
                status_code: Some(200),
                conversations: Vec::new(),
            }
        );
        assert_eq!(source.calls(), vec!["testUri".to_string()]);
    }

    #[tokio::test]
    async fn request_flow_settles_on_failure() {
        let source = Arc::new(ScriptedSource::new(Err(FetchFailure::status(
            500,
            Some("oops".to_string()),
        ))));
        let mut store = ConversationsStore::start(source);

        store.dispatch(ConversationsAction::request("testUri"));
        let state = timeout(Duration::from_secs(2), store.next_outcome())
            .await
            .expect("outcome in time")
            .expect("outcome");

        assert_eq!(
            *state,
            ConversationsState {
                is_loading: false,
                status_code: Some(500),
                conversations: Vec::new(),
            }
        );
    }

    #[tokio::test]
    async fn last_outcome_to_arrive_wins() {
        let slow_gate = Arc::new(Notify::new());
        let source = Arc::new(
            ScriptedSource::new(Ok(ok_payload()))
                .tagged()
                .gated("slow", slow_gate.clone()),
        );
        let mut store = ConversationsStore::start(source.clone());

        store.dispatch(ConversationsAction::request("slow"));
        store.dispatch(ConversationsAction::request("fast"));

        let state = timeout(Duration::from_secs(2), store.next_outcome())
            .await
            .expect("fast outcome in time")
            .expect("fast outcome");
        assert_eq!(state.conversations[0].message.key, "fast");

        slow_gate.notify_one();
        let state = timeout(Duration::from_secs(2), store.next_outcome())
            .await
            .expect("slow outcome in time")
            .expect("slow outcome");
        assert_eq!(state.conversations[0].message.key, "slow");
        assert!(!state.is_loading);

        let mut calls = source.calls();
        calls.sort();
        assert_eq!(calls, vec!["fast".to_string(), "slow".to_string()]);
    }

    #[tokio::test]
    async fn process_outcomes_drains_ready_actions() {
        let source = Arc::new(ScriptedSource::new(Ok(ok_payload())));
        let mut store = ConversationsStore::start(source);

        store.dispatch(ConversationsAction::request("one"));
        store.dispatch(ConversationsAction::request("two"));

        let drained = timeout(Duration::from_secs(2), async {
            let mut applied = 0;
            while applied < 2 {
                applied += store.process_outcomes();
                tokio::task::yield_now().await;
            }
            applied
        })
        .await
        .expect("both outcomes in time");

        assert_eq!(drained, 2);
        assert_eq!(store.process_outcomes(), 0);
        assert_eq!(store.state().status_code, Some(200));
    }
}
