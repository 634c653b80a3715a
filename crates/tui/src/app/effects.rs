use super::*;

impl App {
    pub fn init(&mut self) {
        match TableKey::parse(&self.resource_key) {
            Ok(key) => self.table = Some(key),
            Err(e) => self.report_error("Unrecognized table key", e),
        }

        if let Some(path) = self.config.ui.metadata_file.clone() {
            match TableDetail::load(&path) {
                Ok(detail) => self.detail = detail,
                Err(e) => self.report_error("Failed to load table metadata", e),
            }
        }

        self.request_conversations();
    }

    pub(super) fn request_conversations(&mut self) {
        self.conversations_scroll = 0;
        self.conversations
            .dispatch(ConversationsAction::request(self.resource_key.clone()));
    }

    /// Applies finished fetches. Called once per frame.
    pub fn process_async_events(&mut self) {
        if self.conversations.process_outcomes() == 0 {
            return;
        }

        let state = self.conversations.state();
        if state.is_error() {
            let status = state
                .status_code
                .map(|code| format!("status {code}"))
                .unwrap_or_else(|| "no response received".to_string());
            self.report_error("Failed to load slack conversations", status);
            self.last_error_from_fetch = true;
        } else if !state.is_loading && self.last_error_from_fetch {
            self.clear_error();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{conversation, FixedSource};
    use super::*;
    use std::time::Duration;
    use stemma_view_slack::{ConversationsPayload, FetchFailure};

    async fn settle(app: &mut App) {
        tokio::time::timeout(Duration::from_secs(2), async {
            while app.conversations.state().is_loading {
                app.process_async_events();
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("conversations settle in time");
    }

    fn app_with(outcome: Result<ConversationsPayload, FetchFailure>, key: &str) -> App {
        App::new(Config::default(), key, Arc::new(FixedSource(outcome)))
    }

    #[tokio::test]
    async fn init_parses_key_and_loads_conversations() {
        let mut app = app_with(
            Ok(ConversationsPayload {
                conversations: vec![conversation("fresh?", 2)],
                status_code: Some(200),
                status_message: Some("Success".to_string()),
            }),
            "hive://gold.core/orders",
        );

        app.init();
        assert!(app.conversations.state().is_loading);
        settle(&mut app).await;

        assert_eq!(app.table_name(), "orders");
        assert_eq!(app.conversations.state().status_code, Some(200));
        assert_eq!(app.conversations.state().conversations.len(), 1);
        assert!(app.last_error.is_none());
    }

    #[tokio::test]
    async fn failed_fetch_is_reported() {
        let mut app = app_with(
            Err(FetchFailure::status(500, Some("oops".to_string()))),
            "hive://gold.core/orders",
        );

        app.init();
        settle(&mut app).await;

        assert!(app.conversations.state().conversations.is_empty());
        assert_eq!(
            app.last_error.as_deref(),
            Some("Failed to load slack conversations: status 500")
        );
    }

    #[tokio::test]
    async fn transport_failure_is_reported_without_status() {
        let mut app = app_with(Err(FetchFailure::no_response()), "hive://gold.core/orders");

        app.init();
        settle(&mut app).await;

        assert_eq!(
            app.last_error.as_deref(),
            Some("Failed to load slack conversations: no response received")
        );
    }

    #[tokio::test]
    async fn successful_fetch_keeps_metadata_error() {
        let mut config = Config::default();
        config.ui.metadata_file = Some("/nonexistent/stemma-view/orders.json".into());
        let source = Arc::new(FixedSource(Ok(ConversationsPayload {
            conversations: Vec::new(),
            status_code: Some(200),
            status_message: Some("Success".to_string()),
        })));
        let mut app = App::new(config, "hive://gold.core/orders", source);

        app.init();
        settle(&mut app).await;

        assert_eq!(app.conversations.state().status_code, Some(200));
        assert!(app
            .last_error
            .as_deref()
            .is_some_and(|e| e.starts_with("Failed to load table metadata")));
    }

    #[tokio::test]
    async fn successful_reload_clears_fetch_error() {
        let payload = ConversationsPayload {
            status_code: Some(200),
            ..ConversationsPayload::default()
        };
        let mut app = app_with(Ok(payload), "hive://gold.core/orders");
        app.report_error("Failed to load slack conversations", "status 503");
        app.last_error_from_fetch = true;

        app.init();
        settle(&mut app).await;

        assert!(app.last_error.is_none());
        assert!(!app.last_error_from_fetch);
    }

    #[tokio::test]
    async fn unparseable_key_still_requests_conversations() {
        let mut app = app_with(Ok(ConversationsPayload::default()), "orders");

        app.init();

        assert!(app.table.is_none());
        assert_eq!(app.table_name(), "orders");
        assert!(app
            .last_error
            .as_deref()
            .is_some_and(|e| e.starts_with("Unrecognized table key")));
        assert!(app.conversations.state().is_loading);
    }

    #[tokio::test]
    async fn missing_metadata_file_is_reported() {
        let mut config = Config::default();
        config.ui.metadata_file = Some("/nonexistent/stemma-view/orders.json".into());
        let source = Arc::new(FixedSource(Ok(ConversationsPayload::default())));
        let mut app = App::new(config, "hive://gold.core/orders", source);

        app.init();

        assert!(app.detail.is_empty());
        assert!(app
            .last_error
            .as_deref()
            .is_some_and(|e| e.starts_with("Failed to load table metadata")));
    }
}
