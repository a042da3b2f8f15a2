//! Per-page-view builder-data fetch lifecycle.
//!
//! One loader serves one mounted page at a time. The presentation layer
//! subscribes to the watch channel and renders `Loading` / `Ready` /
//! `Failed`; a new page view supersedes the previous one, and a superseded
//! view's in-flight result is discarded rather than applied.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use ringcraft_types::builder_data::FetchState;
use ringcraft_types::selection::Selections;

use crate::gateway::BuilderDataGateway;

/// Drives the builder-data fetch for the current page view.
pub struct BuilderDataLoader<G> {
    gateway: G,
    generation: AtomicU64,
    tx: watch::Sender<FetchState>,
}

impl<G: BuilderDataGateway> BuilderDataLoader<G> {
    pub fn new(gateway: G) -> Self {
        let (tx, _rx) = watch::channel(FetchState::Loading);
        Self {
            gateway,
            generation: AtomicU64::new(0),
            tx,
        }
    }

    /// Observe the fetch state. The receiver sees every applied transition.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.tx.subscribe()
    }

    /// The current fetch state.
    pub fn state(&self) -> FetchState {
        self.tx.borrow().clone()
    }

    /// Start a new page view: state resets to `Loading` and any fetch still
    /// in flight for the previous view is abandoned (its result will be
    /// discarded on arrival).
    pub fn begin_view(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.tx.send_replace(FetchState::Loading);
    }

    /// Fetch builder data for the given selections and publish the outcome.
    ///
    /// The caller issues at most one `load` per page view, after the flow
    /// guard has decided to show the page. A failure is published, logged,
    /// and otherwise swallowed: it never aborts the page and is only
    /// retried when the shopper re-enters.
    pub async fn load(&self, selections: &Selections) {
        let generation = self.generation.load(Ordering::SeqCst);

        let result = self
            .gateway
            .fetch(
                selections.base_item_id.as_deref(),
                selections.variant_id.as_deref(),
            )
            .await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("discarding builder data for a superseded page view");
            return;
        }

        match result {
            Ok(data) => {
                self.tx.send_replace(FetchState::Ready { data });
            }
            Err(err) => {
                tracing::warn!(error = %err, "builder data fetch failed");
                self.tx.send_replace(FetchState::Failed {
                    reason: err.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::Notify;

    use ringcraft_types::builder_data::BuilderData;
    use ringcraft_types::error::GatewayError;

    /// Gateway that parks every fetch until released, so tests control
    /// exactly when a "network" response arrives. `entered` fires once the
    /// fetch has actually started.
    struct BlockingGateway {
        entered: Notify,
        release: Notify,
        label: &'static str,
    }

    impl BlockingGateway {
        fn new(label: &'static str) -> Self {
            Self {
                entered: Notify::new(),
                release: Notify::new(),
                label,
            }
        }
    }

    impl BuilderDataGateway for BlockingGateway {
        async fn fetch(
            &self,
            base_item_id: Option<&str>,
            variant_id: Option<&str>,
        ) -> Result<BuilderData, GatewayError> {
            self.entered.notify_one();
            self.release.notified().await;
            Ok(BuilderData {
                base_item_id: base_item_id.map(str::to_string),
                variant_id: variant_id.map(str::to_string),
                payload: serde_json::json!({ "label": self.label }),
            })
        }
    }

    struct FailingGateway;

    impl BuilderDataGateway for FailingGateway {
        async fn fetch(
            &self,
            _base_item_id: Option<&str>,
            _variant_id: Option<&str>,
        ) -> Result<BuilderData, GatewayError> {
            Err(GatewayError::Http { status: 503 })
        }
    }

    fn selections() -> Selections {
        Selections {
            base_item_id: Some("R1".to_string()),
            variant_id: Some("D9".to_string()),
            size: None,
        }
    }

    #[tokio::test]
    async fn test_successful_load_publishes_ready() {
        let gateway = Arc::new(BlockingGateway::new("fresh"));
        let loader = Arc::new(BuilderDataLoader::new(gateway.clone()));

        loader.begin_view();
        assert!(loader.state().is_loading());

        let task = tokio::spawn({
            let loader = loader.clone();
            async move { loader.load(&selections()).await }
        });

        gateway.release.notify_one();
        task.await.unwrap();

        match loader.state() {
            FetchState::Ready { data } => {
                assert_eq!(data.base_item_id, Some("R1".to_string()));
                assert_eq!(data.variant_id, Some("D9".to_string()));
            }
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failure_publishes_failed_not_panic() {
        let loader = BuilderDataLoader::new(FailingGateway);
        loader.begin_view();
        loader.load(&selections()).await;

        match loader.state() {
            FetchState::Failed { reason } => assert!(reason.contains("503")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_superseded_view_result_discarded() {
        let gateway = Arc::new(BlockingGateway::new("stale"));
        let loader = Arc::new(BuilderDataLoader::new(gateway.clone()));

        loader.begin_view();
        let task = tokio::spawn({
            let loader = loader.clone();
            async move { loader.load(&selections()).await }
        });
        gateway.entered.notified().await;

        // The shopper navigated away before the response arrived.
        loader.begin_view();
        gateway.release.notify_one();
        task.await.unwrap();

        // The stale result was never applied to the new view.
        assert!(loader.state().is_loading());
    }

    #[tokio::test]
    async fn test_watchers_observe_transitions() {
        let gateway = Arc::new(BlockingGateway::new("watched"));
        let loader = Arc::new(BuilderDataLoader::new(gateway.clone()));
        let mut rx = loader.subscribe();

        loader.begin_view();
        let task = tokio::spawn({
            let loader = loader.clone();
            async move { loader.load(&selections()).await }
        });

        gateway.release.notify_one();
        task.await.unwrap();

        rx.changed().await.unwrap();
        assert!(rx.borrow().is_ready());
    }
}
