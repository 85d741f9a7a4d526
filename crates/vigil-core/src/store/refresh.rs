// ── Simulated refresh ──
//
// There is no backend: a refresh waits out a fixed delay and re-reads the
// same in-memory store. It is cancellable and never changes the data.

use std::time::Duration;

use chrono::Utc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use super::EventStore;
use crate::error::CoreError;
use crate::model::SecurityEvent;
use crate::stream::Snapshot;

/// Wait `delay`, then return the store's current snapshot and record the
/// refresh time. Returns [`CoreError::Cancelled`] if `cancel` fires first.
pub async fn refresh(
    store: &EventStore,
    delay: Duration,
    cancel: &CancellationToken,
) -> Result<Snapshot<SecurityEvent>, CoreError> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            warn!("refresh cancelled");
            Err(CoreError::Cancelled)
        }
        () = tokio::time::sleep(delay) => {
            let snap = store.read();
            store.mark_refreshed(Utc::now());
            debug!(events = snap.len(), "refresh complete");
            Ok(snap)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::model::Priority;
    use crate::testing::event;

    fn store() -> EventStore {
        EventStore::new(vec![event("E1", Priority::Red)])
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_rereads_store_after_delay() {
        let store = store();
        let cancel = CancellationToken::new();
        assert!(store.last_refresh().is_none());

        let snap = refresh(&store, Duration::from_millis(1000), &cancel)
            .await
            .unwrap();

        assert_eq!(snap.len(), 1);
        assert!(Arc::ptr_eq(&snap, &store.read()));
        assert!(store.last_refresh().is_some());
        assert_eq!(store.version(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_refresh_leaves_store_untouched() {
        let store = store();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = refresh(&store, Duration::from_secs(5), &cancel)
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Cancelled));
        assert!(store.last_refresh().is_none());
    }

    #[test]
    fn refresh_is_pending_until_delay_elapses() {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .start_paused(true)
            .build()
            .unwrap();
        let _guard = rt.enter();

        let store = store();
        let cancel = CancellationToken::new();
        let mut task = tokio_test::task::spawn(refresh(&store, Duration::from_secs(1), &cancel));
        tokio_test::assert_pending!(task.poll());

        cancel.cancel();
        let result = tokio_test::assert_ready!(task.poll());
        assert!(matches!(result, Err(CoreError::Cancelled)));
    }
}
