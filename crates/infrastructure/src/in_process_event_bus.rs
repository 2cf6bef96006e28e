use std::sync::Arc;

use courseforge_application::UserDeletedObserver;
use courseforge_domain::UserDeleted;
use tracing::warn;

/// In-process registry dispatching platform events to plugin observers.
///
/// Stands in for the host platform event dispatcher at the edge of this
/// service: the api event intake publishes here after authenticating the
/// platform callback.
#[derive(Default)]
pub struct InProcessEventBus {
    user_deleted_observers: Vec<Arc<dyn UserDeletedObserver>>,
}

impl InProcessEventBus {
    /// Creates a bus with no registered observers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_deleted_observers: Vec::new(),
        }
    }

    /// Registers an observer for user deletion events.
    pub fn register_user_deleted_observer(&mut self, observer: Arc<dyn UserDeletedObserver>) {
        self.user_deleted_observers.push(observer);
    }

    /// Publishes a user deletion event to every registered observer.
    ///
    /// Observers run in registration order. A failing observer is logged
    /// and does not stop delivery to the rest.
    pub async fn publish_user_deleted(&self, event: &UserDeleted) {
        for observer in &self.user_deleted_observers {
            if let Err(error) = observer.user_deleted(event).await {
                warn!(user_id = %event.user_id, %error, "user deletion observer failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use courseforge_core::{AppError, AppResult};
    use courseforge_domain::UserId;
    use tokio::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingObserver {
        seen: Mutex<Vec<UserId>>,
    }

    #[async_trait]
    impl UserDeletedObserver for RecordingObserver {
        async fn user_deleted(&self, event: &UserDeleted) -> AppResult<()> {
            self.seen.lock().await.push(event.user_id);
            Ok(())
        }
    }

    struct FailingObserver;

    #[async_trait]
    impl UserDeletedObserver for FailingObserver {
        async fn user_deleted(&self, _event: &UserDeleted) -> AppResult<()> {
            Err(AppError::Internal("observer exploded".to_owned()))
        }
    }

    #[tokio::test]
    async fn publish_reaches_every_registered_observer() {
        let first = Arc::new(RecordingObserver::default());
        let second = Arc::new(RecordingObserver::default());

        let mut bus = InProcessEventBus::new();
        bus.register_user_deleted_observer(first.clone());
        bus.register_user_deleted_observer(second.clone());

        let user_id = UserId::new();
        bus.publish_user_deleted(&UserDeleted::new(user_id)).await;

        assert_eq!(first.seen.lock().await.as_slice(), &[user_id]);
        assert_eq!(second.seen.lock().await.as_slice(), &[user_id]);
    }

    #[tokio::test]
    async fn failing_observer_does_not_stop_delivery() {
        let recording = Arc::new(RecordingObserver::default());

        let mut bus = InProcessEventBus::new();
        bus.register_user_deleted_observer(Arc::new(FailingObserver));
        bus.register_user_deleted_observer(recording.clone());

        let user_id = UserId::new();
        bus.publish_user_deleted(&UserDeleted::new(user_id)).await;

        assert_eq!(recording.seen.lock().await.as_slice(), &[user_id]);
    }
}
