use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

const SUCCESS_CLEAR_AFTER: Duration = Duration::from_secs(3);
const ERROR_CLEAR_AFTER: Duration = Duration::from_secs(5);

/// What the admin page renders: at most one message per kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BannerSnapshot {
    pub success: Option<String>,
    pub error: Option<String>,
}

#[derive(Default)]
struct BannerInner {
    success: Option<String>,
    error: Option<String>,
    success_clear: Option<JoinHandle<()>>,
    error_clear: Option<JoinHandle<()>>,
}

/// Transient success/error messages with scheduled clearing.
///
/// Success messages clear after 3 seconds, errors after 5. A new message
/// aborts the pending clear task for its slot and schedules a fresh one, so
/// a rapidly-following message always gets its full display time.
#[derive(Clone, Default)]
pub struct StatusBanner {
    inner: Arc<Mutex<BannerInner>>,
}

enum Kind {
    Success,
    Error,
}

impl StatusBanner {
    pub fn success(&self, message: impl Into<String>) {
        self.set(Kind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.set(Kind::Error, message.into());
    }

    pub fn snapshot(&self) -> BannerSnapshot {
        let inner = self.inner.lock().unwrap();
        BannerSnapshot {
            success: inner.success.clone(),
            error: inner.error.clone(),
        }
    }

    fn set(&self, kind: Kind, message: String) {
        let mut guard = self.inner.lock().unwrap();
        let inner = &mut *guard;

        let (slot, pending, delay): (_, _, Duration) = match kind {
            Kind::Success => (
                &mut inner.success,
                &mut inner.success_clear,
                SUCCESS_CLEAR_AFTER,
            ),
            Kind::Error => (&mut inner.error, &mut inner.error_clear, ERROR_CLEAR_AFTER),
        };

        if let Some(task) = pending.take() {
            task.abort();
        }
        *slot = Some(message);

        let shared = self.inner.clone();
        let is_success = matches!(kind, Kind::Success);
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut inner = shared.lock().unwrap();
            if is_success {
                inner.success = None;
                inner.success_clear = None;
            } else {
                inner.error = None;
                inner.error_clear = None;
            }
        }));
    }
}
