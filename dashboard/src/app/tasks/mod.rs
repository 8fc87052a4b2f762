//! # Async Tasks
//!
//! Each function spawns one or more requests on the app's Tokio runtime and
//! reports the result back as an [`AppEvent`]. Tasks never touch
//! [`crate::app::AppState`]; the UI thread applies results in `on_tick`.

pub mod dashboard;
pub mod health;
pub mod tokens;
pub mod trading;

use std::future::Future;
use std::sync::Arc;

use async_channel::Sender;
use tokio::runtime::Handle;

use crate::app::events::AppEvent;
use crate::core::service::ApiService;

/// What a task needs to run a request and report back.
#[derive(Clone)]
pub(crate) struct TaskContext {
    pub api: Arc<dyn ApiService>,
    pub runtime: Handle,
    pub event_tx: Sender<AppEvent>,
}

impl TaskContext {
    /// Run `task` and send the event it produces.
    pub fn spawn<F>(&self, name: &'static str, task: F)
    where
        F: Future<Output = AppEvent> + Send + 'static,
    {
        let event_tx = self.event_tx.clone();
        self.runtime.spawn(async move {
            let event = task.await;
            tracing::debug!(task = name, event = event.kind(), "Task finished");
            if event_tx.send(event).await.is_err() {
                tracing::debug!(task = name, "Event channel closed, dropping result");
            }
        });
    }
}
