use std::time::Duration;

use tracing::{debug, warn};

use crate::runtime::global::SchedulerConfig;
use crate::runtime::handle::DeferredHandle;
use crate::runtime::settlement;
use crate::runtime::task::DeferredTask;

pub trait Scheduler: Send + Sync {
    /// Schedules `task` and returns its handle without waiting for it.
    fn submit<T>(&self, task: T) -> DeferredHandle<T::Output>
    where
        T: DeferredTask;
}

/// Runs every task on the current tokio runtime after a fixed delay.
///
/// `submit` must be called from within a runtime. On a current-thread
/// runtime all work shares the caller's execution context.
#[derive(Debug, Clone)]
pub struct LocalScheduler {
    delay: Duration,
}

impl LocalScheduler {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self::new(config.delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for LocalScheduler {
    fn default() -> Self {
        Self::from_config(&SchedulerConfig::default())
    }
}

impl Scheduler for LocalScheduler {
    fn submit<T>(&self, task: T) -> DeferredHandle<T::Output>
    where
        T: DeferredTask,
    {
        let (mut settler, handle) = settlement::channel();
        let delay = self.delay;
        debug!(task_id = %settler.id(), delay_ms = delay.as_millis() as u64, "scheduling deferred task");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.run(&mut settler);
            if settler.is_settled() {
                debug!(task_id = %settler.id(), "deferred task settled");
            } else {
                warn!(task_id = %settler.id(), "deferred task returned without settling");
            }
        });

        handle
    }
}
