use std::sync::OnceLock;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::runtime::error::Error;
use crate::runtime::handle::DeferredHandle;
use crate::runtime::scheduler::{LocalScheduler, Scheduler};
use crate::runtime::task::DeferredTask;

pub const DEFAULT_DELAY_MS: u64 = 3000;

static GLOBAL_SCHEDULER: OnceLock<LocalScheduler> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub delay_ms: u64,
}

impl SchedulerConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

pub fn init() -> Result<(), Error> {
    init_with_config(SchedulerConfig::default())
}

/// Configures the process-wide scheduler. Repeating the same config is a
/// no-op; a different one after initialization fails.
pub fn init_with_config(config: SchedulerConfig) -> Result<(), Error> {
    let scheduler = GLOBAL_SCHEDULER.get_or_init(|| {
        debug!(delay_ms = config.delay_ms, "initializing global scheduler");
        LocalScheduler::from_config(&config)
    });
    if scheduler.delay() == config.delay() {
        Ok(())
    } else {
        Err(Error::AlreadyInitialized)
    }
}

pub fn scheduler() -> &'static LocalScheduler {
    GLOBAL_SCHEDULER.get_or_init(LocalScheduler::default)
}

pub fn submit<T>(task: T) -> DeferredHandle<T::Output>
where
    T: DeferredTask,
{
    scheduler().submit(task)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_reads_delay_from_json() {
        let config: SchedulerConfig = serde_json::from_str(r#"{ "delay_ms": 250 }"#).unwrap();
        assert_eq!(config.delay(), Duration::from_millis(250));
    }

    #[test]
    fn missing_delay_falls_back_to_default() {
        let config: SchedulerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SchedulerConfig::default());
        assert_eq!(config.delay(), Duration::from_millis(3000));
    }

    // Every test in this crate leaves the global scheduler at its default.
    #[test]
    fn reconfiguring_global_scheduler_fails() {
        assert_eq!(init(), Ok(()));
        assert_eq!(init_with_config(SchedulerConfig::default()), Ok(()));
        assert_eq!(
            init_with_config(SchedulerConfig { delay_ms: 1 }),
            Err(Error::AlreadyInitialized)
        );
        assert_eq!(scheduler().delay(), Duration::from_millis(DEFAULT_DELAY_MS));
    }
}
