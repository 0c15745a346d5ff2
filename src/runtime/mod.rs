pub mod error;
pub mod global;
pub mod handle;
pub mod scheduler;
pub mod settlement;
pub mod task;

pub use error::{Error, INVALID_INPUT_MESSAGE};
pub use global::{DEFAULT_DELAY_MS, SchedulerConfig, init, init_with_config, scheduler, submit};
pub use handle::DeferredHandle;
pub use scheduler::{LocalScheduler, Scheduler};
pub use settlement::{Settlement, Settler};
pub use task::{DeferredTask, TaskFn};
