//! Squares a number after the scheduler's delay.
//!
//! Input is a dynamic JSON value so that non-numeric arguments can reach the
//! runtime check and be rejected through the handle.

use serde_json::Value;

use crate::runtime::{self, DeferredHandle, DeferredTask, Error, Scheduler, Settler};

/// Any value; only JSON numbers are accepted when the task runs.
pub type NumericInput = Value;

#[derive(Debug, Clone, PartialEq)]
pub struct Square {
    input: NumericInput,
}

impl Square {
    pub fn new(input: impl Into<NumericInput>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn input(&self) -> &NumericInput {
        &self.input
    }
}

impl DeferredTask for Square {
    type Output = f64;

    fn run(self, settler: &mut Settler<f64>) {
        let number = self.input.as_f64();
        if number.is_none() {
            settler.reject(Error::InvalidInput);
        }
        // Intentional fall-through: after a rejection this resolve is ignored
        // by the settler.
        let number = number.unwrap_or(f64::NAN);
        settler.resolve(number * number);
    }
}

/// Squares `input` on the global scheduler.
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn compute(input: impl Into<NumericInput>) -> DeferredHandle<f64> {
    runtime::submit(Square::new(input))
}

/// Squares `input` on `scheduler`.
///
/// # Panics
///
/// Panics when `scheduler` is a [`LocalScheduler`](crate::runtime::LocalScheduler)
/// and this is called outside a tokio runtime.
pub fn compute_with<S>(scheduler: &S, input: impl Into<NumericInput>) -> DeferredHandle<f64>
where
    S: Scheduler,
{
    scheduler.submit(Square::new(input))
}
