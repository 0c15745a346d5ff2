use std::marker::PhantomData;

use crate::runtime::settlement::Settler;

// A unit of deferred work. It settles the handed-in settler when run; if it
// returns without settling, the handle is canceled.
pub trait DeferredTask: Send + 'static {
    type Output: Send + Sync + 'static;

    fn run(self, settler: &mut Settler<Self::Output>);
}

// Lets a plain closure act as a task
pub struct TaskFn<F, T>
where
    F: FnOnce(&mut Settler<T>) + Send + 'static,
    T: Send + Sync + 'static,
{
    func: F,
    _phantom: PhantomData<fn() -> T>,
}

impl<F, T> TaskFn<F, T>
where
    F: FnOnce(&mut Settler<T>) + Send + 'static,
    T: Send + Sync + 'static,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            _phantom: PhantomData,
        }
    }
}

impl<F, T> DeferredTask for TaskFn<F, T>
where
    F: FnOnce(&mut Settler<T>) + Send + 'static,
    T: Send + Sync + 'static,
{
    type Output = T;

    fn run(self, settler: &mut Settler<T>) {
        (self.func)(settler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::settlement::{Settlement, channel};

    #[test]
    fn closure_task_settles_its_handle() {
        let (mut settler, handle) = channel();
        TaskFn::new(|settler: &mut Settler<u32>| {
            settler.resolve(7 * 7);
        })
        .run(&mut settler);

        assert_eq!(handle.state(), Settlement::Fulfilled(49));
    }
}
