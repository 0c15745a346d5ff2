use std::fmt;
use std::future::IntoFuture;

use futures::future::BoxFuture;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::trace;
use uuid::Uuid;

use crate::runtime::error::Error;
use crate::runtime::settlement::Settlement;

/// Read half of a deferred result.
///
/// Clones observe the same settlement, so any number of consumers can wait
/// on one computation. Awaiting a handle that already settled returns
/// immediately.
pub struct DeferredHandle<T> {
    id: Uuid,
    receiver: watch::Receiver<Settlement<T>>,
}

impl<T> DeferredHandle<T> {
    pub(crate) fn new(id: Uuid, receiver: watch::Receiver<Settlement<T>>) -> Self {
        Self { id, receiver }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_pending(&self) -> bool {
        self.receiver.borrow().is_pending()
    }
}

impl<T> DeferredHandle<T>
where
    T: Clone,
{
    /// Snapshot of the current state. `Pending` until the work settles.
    pub fn state(&self) -> Settlement<T> {
        self.receiver.borrow().clone()
    }

    /// Waits for the settlement without consuming the handle.
    pub async fn settled(&self) -> Result<T, Error> {
        let mut receiver = self.receiver.clone();
        trace!(task_id = %self.id, "waiting for settlement");
        let state = receiver.wait_for(Settlement::is_settled).await?.clone();
        state.into_result().unwrap_or(Err(Error::Canceled))
    }
}

impl<T> DeferredHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Attaches a success and a failure callback. Exactly one of them runs,
    /// on the current tokio runtime, once the handle settles.
    pub fn then<F, R>(&self, on_fulfilled: F, on_rejected: R) -> JoinHandle<()>
    where
        F: FnOnce(T) + Send + 'static,
        R: FnOnce(Error) + Send + 'static,
    {
        let handle = self.clone();
        tokio::spawn(async move {
            match handle.await {
                Ok(value) => on_fulfilled(value),
                Err(error) => on_rejected(error),
            }
        })
    }
}

impl<T> IntoFuture for DeferredHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Output = Result<T, Error>;
    type IntoFuture = BoxFuture<'static, Result<T, Error>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.settled().await })
    }
}

// Manual Clone so T doesn't need to be Clone
impl<T> Clone for DeferredHandle<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            receiver: self.receiver.clone(),
        }
    }
}

impl<T> fmt::Debug for DeferredHandle<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeferredHandle")
            .field("id", &self.id)
            .field("state", &*self.receiver.borrow())
            .field("result_type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> fmt::Display for DeferredHandle<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.receiver.borrow() {
            Settlement::Pending => write!(f, "DeferredHandle {{ <pending> }}"),
            Settlement::Fulfilled(value) => write!(f, "DeferredHandle {{ {value} }}"),
            Settlement::Rejected(error) => write!(f, "DeferredHandle {{ <rejected> {error} }}"),
        }
    }
}
