use tokio::sync::watch;
use tracing::debug;
use uuid::Uuid;

use crate::runtime::error::Error;
use crate::runtime::handle::DeferredHandle;

/// State of a deferred result. Moves out of `Pending` at most once.
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement<T> {
    Pending,
    Fulfilled(T),
    Rejected(Error),
}

impl<T> Settlement<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Settlement::Pending)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_pending()
    }

    /// `None` while pending.
    pub fn into_result(self) -> Option<Result<T, Error>> {
        match self {
            Settlement::Pending => None,
            Settlement::Fulfilled(value) => Some(Ok(value)),
            Settlement::Rejected(error) => Some(Err(error)),
        }
    }
}

/// Creates a connected settler/handle pair in the pending state.
pub fn channel<T>() -> (Settler<T>, DeferredHandle<T>) {
    let id = Uuid::new_v4();
    let (sender, receiver) = watch::channel(Settlement::Pending);
    (Settler { id, sender }, DeferredHandle::new(id, receiver))
}

/// Write half of a deferred result.
///
/// The first `resolve` or `reject` wins. Later calls return `false` and
/// leave the settled value alone. A settler dropped while still pending
/// rejects its handle with [`Error::Canceled`].
#[derive(Debug)]
pub struct Settler<T> {
    id: Uuid,
    sender: watch::Sender<Settlement<T>>,
}

impl<T> Settler<T> {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn resolve(&mut self, value: T) -> bool {
        self.settle(Settlement::Fulfilled(value))
    }

    pub fn reject(&mut self, error: Error) -> bool {
        self.settle(Settlement::Rejected(error))
    }

    pub fn is_settled(&self) -> bool {
        self.sender.borrow().is_settled()
    }

    fn settle(&mut self, outcome: Settlement<T>) -> bool {
        let landed = settle_once(&self.sender, outcome);
        if !landed {
            debug!(task_id = %self.id, "ignoring settlement, handle already settled");
        }
        landed
    }
}

impl<T> Drop for Settler<T> {
    fn drop(&mut self) {
        if settle_once(&self.sender, Settlement::Rejected(Error::Canceled)) {
            debug!(task_id = %self.id, "settler dropped while pending");
        }
    }
}

// send_if_modified works without live receivers, so the state is kept
// for handles cloned later.
fn settle_once<T>(sender: &watch::Sender<Settlement<T>>, outcome: Settlement<T>) -> bool {
    sender.send_if_modified(|state| {
        if state.is_settled() {
            return false;
        }
        *state = outcome;
        true
    })
}
