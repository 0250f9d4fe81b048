use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, trace};

/// Forwards the last value it was called with once `delay` has passed without a new call.
///
/// Every call restarts the timer. A pending value is dropped by [`Debouncer::cancel`] or when the
/// debouncer itself is dropped, so nothing is delivered after its owner is gone.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    tx: Sender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Send + 'static,
{
    pub fn new(delay: Duration, tx: Sender<T>) -> Self {
        Debouncer { delay, tx, pending: None }
    }

    pub fn call(&mut self, value: T) {
        self.cancel();

        let tx = self.tx.clone();
        let delay = self.delay;
        let deadline = Instant::now() + delay;
        self.pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            if tx.send(value).await.is_err() {
                debug!("⏱️ Debounced value dropped, receiver is gone");
            }
        }));
        trace!("⏱️ Debounce timer restarted, firing in {:?}", delay);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
