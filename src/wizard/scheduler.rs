use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::trace;

/// Runs delayed transitions as tokio timers that post an event back to the
/// owner's channel.
///
/// Every timer is aborted when the scheduler is dropped, so a view that goes
/// away mid-delay never receives an update for state it no longer holds.
pub struct DelayScheduler<E> {
    tx: UnboundedSender<E>,
    handles: Vec<JoinHandle<()>>,
}

impl<E: Send + 'static> DelayScheduler<E> {
    pub fn new(tx: UnboundedSender<E>) -> Self {
        Self {
            tx,
            handles: Vec::new(),
        }
    }

    /// Post `event` after `delay`
    pub fn schedule(&mut self, delay: Duration, event: E) {
        self.handles.retain(|handle| !handle.is_finished());

        let tx = self.tx.clone();
        trace!(delay_ms = delay.as_millis() as u64, "scheduling delayed event");
        self.handles.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver may already be gone during shutdown
            let _ = tx.send(event);
        }));
    }

    /// Number of timers that have not fired yet
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|handle| !handle.is_finished()).count()
    }

    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl<E> Drop for DelayScheduler<E> {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = DelayScheduler::new(tx);
        scheduler.schedule(Duration::from_millis(800), 7u64);

        tokio::time::sleep(Duration::from_millis(799)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.recv().await, Some(7));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_cancels_pending_timers() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u64>();
        let mut scheduler = DelayScheduler::new(tx.clone());
        scheduler.schedule(Duration::from_secs(1), 1);
        scheduler.schedule(Duration::from_secs(2), 2);
        assert_eq!(scheduler.pending(), 2);

        drop(scheduler);
        drop(tx);
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(rx.recv().await, None);
    }
}
