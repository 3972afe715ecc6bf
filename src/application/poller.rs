// Periodic background polling
use futures::StreamExt;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_stream::wrappers::IntervalStream;

/// Owns a running poll loop. Dropping or cancelling the handle stops it.
#[derive(Debug)]
pub struct PollHandle {
    name: &'static str,
    task: JoinHandle<()>,
}

impl PollHandle {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    pub fn cancel(self) {
        tracing::debug!("Cancelling {} poller", self.name);
        // Drop aborts the task
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run `tick` every `period`, first one period from now.
///
/// Ticks of the same poller never overlap; a tick that overruns delays the
/// next one instead of bursting.
pub fn spawn_poller<F, Fut>(name: &'static str, period: Duration, tick: F) -> PollHandle
where
    F: Fn() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let task = tokio::spawn(async move {
        tracing::debug!("Started {} poller every {:?}", name, period);
        let mut ticks = IntervalStream::new(interval);
        while ticks.next().await.is_some() {
            tick().await;
        }
    });

    PollHandle { name, task }
}
