// Collection mode state owned by the dashboard controller
use crate::application::poller::PollHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionState {
    Idle,
    Collecting,
}

/// Whether readings are being collected, and the poll loop doing it.
///
/// At most one collection poller exists: starting while one is held replaces
/// (and stops) the old one.
#[derive(Debug, Default)]
pub struct CollectionSession {
    poller: Option<PollHandle>,
}

impl CollectionSession {
    pub fn state(&self) -> CollectionState {
        match self.poller {
            Some(_) => CollectionState::Collecting,
            None => CollectionState::Idle,
        }
    }

    pub fn is_collecting(&self) -> bool {
        self.poller.is_some()
    }

    pub fn start(&mut self, poller: PollHandle) {
        if let Some(previous) = self.poller.replace(poller) {
            tracing::warn!("Replacing running {} poller", previous.name());
            previous.cancel();
        }
    }

    pub fn stop(&mut self) -> bool {
        match self.poller.take() {
            Some(poller) => {
                poller.cancel();
                true
            }
            None => false,
        }
    }
}
