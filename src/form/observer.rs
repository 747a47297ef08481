//! Change subscribers of a form builder session

use tokio::sync::mpsc::UnboundedSender;

use super::store::Snapshot;

/// Receives the full question list after every committed mutation
#[cfg_attr(test, mockall::automock)]
pub trait FormObserver: Send {
    fn on_change(&mut self, snapshot: &Snapshot);
}

/// Forwards snapshots into a tokio channel for an async consumer
pub struct ChannelObserver {
    tx: UnboundedSender<Snapshot>,
}

impl ChannelObserver {
    pub fn new(tx: UnboundedSender<Snapshot>) -> Self {
        Self { tx }
    }
}

impl FormObserver for ChannelObserver {
    fn on_change(&mut self, snapshot: &Snapshot) {
        if self.tx.send(snapshot.clone()).is_err() {
            tracing::warn!("Snapshot receiver dropped, change not forwarded");
        }
    }
}

/// Adapts a closure into an observer
pub struct CallbackObserver<F>(pub F);

impl<F> FormObserver for CallbackObserver<F>
where
    F: FnMut(&Snapshot) + Send,
{
    fn on_change(&mut self, snapshot: &Snapshot) {
        (self.0)(snapshot)
    }
}
