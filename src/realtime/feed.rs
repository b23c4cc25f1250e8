use super::{Change, ChangeKind, Table};
use std::sync::mpsc::{self, Receiver, Sender};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Sending half of a [`ChangeFeed`]. Cheap to clone and `Send`.
#[derive(Debug, Clone)]
pub struct ChangePublisher {
    tx: Sender<Change>,
}

impl ChangePublisher {
    /// Returns `false` once the feed has been dropped.
    pub fn publish(&self, change: Change) -> bool {
        self.tx.send(change).is_ok()
    }
}

struct Subscriber {
    id: SubscriptionId,
    table: Table,
    kinds: Vec<ChangeKind>,
    callback: Box<dyn FnMut(&Change)>,
}

impl Subscriber {
    fn wants(&self, change: &Change) -> bool {
        self.table == change.table && self.kinds.contains(&change.kind)
    }
}

pub struct ChangeFeed {
    tx: Sender<Change>,
    rx: Receiver<Change>,
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeFeed {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            tx,
            rx,
            subscribers: Vec::new(),
            next_id: 1,
        }
    }

    pub fn publisher(&self) -> ChangePublisher {
        ChangePublisher {
            tx: self.tx.clone(),
        }
    }

    pub fn subscribe<F>(&mut self, table: Table, kinds: &[ChangeKind], callback: F) -> SubscriptionId
    where
        F: FnMut(&Change) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;

        self.subscribers.push(Subscriber {
            id,
            table,
            kinds: kinds.to_vec(),
            callback: Box::new(callback),
        });

        log::debug!("subscription {:?} on {} for {:?}", id, table.as_str(), kinds);
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Drain every pending change and run the matching callbacks, one call
    /// per change. Returns the number of changes drained.
    pub fn dispatch(&mut self) -> usize {
        let mut drained = 0;

        while let Ok(change) = self.rx.try_recv() {
            drained += 1;
            for sub in self.subscribers.iter_mut().filter(|s| s.wants(&change)) {
                (sub.callback)(&change);
            }
        }

        drained
    }
}
