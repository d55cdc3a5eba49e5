use crossbeam_channel as chan;

const MAX_QUEUE_SIZE: usize = 64;

/// A thread-safe queue that keeps the most recent items.
pub struct Queue<T> {
    /// Send half of the queue.
    tx: chan::Sender<T>,

    /// Receive half of the queue.
    rx: chan::Receiver<T>,
}

impl<T> Queue<T> {
    /// Constructor.
    pub fn new() -> Self {
        let (tx, rx) = chan::bounded(MAX_QUEUE_SIZE);
        Self { tx, rx }
    }

    /// Append an item, evicting the oldest one if the queue is full.
    pub fn push(&self, mut item: T) {
        loop {
            match self.tx.try_send(item) {
                Ok(()) => return,
                Err(chan::TrySendError::Full(rejected)) => {
                    item = rejected;
                    let _ = self.rx.try_recv();
                }
                Err(chan::TrySendError::Disconnected(_)) => return,
            }
        }
    }

    /// Remove the item from the front of the queue.
    pub fn next(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
