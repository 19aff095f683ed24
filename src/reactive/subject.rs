use std::sync::Arc;

use parking_lot::Mutex;

type Observer<T> = Box<dyn FnMut(&T) + Send>;
type CompletionObserver = Box<dyn FnOnce() + Send>;

struct SubjectInner<T> {
    observers: Vec<Observer<T>>,
    completion_observers: Vec<CompletionObserver>,
    senders: Vec<flume::Sender<T>>,
    completed: bool,
}

/// Push-based value channel with at most one terminal completion signal.
///
/// Cloning shares the channel; any number of observers may subscribe.
/// Values are delivered synchronously from whatever tick produces them;
/// the internal lock is released while observers run, so an observer may
/// call back into the subject.
pub struct Subject<T> {
    inner: Arc<Mutex<SubjectInner<T>>>,
}

impl<T> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Subject<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SubjectInner {
                observers: Vec::new(),
                completion_observers: Vec::new(),
                senders: Vec::new(),
                completed: false,
            })),
        }
    }

    /// Subscribes a value observer. Observers registered after completion
    /// never fire.
    pub fn subscribe(&self, observer: impl FnMut(&T) + Send + 'static) {
        let mut inner = self.inner.lock();
        if inner.completed {
            return;
        }
        inner.observers.push(Box::new(observer));
    }

    /// Subscribes a completion observer. If the subject has already
    /// completed, the observer fires immediately.
    pub fn subscribe_completed(&self, observer: impl FnOnce() + Send + 'static) {
        {
            let mut inner = self.inner.lock();
            if !inner.completed {
                inner.completion_observers.push(Box::new(observer));
                return;
            }
        }
        observer();
    }

    /// Channel-backed observation: every subsequent value is sent to the
    /// returned receiver. Completion disconnects it.
    #[must_use]
    pub fn observe(&self) -> flume::Receiver<T> {
        let (sender, receiver) = flume::unbounded();
        let mut inner = self.inner.lock();
        if !inner.completed {
            inner.senders.push(sender);
        }
        receiver
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.inner.lock().completed
    }

    /// Signals completion. Idempotent; only the first call fires the
    /// completion observers and disconnects receivers.
    pub fn on_completed(&self) {
        let pending = {
            let mut inner = self.inner.lock();
            if inner.completed {
                return;
            }
            inner.completed = true;
            inner.observers.clear();
            inner.senders.clear();
            std::mem::take(&mut inner.completion_observers)
        };
        for observer in pending {
            observer();
        }
    }
}

impl<T: Clone> Subject<T> {
    /// Pushes a value to every observer and live receiver. Ignored after
    /// completion.
    pub fn on_next(&self, value: &T) {
        // Observers run with the lock released so they may touch the
        // subject again (subscribe, complete, query).
        let mut observers = {
            let mut inner = self.inner.lock();
            if inner.completed {
                return;
            }
            inner.senders.retain(|s| s.send(value.clone()).is_ok());
            std::mem::take(&mut inner.observers)
        };

        for observer in &mut observers {
            observer(value);
        }

        let mut inner = self.inner.lock();
        if inner.completed {
            // A callback completed the subject; its observer list is gone.
            return;
        }
        // Observers subscribed from inside a callback land behind the
        // existing ones.
        observers.append(&mut inner.observers);
        inner.observers = observers;
    }
}
