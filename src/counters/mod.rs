pub mod scoreboard;

pub use scoreboard::Placement;

use crate::error::BotError;
use crate::storage::{Counter, DocumentStore};
use log::{debug, error, warn};
use parking_lot::Mutex;
use std::sync::Arc;

/// In-memory counter plus the version of its latest mutation.
struct Tracked {
    counter: Counter,
    version: u64,
}

/// A named counter held in memory, flushed to the store after every mutation.
#[derive(Clone)]
pub struct CounterHandle {
    state: Arc<Mutex<Tracked>>,
    /// Highest version written to the store. Held across the write so flushes
    /// for one counter never overlap.
    flushed: Arc<tokio::sync::Mutex<u64>>,
    store: Arc<dyn DocumentStore>,
}

impl CounterHandle {
    pub fn new(counter: Counter, store: Arc<dyn DocumentStore>) -> Self {
        CounterHandle {
            state: Arc::new(Mutex::new(Tracked { counter, version: 0 })),
            flushed: Arc::new(tokio::sync::Mutex::new(0)),
            store,
        }
    }

    /// Loads `name` from the store, provisioning it at zero when it was never seeded.
    pub async fn load(name: &str, store: Arc<dyn DocumentStore>) -> Result<Self, BotError> {
        let counter = match store.find_counter(name).await? {
            Some(counter) => counter,
            None => {
                warn!("Counter '{}' not found in store, creating it", name);
                store.create_counter(name).await?
            }
        };
        debug!("Loaded counter {} = {}", counter.name, counter.count);
        Ok(Self::new(counter, store))
    }

    pub fn name(&self) -> String {
        self.state.lock().counter.name.clone()
    }

    pub fn count(&self) -> i64 {
        self.state.lock().counter.count
    }

    pub fn snapshot(&self) -> Counter {
        self.state.lock().counter.clone()
    }

    pub fn increment(&self, user: &str, track_scoreboard: bool) -> (i64, PendingWrite) {
        let mut state = self.state.lock();
        let count = state.counter.increment(track_scoreboard.then_some(user));
        (count, self.pending(&mut state))
    }

    pub fn set_count(&self, value: i64) -> PendingWrite {
        let mut state = self.state.lock();
        state.counter.count = value;
        self.pending(&mut state)
    }

    pub fn top(&self, n: usize) -> Vec<Placement> {
        self.state.lock().counter.top(n)
    }

    fn pending(&self, state: &mut Tracked) -> PendingWrite {
        state.version += 1;
        PendingWrite {
            snapshot: state.counter.clone(),
            version: state.version,
            flushed: Arc::clone(&self.flushed),
            store: Arc::clone(&self.store),
        }
    }
}

/// The durable half of a counter mutation. Memory is already updated by the
/// time one of these exists; dropping it without committing skips the flush.
#[must_use = "a pending write does nothing unless committed or detached"]
pub struct PendingWrite {
    snapshot: Counter,
    version: u64,
    flushed: Arc<tokio::sync::Mutex<u64>>,
    store: Arc<dyn DocumentStore>,
}

impl PendingWrite {
    /// Writes the snapshot unless a newer one has already been stored.
    pub async fn commit(self) -> Result<(), BotError> {
        let mut flushed = self.flushed.lock().await;
        if *flushed >= self.version {
            debug!(
                "Skipping stale write of counter {} (version {}, stored {})",
                self.snapshot.name, self.version, *flushed
            );
            return Ok(());
        }

        self.store.save_counter(&self.snapshot).await?;
        *flushed = self.version;
        Ok(())
    }

    /// Fire-and-forget flush; a failure is only logged.
    pub fn detach(self) {
        tokio::spawn(async move {
            let name = self.snapshot.name.clone();
            if let Err(e) = self.commit().await {
                error!("Failed to persist counter '{}': {}", name, e);
            }
        });
    }
}
