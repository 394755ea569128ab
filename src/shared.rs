//! The shared module hands level state across the thread boundary to
//! presentation or learning layers.
//!
//! A renderer must never observe a torn update, e.g. the post-step agent
//! position next to the pre-step coin list. `SharedLevel` keeps the mutual
//! exclusion in one place: `step` holds the lock across one whole controller
//! step and `snapshot` clones the level under that same lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{
    controller::{Action, StepController},
    domain::Level,
};

/// Cloneable handle to a level shared between the simulation and its readers.
#[derive(Clone)]
pub struct SharedLevel {
    inner: Arc<Mutex<Level>>,
}

impl SharedLevel {
    pub fn new(level: Level) -> Self {
        Self {
            inner: Arc::new(Mutex::new(level)),
        }
    }

    /// Exclusive access to the level. A poisoned lock still yields the level;
    /// the domain state stays valid even if another holder panicked.
    pub fn lock(&self) -> MutexGuard<'_, Level> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A consistent copy of the level for rendering or state encoding.
    pub fn snapshot(&self) -> Level {
        self.lock().clone()
    }

    /// Apply one action atomically with respect to all other holders.
    pub fn step(&self, controller: &StepController, action: Action) -> bool {
        controller.step(&mut self.lock(), action)
    }
}

impl From<Level> for SharedLevel {
    fn from(value: Level) -> Self {
        Self::new(value)
    }
}
