use slotmap::{SlotMap, new_key_type};

use crate::errors::{KinemaError, Result};
use crate::utils::time::Timer;

new_key_type! {
    /// Opaque reference to a scheduled motion.
    pub struct MotionHandle;
}

/// A scheduled motion as seen by the scheduler, with the value type erased.
pub(crate) trait ActiveMotion {
    /// Advances by `dt` seconds. Returns `true` on the tick the motion
    /// finishes; the final value callback has fired before any completion
    /// handler by the time this returns.
    fn advance(&mut self, dt: f32) -> bool;

    /// Jumps to the end value and runs the completion handlers.
    fn finish(&mut self);
}

struct MotionSlot {
    motion: Box<dyn ActiveMotion>,
    paused: bool,
}

/// Owns all scheduled motions and advances them cooperatively.
///
/// The host drives [`update`](Self::update) once per frame or tick; every
/// motion callback runs synchronously inside it. The scheduler introduces
/// no threads of its own.
#[derive(Default)]
pub struct MotionScheduler {
    motions: SlotMap<MotionHandle, MotionSlot>,
    finished: Vec<MotionHandle>,
}

impl MotionScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            motions: SlotMap::with_key(),
            finished: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, motion: Box<dyn ActiveMotion>) -> MotionHandle {
        self.motions.insert(MotionSlot {
            motion,
            paused: false,
        })
    }

    /// Advances every active motion by `dt` seconds.
    ///
    /// Motions that finish on this tick are removed after their completion
    /// handlers run.
    pub fn update(&mut self, dt: f32) {
        for (handle, slot) in &mut self.motions {
            if slot.paused {
                continue;
            }
            if slot.motion.advance(dt) {
                self.finished.push(handle);
            }
        }
        for handle in self.finished.drain(..) {
            self.motions.remove(handle);
        }
    }

    /// Ticks `timer` and advances by its measured delta.
    pub fn tick(&mut self, timer: &mut Timer) {
        timer.tick();
        self.update(timer.dt_seconds());
    }

    /// Pauses a motion. Paused motions hold their position and produce no
    /// values until resumed.
    pub fn pause(&mut self, handle: MotionHandle) {
        if let Some(slot) = self.motions.get_mut(handle) {
            slot.paused = true;
        } else {
            log::warn!("Attempted to pause a motion that no longer exists.");
        }
    }

    pub fn resume(&mut self, handle: MotionHandle) {
        if let Some(slot) = self.motions.get_mut(handle) {
            slot.paused = false;
        } else {
            log::warn!("Attempted to resume a motion that no longer exists.");
        }
    }

    /// Removes a motion without running its completion handlers.
    pub fn cancel(&mut self, handle: MotionHandle) -> Result<()> {
        match self.motions.remove(handle) {
            Some(_) => Ok(()),
            None => Err(KinemaError::InvalidHandle),
        }
    }

    /// Jumps a motion to its end value, runs its completion handlers, and
    /// removes it.
    pub fn complete(&mut self, handle: MotionHandle) -> Result<()> {
        match self.motions.remove(handle) {
            Some(mut slot) => {
                slot.motion.finish();
                Ok(())
            }
            None => Err(KinemaError::InvalidHandle),
        }
    }

    #[must_use]
    pub fn is_active(&self, handle: MotionHandle) -> bool {
        self.motions.contains_key(handle)
    }

    #[must_use]
    pub fn is_paused(&self, handle: MotionHandle) -> bool {
        self.motions.get(handle).is_some_and(|slot| slot.paused)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.motions.len()
    }
}
