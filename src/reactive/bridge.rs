use std::sync::Weak;

use crate::errors::{KinemaError, Result};
use crate::motion::{Interpolatable, MotionBuilder, MotionHandle, MotionScheduler};
use crate::reactive::property::PropertyCell;
use crate::reactive::subject::Subject;

/// Reactive extensions for [`MotionBuilder`].
pub trait MotionBuilderRxExt<T: Interpolatable> {
    /// Schedules the motion and returns its value stream.
    ///
    /// Every produced value is pushed onto a fresh [`Subject`]; on the tick
    /// the motion finishes, any completion handlers already registered on
    /// the builder run first, then the subject signals completion. Returns
    /// immediately; values arrive on subsequent scheduler ticks.
    fn to_observable(self, scheduler: &mut MotionScheduler) -> Subject<T>;

    /// Schedules the motion and writes every produced value into `target`.
    ///
    /// Fails with [`KinemaError::TargetDropped`] before any scheduling if
    /// the cell is gone. The returned handle delegates all later control
    /// (pause, cancel, complete) to the scheduler; no completion wiring is
    /// added beyond what the scheduler itself performs.
    fn bind_to_property(
        self,
        scheduler: &mut MotionScheduler,
        target: &Weak<PropertyCell<T>>,
    ) -> Result<MotionHandle>;
}

impl<T> MotionBuilderRxExt<T> for MotionBuilder<T>
where
    T: Interpolatable + 'static,
{
    fn to_observable(self, scheduler: &mut MotionScheduler) -> Subject<T> {
        let subject = Subject::new();
        let feed = subject.clone();
        let done = subject.clone();
        self.on_update(move |value| feed.on_next(value))
            .on_complete(move || done.on_completed())
            .schedule(scheduler);
        subject
    }

    fn bind_to_property(
        self,
        scheduler: &mut MotionScheduler,
        target: &Weak<PropertyCell<T>>,
    ) -> Result<MotionHandle> {
        // The upgrade is this crate's rendition of the original null check:
        // it happens before the scheduler is touched.
        let Some(cell) = target.upgrade() else {
            return Err(KinemaError::TargetDropped);
        };
        Ok(self
            .on_update(move |value| cell.set(*value))
            .schedule(scheduler))
    }
}
