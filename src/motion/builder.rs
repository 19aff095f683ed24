use crate::motion::easing::Ease;
use crate::motion::scheduler::{ActiveMotion, MotionHandle, MotionScheduler};
use crate::motion::values::Interpolatable;

/// Playback behavior when a motion reaches the end of a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopMode {
    /// Play forward and complete at the end value. A pass count above one
    /// restarts each pass from the start, like [`Loop`](Self::Loop).
    #[default]
    Once,
    /// Restart from the start value after each pass.
    Loop,
    /// Reverse direction after each pass.
    PingPong,
}

type ValueCallback<T> = Box<dyn FnMut(&T)>;
type CompletionCallback = Box<dyn FnOnce()>;

/// Fluent configuration for a single tween motion.
///
/// Accumulates endpoints, timing, and callbacks, then hands the finished
/// configuration to a [`MotionScheduler`] via [`schedule`](Self::schedule).
/// Value production starts on the scheduler's next update tick.
pub struct MotionBuilder<T: Interpolatable> {
    from: T,
    to: T,
    duration: f32,
    ease: Ease,
    loop_mode: LoopMode,
    loops: Option<u32>,
    time_scale: f32,
    on_value: Vec<ValueCallback<T>>,
    on_complete: Vec<CompletionCallback>,
}

impl<T: Interpolatable + 'static> MotionBuilder<T> {
    #[must_use]
    pub fn new(from: T, to: T, duration_secs: f32) -> Self {
        Self {
            from,
            to,
            duration: duration_secs,
            ease: Ease::default(),
            loop_mode: LoopMode::Once,
            loops: Some(1),
            time_scale: 1.0,
            on_value: Vec::new(),
            on_complete: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Plays `count` passes (at least one) with the given loop mode, then
    /// completes.
    #[must_use]
    pub fn with_loops(mut self, count: u32, mode: LoopMode) -> Self {
        self.loops = Some(count.max(1));
        self.loop_mode = mode;
        self
    }

    /// Loops endlessly with the given mode. The motion never completes on
    /// its own; it runs until cancelled or completed through its handle.
    #[must_use]
    pub fn looping(mut self, mode: LoopMode) -> Self {
        self.loops = None;
        self.loop_mode = mode;
        self
    }

    /// Playback speed multiplier. `2.0` plays twice as fast.
    #[must_use]
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.time_scale = scale;
        self
    }

    /// Registers a per-value callback, invoked with every produced value.
    ///
    /// Callbacks fire in registration order on each tick.
    #[must_use]
    pub fn on_update(mut self, callback: impl FnMut(&T) + 'static) -> Self {
        self.on_value.push(Box::new(callback));
        self
    }

    /// Appends a completion handler.
    ///
    /// Handlers form an ordered list and run in registration order on the
    /// tick the motion finishes, after the final value callback.
    #[must_use]
    pub fn on_complete(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_complete.push(Box::new(callback));
        self
    }

    /// Consumes the builder and schedules the motion, returning its handle.
    pub fn schedule(self, scheduler: &mut MotionScheduler) -> MotionHandle {
        scheduler.insert(Box::new(Motion {
            from: self.from,
            to: self.to,
            duration: self.duration,
            ease: self.ease,
            loop_mode: self.loop_mode,
            loops: self.loops,
            time: 0.0,
            time_scale: self.time_scale,
            on_value: self.on_value,
            on_complete: self.on_complete,
        }))
    }
}

/// A scheduled motion, advanced by the scheduler each tick.
struct Motion<T: Interpolatable> {
    from: T,
    to: T,
    duration: f32,
    ease: Ease,
    loop_mode: LoopMode,
    loops: Option<u32>,
    time: f32,
    time_scale: f32,
    on_value: Vec<ValueCallback<T>>,
    on_complete: Vec<CompletionCallback>,
}

impl<T: Interpolatable> Motion<T> {
    fn emit(&mut self, t: f32) {
        let eased = self.ease.apply(t);
        let value = T::lerp(self.from, self.to, eased);
        for callback in &mut self.on_value {
            callback(&value);
        }
    }

    fn run_completions(&mut self) {
        for callback in self.on_complete.drain(..) {
            callback();
        }
    }

    /// Progress at the moment the motion completes. A ping-pong with an
    /// even pass count ends back at the start value.
    fn final_progress(&self) -> f32 {
        match (self.loop_mode, self.loops) {
            (LoopMode::PingPong, Some(count)) if count % 2 == 0 => 0.0,
            _ => 1.0,
        }
    }
}

impl<T: Interpolatable> ActiveMotion for Motion<T> {
    fn advance(&mut self, dt: f32) -> bool {
        self.time = (self.time + dt * self.time_scale).max(0.0);

        // Zero-length motions emit the end value once and finish.
        if self.duration <= 0.0 {
            let t = self.final_progress();
            self.emit(t);
            self.run_completions();
            return true;
        }

        // A finite pass count finishes the motion regardless of mode.
        let pass = (self.time / self.duration).floor() as u32;
        let finished = match self.loops {
            Some(count) => pass >= count,
            None => false,
        };

        if finished {
            let t = self.final_progress();
            self.emit(t);
            self.run_completions();
            return true;
        }

        let within = self.time % self.duration;
        let mut t = within / self.duration;
        if self.loop_mode == LoopMode::PingPong && pass % 2 == 1 {
            t = 1.0 - t;
        }
        self.emit(t);
        false
    }

    fn finish(&mut self) {
        let t = self.final_progress();
        self.emit(t);
        self.run_completions();
    }
}
