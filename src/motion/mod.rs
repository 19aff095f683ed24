pub mod builder;
pub mod easing;
pub mod scheduler;
pub mod values;

pub use builder::{LoopMode, MotionBuilder};
pub use easing::Ease;
pub use scheduler::{MotionHandle, MotionScheduler};
pub use values::Interpolatable;
