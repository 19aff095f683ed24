#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod motion;
pub mod picker;
pub mod registry;
pub mod utils;

#[cfg(feature = "reactive")]
pub mod reactive;

pub use errors::{KinemaError, Result};
pub use motion::{Ease, Interpolatable, LoopMode, MotionBuilder, MotionHandle, MotionScheduler};
pub use picker::{ComponentDropdown, MenuNode, MenuTree};
pub use registry::{AnimationComponent, ComponentKind, ComponentRegistry};
pub use utils::time::Timer;

#[cfg(feature = "reactive")]
pub use reactive::{MotionBuilderRxExt, PropertyCell, Subject};
