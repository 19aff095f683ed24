//! Reactive Bridge
//!
//! Bridges scheduled motions into push-based value channels: a motion can
//! be observed as a [`Subject`] stream or bound to an externally owned
//! [`PropertyCell`]. Compiled only with the `reactive` feature.

pub mod bridge;
pub mod property;
pub mod subject;

pub use bridge::MotionBuilderRxExt;
pub use property::PropertyCell;
pub use subject::Subject;
